use log::LevelFilter;
use num_traits::PrimInt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    None,
    Some,
    Very,
}

impl<X> From<X> for Verbosity
where
    X: PrimInt,
{
    fn from(value: X) -> Self {
        let one = X::one();
        if value.lt(&one) {
            Verbosity::None
        } else if value.lt(&(one + one)) {
            Verbosity::Some
        } else {
            Verbosity::Very
        }
    }
}

impl Verbosity {
    /// The log level used when `RUST_LOG` does not say otherwise.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::None => LevelFilter::Info,
            Verbosity::Some => LevelFilter::Debug,
            Verbosity::Very => LevelFilter::Trace,
        }
    }
}
