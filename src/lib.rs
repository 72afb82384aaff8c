//! A small indeterminate-progress spinner for command line programs.
//!
//! ```no_run
//! use terminal_spinner::{Config, Spinner};
//! use std::time::Duration;
//!
//! let spinner = Spinner::new(Config::default().with_rate(Duration::from_millis(100)));
//! spinner.start();
//! std::thread::sleep(Duration::from_secs(2));
//! spinner.stop();
//! ```

pub mod spinner;

pub use spinner::{Config, Spinner, DEFAULT_RATE, FRAMES};
