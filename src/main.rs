use clap::{App, Arg};
use log::{debug, info};
use std::{path::PathBuf, thread};
use terminal_spinner::{Config as SpinnerConfig, Spinner};

mod config;
mod userpath;
mod verbosity;

use config::Settings;
use verbosity::Verbosity;

/// Validator for arguments given in milliseconds.
fn positive_millis(value: String) -> Result<(), String> {
    match value.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(()),
        _ => Err(format!(
            "{} is not a positive number of milliseconds.",
            value
        )),
    }
}

/// The configuration file to read: the one the user asked for, or else the
/// one in the default configuration directory.
fn config_path(user_path: Option<&str>) -> Option<PathBuf> {
    match user_path {
        Some(user_path) => match userpath::resolve_file(user_path) {
            Ok(file) => {
                debug!("Using configuration file {}", file.display());
                Some(file)
            }
            Err(msg) => {
                eprintln!("{}", msg);
                std::process::exit(exitcode::CONFIG);
            }
        },
        None => config::default_config_path(),
    }
}

fn main() {
    let matches = App::new("terminal-spinner")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Miguel Murça <zvthryzhepn+rot13@gmail.com>")
        .about("Draws a spinner on stderr for a while, then erases it.")
        .arg(
            Arg::with_name("v")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        )
        .arg(
            Arg::with_name("rate")
                .long("rate")
                .value_name("MS")
                .takes_value(true)
                .env("SPINNER_RATE")
                .validator(positive_millis)
                .help("Time between frames, in milliseconds [default: 250]"),
        )
        .arg(
            Arg::with_name("duration")
                .long("duration")
                .value_name("MS")
                .takes_value(true)
                .env("SPINNER_DURATION")
                .validator(positive_millis)
                .help("How long to spin, in milliseconds [default: 10000]"),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .hidden(true)
                .env("SPINNER_CONFIG")
                .validator(|path| userpath::resolve_file(&path).map(|_| ())),
        )
        .get_matches();

    let verbosity = Verbosity::from(matches.occurrences_of("v"));
    env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .parse_env("RUST_LOG")
        .init();

    let file_config = match config_path(matches.value_of("config")) {
        Some(path) => match config::Config::load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                clap::Error::with_description(&err.to_string(), clap::ErrorKind::InvalidValue)
                    .exit()
            }
        },
        None => None,
    };

    // Both were validated by clap.
    let millis = |name: &str| matches.value_of(name).and_then(|v| v.parse::<u64>().ok());
    let settings = Settings::resolve(file_config, millis("rate"), millis("duration"));
    debug!("Running with {:?}", settings);

    let mut spinner_config = SpinnerConfig::default();
    if let Some(rate) = settings.rate {
        spinner_config = spinner_config.with_rate(rate);
    }
    let spinner = Spinner::new(spinner_config);

    info!("Spinner started");
    spinner.start();

    thread::sleep(settings.duration);

    spinner.stop();
    info!("Spinner stopped");
}
