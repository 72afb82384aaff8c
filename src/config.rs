use serde::Deserialize;
use std::{
    fmt::Display,
    fs,
    io::{self, BufReader},
    path::{Path, PathBuf},
    time::Duration,
};

/// Name of the folder holding our files inside the OS configuration directory.
const APP_DIR: &str = "terminal-spinner";

pub const DEFAULT_DURATION: Duration = Duration::from_secs(10);

/// Given the base configuration folder path, returns
/// the path of the configuration JSON file.
fn get_json_path(config_path: &Path) -> PathBuf {
    config_path.join("config.json")
}

/// The configuration file in the default configuration directory
/// (as given by the `dirs` crate), if the OS has one.
///
/// The file itself may not exist.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| get_json_path(&dir.join(APP_DIR)))
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub rate_ms: Option<u64>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

impl Config {
    /// Reads the configuration JSON file at `json_path`.
    ///
    /// A missing file is not an error, and yields `Ok(None)`.
    pub fn load_config(json_path: &Path) -> Result<Option<Config>, LoadConfigError> {
        if !json_path.exists() {
            return Ok(None);
        }
        let shown = json_path.to_string_lossy().to_string();
        if !json_path.is_file() {
            return Err(LoadConfigError::NotAFile(shown));
        }
        let reader = BufReader::new(fs::File::open(json_path).map_err(LoadConfigError::FileError)?);
        serde_json::from_reader(reader)
            .map(Some)
            .map_err(|e| LoadConfigError::BadDeserialization(e, shown))
    }
}

pub enum LoadConfigError {
    NotAFile(String),
    FileError(io::Error),
    BadDeserialization(serde_json::Error, String),
}

impl Display for LoadConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadConfigError::NotAFile(path) => write!(f, "{} is not a file.", path),
            LoadConfigError::FileError(e) => write!(f, "Cannot open the configuration file: {}", e),
            LoadConfigError::BadDeserialization(e, path) => write!(
                f,
                "Invalid configuration in {}: {}\n\
                Only \"rate_ms\" and \"duration_ms\" are understood.",
                path, e
            ),
        }
    }
}

/// What the binary ends up running with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// `None` leaves the spinner on its own default rate.
    pub rate: Option<Duration>,
    pub duration: Duration,
}

impl Settings {
    /// Command line (or environment) values win over the configuration file,
    /// which wins over the defaults. Zero counts as unset.
    pub fn resolve(file: Option<Config>, rate_ms: Option<u64>, duration_ms: Option<u64>) -> Self {
        let file = file.unwrap_or_default();
        let pick = |flag: Option<u64>, from_file: Option<u64>| {
            flag.filter(|ms| *ms > 0)
                .or_else(|| from_file.filter(|ms| *ms > 0))
                .map(Duration::from_millis)
        };
        Settings {
            rate: pick(rate_ms, file.rate_ms),
            duration: pick(duration_ms, file.duration_ms).unwrap_or(DEFAULT_DURATION),
        }
    }
}
