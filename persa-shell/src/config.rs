use std::{path::PathBuf, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing_subscriber::filter::LevelFilter;

fn deserialize_fromstr<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let string = String::deserialize(deserializer)?;
    T::from_str(&string)
        .map_err(|e| de::Error::custom(format!("Error parsing '{}': {}", string, e)))
}

pub fn serialize_to_string<T: std::fmt::Display, S: Serializer>(
    field: &T,
    s: S,
) -> Result<S::Ok, S::Error> {
    s.serialize_str(&field.to_string())
}

fn default_loglevel() -> LevelFilter {
    LevelFilter::INFO
}

/// Shell settings, read from an optional TOML file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// What messages to log
    #[serde(
        deserialize_with = "deserialize_fromstr",
        serialize_with = "serialize_to_string",
        default = "default_loglevel"
    )]
    pub log_level: LevelFilter,
    /// Open the login modal as soon as the page is displayed.
    #[serde(default)]
    pub open_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_loglevel(),
            open_on_start: false,
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    FileNotFound(PathBuf),
    ReadingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self {
            Self::FileNotFound(path) => write!(
                f,
                "Could not locate the configuration file '{}'.",
                path.display()
            ),
            Self::ReadingFile(e) => write!(f, "Failed to read configuration file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Reads the configuration file at `path`.
    pub fn from_file(path: PathBuf) -> Result<Config, ConfigError> {
        let content = std::fs::read(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.clone()),
            _ => ConfigError::ReadingFile(e.to_string()),
        })?;

        toml::from_slice::<Config>(&content)
            .map_err(|e| ConfigError::ReadingFile(format!("Parsing configuration file: {}", e)))
    }

    /// Reads the configuration file at `path`, falling back to the defaults
    /// if there is none.
    pub fn from_file_or_default(path: PathBuf) -> Result<Config, ConfigError> {
        match Self::from_file(path) {
            Err(ConfigError::FileNotFound(_)) => Ok(Config::default()),
            res => res,
        }
    }
}
