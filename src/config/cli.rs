use super::serde_helpers::{load_env_path_opt, load_env_var};
use super::{ConfigError, LogFormat};
use crate::domain::Level;
use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
#[serde(default)]
pub struct Config {
    /// Minimum enabled log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub level: Level,

    /// Diagnostic output format
    #[arg(long, env = "LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    /// Configuration file path (optional)
    #[arg(long, env = "CONFIG_FILE")]
    #[serde(skip)]
    pub config_file: Option<PathBuf>,

    /// Level names to check against the configured level
    #[serde(skip)]
    pub levels: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            log_format: LogFormat::Text,
            config_file: None,
            levels: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::try_parse_from(args)?;
        config.validate()?;
        debug!(level = %config.level, "loaded configuration from arguments");
        Ok(config)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();

        load_env_var("LOG_LEVEL", &mut config.level)?;
        load_env_var("LOG_FORMAT", &mut config.log_format)?;
        load_env_path_opt("CONFIG_FILE", &mut config.config_file);

        config.validate()?;
        debug!(level = %config.level, "loaded configuration from environment");
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = toml::from_str(&content)?;
        config.config_file = Some(path.as_ref().to_path_buf());
        config.validate()?;
        debug!(level = %config.level, path = %path.as_ref().display(), "loaded configuration file");
        Ok(config)
    }

    /// CLI arguments (and their env fallbacks) layered over the config file,
    /// if one is named. Only values neither passed on the command line nor
    /// set through the environment take the file's value.
    pub fn from_args_and_env<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Config::command().try_get_matches_from(args)?;
        let mut config = Config::from_arg_matches(&matches)?;

        if let Some(path) = config.config_file.clone() {
            let file_config = Self::from_file(&path)?;

            if left_at_default(&matches, "level") {
                config.level = file_config.level;
            }
            if left_at_default(&matches, "log_format") {
                config.log_format = file_config.log_format;
            }
        }

        config.validate()?;
        debug!(level = %config.level, "loaded layered configuration");
        Ok(config)
    }
}

fn left_at_default(matches: &ArgMatches, id: &str) -> bool {
    matches!(
        matches.value_source(id),
        None | Some(ValueSource::DefaultValue)
    )
}
