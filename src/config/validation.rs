use super::{Config, ConfigError};

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Only the defined levels make sense as a threshold
        if !self.level.is_canonical() {
            return Err(ConfigError::InvalidConfig(format!(
                "Log level {} is not a usable threshold",
                self.level
            )));
        }

        if let Some(path) = &self.config_file
            && path.as_os_str().is_empty()
        {
            return Err(ConfigError::InvalidConfig(
                "Config file path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Level;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_level_rejected() {
        let config = Config {
            level: Level::INVALID,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Level(6) is not a usable threshold"));
    }

    #[test]
    fn test_empty_config_path_rejected() {
        let config = Config {
            config_file: Some(PathBuf::new()),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
