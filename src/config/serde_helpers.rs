use std::env::{self, VarError};
use std::path::PathBuf;

/// Helper function to load and parse an environment variable.
/// Returns Ok(()) if the variable doesn't exist (keeps default).
pub fn load_env_var<T>(name: &str, target: &mut T) -> Result<(), super::ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(value) => {
            *target = value
                .parse()
                .map_err(|e| super::ConfigError::EnvError(format!("Invalid {name}: {e}")))?;
            Ok(())
        }
        Err(VarError::NotPresent) => Ok(()),
        Err(VarError::NotUnicode(_)) => Err(super::ConfigError::EnvError(format!(
            "{name} is not valid unicode"
        ))),
    }
}

/// Helper function to load an optional PathBuf environment variable.
pub fn load_env_path_opt(name: &str, target: &mut Option<PathBuf>) {
    if let Some(value) = env::var_os(name) {
        *target = Some(PathBuf::from(value));
    }
}
