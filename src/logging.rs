use crate::config::LogFormat;
use crate::domain::Level;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Logging system initialization failed: {details}")]
    InitFailed {
        details: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Filter honouring `RUST_LOG`, falling back to `level` when it is unset.
pub fn build_filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from(level).into())
        .from_env_lossy()
}

/// Installs the global tracing subscriber.
pub fn init_tracing(level: Level, format: LogFormat) -> Result<(), LoggingError> {
    let registry = tracing_subscriber::registry().with(build_filter(level));

    let result = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init(),
    };

    result.map_err(|e| LoggingError::InitFailed {
        details: "Failed to set global tracing subscriber".to_string(),
        source: Box::new(e),
    })
}
