use anyhow::Context;
use rask_log_level::config::ConfigError;
use rask_log_level::logging::init_tracing;
use rask_log_level::{Config, Level, parse_level};
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let config = match Config::from_args_and_env(std::env::args_os()) {
        Ok(config) => config,
        // --help, --version and usage errors are rendered by clap itself
        Err(ConfigError::Cli(e)) => e.exit(),
        Err(e) => return Err(e.into()),
    };
    init_tracing(config.level, config.log_format)?;

    info!(level = %config.level, version = rask_log_level::VERSION, "checking levels");

    for text in &config.levels {
        let level = parse_level(text)
            .inspect_err(|e| error!(input = %text, "{e}"))
            .with_context(|| format!("checking {text:?}"))?;
        println!("{}", describe(config.level, level));
    }

    Ok(())
}

fn describe(threshold: Level, level: Level) -> String {
    let state = if threshold.enabled(level) {
        "enabled"
    } else {
        "disabled"
    };
    format!("{level}\t{}\t{state}", level.capital_string())
}
