use std::borrow::Cow;
use std::fmt;

/// Severity of a log record.
///
/// Levels are totally ordered by ordinal: a more severe level has a larger
/// ordinal. The seven defined levels occupy ordinals `-1..=5`; [`Level::INVALID`]
/// sits directly above [`Level::FATAL`]. Any other `i8` is representable and
/// renders as `Level(<ordinal>)`.
///
/// The default level is [`Level::INFO`], so an omitted setting still logs
/// something useful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i8);

impl Level {
    /// Verbose output, usually disabled in production.
    pub const DEBUG: Level = Level(-1);
    /// The default priority.
    pub const INFO: Level = Level(0);
    /// More important than info, but does not need individual review.
    pub const WARN: Level = Level(1);
    /// High priority. A smoothly running application shouldn't produce these.
    pub const ERROR: Level = Level(2);
    /// Particularly important errors. Loggers panic on these in development.
    pub const DPANIC: Level = Level(3);
    /// Logs a message, then panics.
    pub const PANIC: Level = Level(4);
    /// Logs a message, then terminates the process.
    pub const FATAL: Level = Level(5);
    /// Sentinel for "no known level". Never produced by parsing.
    pub const INVALID: Level = Level(6);

    /// The defined levels, least severe first.
    pub const CANONICAL: [Level; 7] = [
        Level::DEBUG,
        Level::INFO,
        Level::WARN,
        Level::ERROR,
        Level::DPANIC,
        Level::PANIC,
        Level::FATAL,
    ];

    pub const fn from_ordinal(ordinal: i8) -> Self {
        Level(ordinal)
    }

    pub const fn ordinal(self) -> i8 {
        self.0
    }

    /// Canonical lowercase name, or `None` outside the seven defined levels.
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Level::DEBUG => Some("debug"),
            Level::INFO => Some("info"),
            Level::WARN => Some("warn"),
            Level::ERROR => Some("error"),
            Level::DPANIC => Some("dpanic"),
            Level::PANIC => Some("panic"),
            Level::FATAL => Some("fatal"),
            _ => None,
        }
    }

    pub const fn is_canonical(self) -> bool {
        self.name().is_some()
    }

    /// Upper-cased rendering: `INFO`, `DPANIC`, `LEVEL(-42)`.
    pub fn capital_string(self) -> Cow<'static, str> {
        match self {
            Level::DEBUG => Cow::Borrowed("DEBUG"),
            Level::INFO => Cow::Borrowed("INFO"),
            Level::WARN => Cow::Borrowed("WARN"),
            Level::ERROR => Cow::Borrowed("ERROR"),
            Level::DPANIC => Cow::Borrowed("DPANIC"),
            Level::PANIC => Cow::Borrowed("PANIC"),
            Level::FATAL => Cow::Borrowed("FATAL"),
            other => Cow::Owned(format!("LEVEL({})", other.0)),
        }
    }

    /// Reports whether `other` is at least as severe as this threshold.
    pub const fn enabled(self, other: Level) -> bool {
        self.0 <= other.0
    }

    /// Closest `tracing` level. DPanic, panic and fatal collapse onto
    /// `ERROR`, levels below debug map to `TRACE`, and anything above fatal
    /// has no counterpart.
    pub fn to_tracing(self) -> Option<tracing::Level> {
        match self.0 {
            i8::MIN..=-2 => Some(tracing::Level::TRACE),
            -1 => Some(tracing::Level::DEBUG),
            0 => Some(tracing::Level::INFO),
            1 => Some(tracing::Level::WARN),
            2..=5 => Some(tracing::Level::ERROR),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Level({})", self.0),
        }
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR => Level::ERROR,
            tracing::Level::WARN => Level::WARN,
            tracing::Level::INFO => Level::INFO,
            // DEBUG and TRACE
            _ => Level::DEBUG,
        }
    }
}

impl From<Level> for tracing::level_filters::LevelFilter {
    fn from(level: Level) -> Self {
        use tracing::level_filters::LevelFilter;

        match level.to_tracing() {
            Some(level) => LevelFilter::from_level(level),
            None => LevelFilter::OFF,
        }
    }
}
