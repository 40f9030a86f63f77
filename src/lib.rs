#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::cast_lossless,           // Infallible casts are clear enough with `as`
    clippy::missing_errors_doc,      // Error variants document themselves
    clippy::missing_panics_doc,      // Panics documented only on the absent-cell read path
    clippy::module_name_repetitions, // e.g. LevelError in domain module
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::doc_markdown             // Level names in prose
)]

pub mod config;
pub mod domain;
pub mod enabler;
pub mod flag;
pub mod logging;

// Re-export main types for easy access
pub use config::{Config, LogFormat};
pub use domain::{Level, LevelCell, LevelError, parse_level};
pub use enabler::{LevelEnabler, LevelEnablerFn, LeveledEnabler, NopEnabler, level_of};
pub use flag::{FlagError, FlagGetter, FlagSet, FlagValue};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
