//! Domain layer for rask-log-level.
//!
//! Contains the canonical types shared across all modules:
//! - `Level`: ordered log severity with a sentinel invalid value
//! - `LevelCell`: absent-capable mutable level storage
//! - `LevelError`: codec error type

pub mod cell;
pub mod codec;
pub mod error;
pub mod level;

pub use cell::LevelCell;
pub use codec::parse_level;
pub use error::LevelError;
pub use level::Level;
