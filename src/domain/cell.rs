use super::{Level, LevelError};
use std::fmt;

const ABSENT_LEVEL: &str = "invalid operation on an absent level";

/// Mutable storage for a [`Level`] that may hold nothing at all.
///
/// Writes check for storage first and report [`LevelError::NilLevel`].
/// Reads (rendering, marshaling, [`LevelCell::level`]) assume storage exists
/// and panic otherwise; reading an absent cell is a caller bug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCell {
    slot: Option<Level>,
}

impl LevelCell {
    pub const fn new(level: Level) -> Self {
        Self { slot: Some(level) }
    }

    pub const fn absent() -> Self {
        Self { slot: None }
    }

    pub const fn is_present(&self) -> bool {
        self.slot.is_some()
    }

    pub const fn get_opt(&self) -> Option<Level> {
        self.slot
    }

    /// # Panics
    ///
    /// Panics if the cell is absent.
    pub fn level(&self) -> Level {
        match self.slot {
            Some(level) => level,
            None => panic!("{ABSENT_LEVEL}"),
        }
    }

    /// # Panics
    ///
    /// Panics if the cell is absent.
    pub fn marshal_text(&self) -> Result<&'static str, LevelError> {
        self.level().marshal_text()
    }

    pub fn unmarshal_text(&mut self, text: &str) -> Result<(), LevelError> {
        match self.slot.as_mut() {
            Some(level) => level.unmarshal_text(text),
            None => Err(LevelError::NilLevel),
        }
    }
}

impl From<Level> for LevelCell {
    fn from(level: Level) -> Self {
        Self::new(level)
    }
}

impl From<Option<Level>> for LevelCell {
    fn from(slot: Option<Level>) -> Self {
        Self { slot }
    }
}

/// # Panics
///
/// Formatting an absent cell panics.
impl fmt::Display for LevelCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.level(), f)
    }
}
