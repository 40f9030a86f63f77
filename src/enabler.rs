//! Capabilities for deciding whether a severity is active.
//!
//! Back-ends implement [`LevelEnabler`]. Back-ends that track an explicit
//! threshold also implement [`LeveledEnabler`] and return `Some(self)` from
//! [`LevelEnabler::as_leveled`], which lets [`level_of`] read the threshold
//! directly instead of probing.

use crate::domain::Level;
use std::sync::Arc;
use tracing::debug;
use tracing::level_filters::LevelFilter;

/// Decides whether a given level is active.
pub trait LevelEnabler {
    fn enabled(&self, level: Level) -> bool;

    /// The leveled view of this enabler, if it has one.
    fn as_leveled(&self) -> Option<&dyn LeveledEnabler> {
        None
    }
}

/// An enabler that knows its own minimum enabled level.
pub trait LeveledEnabler: LevelEnabler {
    fn level(&self) -> Level;
}

/// Reports the minimum enabled level of `enabler`.
///
/// Leveled enablers answer directly. Any other enabler is probed with the
/// defined levels from least to most severe and the first enabled one wins.
/// Returns [`Level::INVALID`] when there is no enabler or nothing is enabled.
pub fn level_of(enabler: Option<&dyn LevelEnabler>) -> Level {
    let Some(enabler) = enabler else {
        return Level::INVALID;
    };

    if let Some(leveled) = enabler.as_leveled() {
        return leveled.level();
    }

    debug!("enabler has no explicit threshold, probing defined levels");
    Level::CANONICAL
        .into_iter()
        .find(|&level| enabler.enabled(level))
        .unwrap_or(Level::INVALID)
}

impl LevelEnabler for Level {
    fn enabled(&self, level: Level) -> bool {
        Level::enabled(*self, level)
    }

    fn as_leveled(&self) -> Option<&dyn LeveledEnabler> {
        Some(self)
    }
}

impl LeveledEnabler for Level {
    fn level(&self) -> Level {
        *self
    }
}

impl LevelEnabler for LevelFilter {
    fn enabled(&self, level: Level) -> bool {
        level.to_tracing().is_some_and(|level| *self >= level)
    }
}

impl<T: LevelEnabler + ?Sized> LevelEnabler for &T {
    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }

    fn as_leveled(&self) -> Option<&dyn LeveledEnabler> {
        (**self).as_leveled()
    }
}

impl<T: LevelEnabler + ?Sized> LevelEnabler for Box<T> {
    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }

    fn as_leveled(&self) -> Option<&dyn LeveledEnabler> {
        (**self).as_leveled()
    }
}

impl<T: LevelEnabler + ?Sized> LevelEnabler for Arc<T> {
    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }

    fn as_leveled(&self) -> Option<&dyn LeveledEnabler> {
        (**self).as_leveled()
    }
}

/// Adapts a closure into a [`LevelEnabler`].
#[derive(Clone, Copy)]
pub struct LevelEnablerFn<F>(pub F);

impl<F> LevelEnabler for LevelEnablerFn<F>
where
    F: Fn(Level) -> bool,
{
    fn enabled(&self, level: Level) -> bool {
        (self.0)(level)
    }
}

/// Enabler that never enables anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopEnabler;

impl LevelEnabler for NopEnabler {
    fn enabled(&self, _level: Level) -> bool {
        false
    }
}
