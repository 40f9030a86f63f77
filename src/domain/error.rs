use super::Level;
use std::fmt::Write as _;
use thiserror::Error;

/// Errors produced while encoding or decoding a [`Level`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// Text that doesn't name any level. Carries the input verbatim.
    #[error("unrecognized level: {}", quote(.0))]
    Unrecognized(String),

    /// Decoding into a cell that holds no storage.
    #[error("can't unmarshal into an absent level")]
    NilLevel,

    /// Encoding a level that has no canonical name.
    #[error("unable to marshal level {0}")]
    Unmarshalable(Level),
}

/// Double-quotes `text` for error messages: C-style escapes for the usual
/// control characters, `\xNN` for other ASCII controls and `\uNNNN` for the
/// remaining control characters.
/// Printable text, including non-ASCII, is kept as is.
pub(crate) fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0b}' => out.push_str("\\v"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
