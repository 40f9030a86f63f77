//! Settable configuration values and a small single-dash flag parser.
//!
//! [`FlagValue`] is the contract a configuration framework needs from a
//! value: render it, and parse text into it in place. [`FlagSet`] hosts such
//! values under `-name` flags and reports rejected input as
//! `invalid value "<input>" for flag -<name>: <error>`, followed by usage.

use crate::domain::error::quote;
use crate::domain::{Level, LevelCell};
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use thiserror::Error;

pub type SetError = Box<dyn StdError + Send + Sync>;

/// A value that can be set from text.
pub trait FlagValue: fmt::Display {
    fn set(&mut self, text: &str) -> Result<(), SetError>;
}

/// A [`FlagValue`] whose current contents can be read back.
pub trait FlagGetter: FlagValue {
    type Value;

    fn get(&self) -> Self::Value;
}

impl FlagValue for Level {
    fn set(&mut self, text: &str) -> Result<(), SetError> {
        self.unmarshal_text(text)?;
        Ok(())
    }
}

impl FlagGetter for Level {
    type Value = Level;

    fn get(&self) -> Level {
        *self
    }
}

impl FlagValue for LevelCell {
    fn set(&mut self, text: &str) -> Result<(), SetError> {
        self.unmarshal_text(text)?;
        Ok(())
    }
}

impl FlagGetter for LevelCell {
    type Value = Level;

    /// # Panics
    ///
    /// Panics if the cell is absent.
    fn get(&self) -> Level {
        self.level()
    }
}

#[derive(Error, Debug)]
pub enum FlagError {
    #[error("invalid value {} for flag -{name}: {source}", quote(.value))]
    InvalidValue {
        value: String,
        name: String,
        #[source]
        source: SetError,
    },

    #[error("flag provided but not defined: -{0}")]
    Undefined(String),

    #[error("flag needs an argument: -{0}")]
    MissingArgument(String),

    #[error("bad flag syntax: {0}")]
    BadSyntax(String),

    #[error("flag redefined: {0}")]
    Redefined(String),

    #[error("flag: help requested")]
    HelpRequested,

    #[error("failed to write flag output: {0}")]
    Output(#[from] io::Error),
}

struct Flag<'a> {
    value: &'a mut dyn FlagValue,
    usage: String,
    default: String,
}

/// A named set of flags parsed from `-name value`, `-name=value`, or the
/// double-dash spellings of both. Parsing stops at the first non-flag
/// argument or after `--`.
pub struct FlagSet<'a> {
    name: String,
    flags: BTreeMap<String, Flag<'a>>,
    output: Box<dyn Write + 'a>,
    args: Vec<String>,
}

impl<'a> FlagSet<'a> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: BTreeMap::new(),
            output: Box::new(io::stderr()),
            args: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Destination for error and usage messages. Defaults to stderr.
    pub fn set_output(&mut self, output: impl Write + 'a) {
        self.output = Box::new(output);
    }

    /// Registers `value` under `name`. The value's current rendering is
    /// recorded as the default shown in usage, so `value` must be readable.
    pub fn var(
        &mut self,
        value: &'a mut dyn FlagValue,
        name: &str,
        usage: &str,
    ) -> Result<(), FlagError> {
        if self.flags.contains_key(name) {
            return Err(FlagError::Redefined(name.to_string()));
        }
        let default = value.to_string();
        self.flags.insert(
            name.to_string(),
            Flag {
                value,
                usage: usage.to_string(),
                default,
            },
        );
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&(dyn FlagValue + 'a)> {
        self.flags.get(name).map(|flag| &*flag.value)
    }

    /// Arguments left over after the flags.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Parses `args` (without the program name). On failure the error and
    /// the usage text are written to the output before returning.
    pub fn parse<I, S>(&mut self, args: I) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut remaining: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        remaining.reverse();

        match self.parse_flags(&mut remaining) {
            Ok(()) => {
                remaining.reverse();
                self.args = remaining;
                Ok(())
            }
            Err(FlagError::HelpRequested) => {
                self.write_usage()?;
                Err(FlagError::HelpRequested)
            }
            Err(err) => {
                writeln!(self.output, "{err}")?;
                self.write_usage()?;
                Err(err)
            }
        }
    }

    // `remaining` is reversed so the next argument is at the end.
    fn parse_flags(&mut self, remaining: &mut Vec<String>) -> Result<(), FlagError> {
        while let Some(arg) = remaining.last() {
            if arg.len() < 2 || !arg.starts_with('-') {
                return Ok(());
            }
            if arg == "--" {
                remaining.pop();
                return Ok(());
            }

            let raw = arg.strip_prefix("--").unwrap_or(&arg[1..]);
            if raw.is_empty() || raw.starts_with('-') || raw.starts_with('=') {
                return Err(FlagError::BadSyntax(arg.clone()));
            }
            let (name, inline_value) = match raw.split_once('=') {
                Some((name, value)) => (name.to_string(), Some(value.to_string())),
                None => (raw.to_string(), None),
            };
            remaining.pop();

            let Some(flag) = self.flags.get_mut(&name) else {
                if name == "help" || name == "h" {
                    return Err(FlagError::HelpRequested);
                }
                return Err(FlagError::Undefined(name));
            };

            let value = match inline_value {
                Some(value) => value,
                None => remaining
                    .pop()
                    .ok_or_else(|| FlagError::MissingArgument(name.clone()))?,
            };

            if let Err(source) = flag.value.set(&value) {
                return Err(FlagError::InvalidValue {
                    value,
                    name,
                    source,
                });
            }
        }
        Ok(())
    }

    /// Usage text listing every flag in name order.
    pub fn usage(&self) -> String {
        let mut out = format!("Usage of {}:\n", self.name);
        for (name, flag) in &self.flags {
            let _ = write!(out, "  -{name} value\n    \t{}", flag.usage.replace('\n', "\n    \t"));
            if !flag.default.is_empty() {
                let _ = write!(out, " (default {})", flag.default);
            }
            out.push('\n');
        }
        out
    }

    fn write_usage(&mut self) -> Result<(), FlagError> {
        let usage = self.usage();
        self.output.write_all(usage.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_set_and_get() {
        let mut level = Level::default();
        level.set("ERROR").unwrap();
        assert_eq!(level.get(), Level::ERROR);
        assert_eq!(level.to_string(), "error");
    }

    #[test]
    fn test_level_set_propagates_codec_error() {
        let mut level = Level::default();
        let err = level.set("nope").unwrap_err();
        assert_eq!(err.to_string(), r#"unrecognized level: "nope""#);
        assert!(err.downcast_ref::<crate::LevelError>().is_some());
    }

    #[test]
    fn test_absent_cell_set_errors() {
        let mut cell = LevelCell::absent();
        let err = cell.set("debug").unwrap_err();
        assert_eq!(
            err.downcast_ref::<crate::LevelError>(),
            Some(&crate::LevelError::NilLevel)
        );
    }

    #[test]
    #[should_panic(expected = "invalid operation on an absent level")]
    fn test_absent_cell_get_panics() {
        let _ = LevelCell::absent().get();
    }

    #[test]
    fn test_equals_syntax_and_positional_args() {
        let mut level = Level::default();
        let mut fs = FlagSet::new("test");
        fs.set_output(io::sink());
        fs.var(&mut level, "level", "log level").unwrap();

        fs.parse(["--level=warning", "rest", "-level", "debug"]).unwrap();
        assert_eq!(fs.lookup("level").unwrap().to_string(), "warn");
        assert_eq!(fs.args(), ["rest", "-level", "debug"]);
    }

    #[test]
    fn test_double_dash_terminates_flags() {
        let mut level = Level::default();
        let mut fs = FlagSet::new("test");
        fs.var(&mut level, "level", "log level").unwrap();

        fs.parse(["-level", "fatal", "--", "-level"]).unwrap();
        assert_eq!(fs.args(), ["-level"]);
        drop(fs);
        assert_eq!(level, Level::FATAL);
    }

    #[test]
    fn test_undefined_flag() {
        let mut buf = Vec::new();
        let mut level = Level::default();
        let mut fs = FlagSet::new("test");
        fs.set_output(&mut buf);
        fs.var(&mut level, "level", "log level").unwrap();

        let err = fs.parse(["-verbosity", "debug"]).unwrap_err();
        assert!(matches!(err, FlagError::Undefined(ref name) if name == "verbosity"));
        drop(fs);

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.lines().next(), Some("flag provided but not defined: -verbosity"));
        assert!(output.contains("Usage of test:"));
    }

    #[test]
    fn test_missing_argument() {
        let mut level = Level::default();
        let mut fs = FlagSet::new("test");
        fs.set_output(io::sink());
        fs.var(&mut level, "level", "log level").unwrap();

        let err = fs.parse(["-level"]).unwrap_err();
        assert_eq!(err.to_string(), "flag needs an argument: -level");
    }

    #[test]
    fn test_invalid_value_quotes_control_characters() {
        let mut level = Level::default();
        let mut fs = FlagSet::new("test");
        fs.set_output(io::sink());
        fs.var(&mut level, "level", "log level").unwrap();

        let err = fs.parse(["-level", "in\u{1}fo"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"invalid value "in\x01fo" for flag -level: unrecognized level: "in\x01fo""#
        );
    }

    #[test]
    fn test_bad_syntax() {
        let mut fs = FlagSet::new("test");
        fs.set_output(io::sink());
        let err = fs.parse(["---level"]).unwrap_err();
        assert!(matches!(err, FlagError::BadSyntax(_)));
    }

    #[test]
    fn test_redefinition_rejected() {
        let mut first = Level::default();
        let mut second = LevelCell::new(Level::WARN);
        let mut fs = FlagSet::new("test");
        fs.var(&mut first, "level", "log level").unwrap();
        let err = fs.var(&mut second, "level", "again").unwrap_err();
        assert_eq!(err.to_string(), "flag redefined: level");
    }

    #[test]
    fn test_usage_lists_defaults() {
        let mut level = Level::WARN;
        let mut fs = FlagSet::new("app");
        fs.var(&mut level, "level", "minimum level").unwrap();
        assert_eq!(fs.usage(), "Usage of app:\n  -level value\n    \tminimum level (default warn)\n");
    }

    #[test]
    fn test_help_writes_usage_only() {
        let mut buf = Vec::new();
        let mut fs = FlagSet::new("app");
        fs.set_output(&mut buf);
        assert!(matches!(fs.parse(["-h"]), Err(FlagError::HelpRequested)));
        drop(fs);
        assert_eq!(String::from_utf8(buf).unwrap(), "Usage of app:\n");
    }
}
