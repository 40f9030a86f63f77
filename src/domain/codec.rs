//! Text encoding for [`Level`].
//!
//! Encoding is strict: only the seven defined levels have a text form.
//! Decoding is lenient: names match ASCII case-insensitively, `warning` is
//! accepted for [`Level::WARN`], and the empty string decodes to
//! [`Level::INFO`].

use super::{Level, LevelError};
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

const NAMES: &[(&str, Level)] = &[
    ("debug", Level::DEBUG),
    ("info", Level::INFO),
    ("warn", Level::WARN),
    ("error", Level::ERROR),
    ("dpanic", Level::DPANIC),
    ("panic", Level::PANIC),
    ("fatal", Level::FATAL),
];

// Spelling used by other logging libraries.
const ALIASES: &[(&str, Level)] = &[("warning", Level::WARN)];

/// Parses a level using the same rules as [`Level::unmarshal_text`].
pub fn parse_level(text: &str) -> Result<Level, LevelError> {
    let mut level = Level::default();
    level.unmarshal_text(text)?;
    Ok(level)
}

fn lookup(text: &str) -> Option<Level> {
    if text.is_empty() {
        return Some(Level::INFO);
    }

    NAMES
        .iter()
        .chain(ALIASES)
        .find(|(name, _)| name.eq_ignore_ascii_case(text))
        .map(|&(_, level)| level)
}

impl Level {
    /// Canonical lowercase name. Fails for levels without one.
    pub fn marshal_text(&self) -> Result<&'static str, LevelError> {
        self.name().ok_or(LevelError::Unmarshalable(*self))
    }

    /// Decodes `text` into this level. On failure the level is left untouched.
    pub fn unmarshal_text(&mut self, text: &str) -> Result<(), LevelError> {
        match lookup(text) {
            Some(level) => {
                *self = level;
                Ok(())
            }
            None => Err(LevelError::Unrecognized(text.to_string())),
        }
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(s)
    }
}

impl Serialize for Level {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = self.marshal_text().map_err(S::Error::custom)?;
        serializer.serialize_str(text)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_level(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_text() {
        let cases = [
            ("debug", Level::DEBUG),
            ("info", Level::INFO),
            ("warn", Level::WARN),
            ("error", Level::ERROR),
            ("dpanic", Level::DPANIC),
            ("panic", Level::PANIC),
            ("fatal", Level::FATAL),
        ];

        for (text, level) in cases {
            assert_eq!(level.marshal_text().unwrap(), text);

            let mut unmarshaled = Level::default();
            unmarshaled.unmarshal_text(text).unwrap();
            assert_eq!(unmarshaled, level, "text {text:?} decoded to the wrong level");
        }
    }

    #[test]
    fn test_empty_text_is_info() {
        let mut level = Level::FATAL;
        level.unmarshal_text("").unwrap();
        assert_eq!(level, Level::INFO);
        assert_eq!(parse_level("").unwrap(), Level::INFO);
    }

    #[test]
    fn test_warning_alias() {
        for text in ["warning", "WARNING", "Warning", "wArNiNg"] {
            assert_eq!(parse_level(text).unwrap(), Level::WARN, "alias {text:?}");
        }
    }

    #[test]
    fn test_capital_levels_parse() {
        for level in Level::CANONICAL {
            let text = level.capital_string();
            assert_eq!(parse_level(&text).unwrap(), level);
        }
    }

    #[test]
    fn test_weird_levels_parse() {
        let cases = [
            ("Debug", Level::DEBUG),
            ("Info", Level::INFO),
            ("Dpanic", Level::DPANIC),
            ("DeBuG", Level::DEBUG),
            ("InFo", Level::INFO),
            ("WaRn", Level::WARN),
            ("ErRor", Level::ERROR),
            ("DpAnIc", Level::DPANIC),
            ("PaNiC", Level::PANIC),
            ("FaTaL", Level::FATAL),
        ];

        for (text, level) in cases {
            assert_eq!(parse_level(text).unwrap(), level, "text {text:?}");
        }
    }

    #[test]
    fn test_parse_level_unknown_text() {
        let err = parse_level("FOO").unwrap_err();
        assert_eq!(err, LevelError::Unrecognized("FOO".to_string()));
        assert_eq!(err.to_string(), r#"unrecognized level: "FOO""#);
    }

    #[test]
    fn test_unmarshal_failure_keeps_previous_value() {
        let mut level = Level::ERROR;
        assert!(level.unmarshal_text("foo").is_err());
        assert_eq!(level, Level::ERROR);
    }

    #[test]
    fn test_names_are_not_trimmed() {
        assert!(parse_level(" info").is_err());
        assert!(parse_level("info ").is_err());
    }

    #[test]
    fn test_marshal_rejects_invalid_levels() {
        assert_eq!(
            Level::INVALID.marshal_text(),
            Err(LevelError::Unmarshalable(Level::INVALID))
        );
        let err = Level::from_ordinal(-42).marshal_text().unwrap_err();
        assert_eq!(err.to_string(), "unable to marshal level Level(-42)");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::DEBUG);
        assert!("nope".parse::<Level>().is_err());
    }

    #[test]
    fn test_serde_json() {
        let json = serde_json::to_string(&Level::DPANIC).unwrap();
        assert_eq!(json, r#""dpanic""#);

        let level: Level = serde_json::from_str(r#""WARNING""#).unwrap();
        assert_eq!(level, Level::WARN);

        let err = serde_json::from_str::<Level>(r#""verbose""#).unwrap_err();
        assert!(err.to_string().contains(r#"unrecognized level: "verbose""#));

        assert!(serde_json::to_string(&Level::INVALID).is_err());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn display_is_canonical_or_debug_form(ordinal in any::<i8>()) {
                let level = Level::from_ordinal(ordinal);
                let text = level.to_string();
                if (-1..=5).contains(&ordinal) {
                    prop_assert_eq!(parse_level(&text).unwrap(), level);
                } else {
                    prop_assert_eq!(text, format!("Level({ordinal})"));
                }
            }

            #[test]
            fn any_casing_of_a_name_parses(
                index in 0usize..7,
                mask in proptest::collection::vec(any::<bool>(), 6),
            ) {
                let level = Level::CANONICAL[index];
                let text: String = level
                    .to_string()
                    .chars()
                    .zip(mask.iter().cycle())
                    .map(|(c, &upper)| if upper { c.to_ascii_uppercase() } else { c })
                    .collect();
                prop_assert_eq!(parse_level(&text).unwrap(), level);
            }

            #[test]
            fn unrecognized_text_is_echoed(text in "[a-z]{1,12}") {
                prop_assume!(lookup(&text).is_none());
                let err = parse_level(&text).unwrap_err();
                prop_assert_eq!(err.to_string(), format!("unrecognized level: \"{text}\""));
            }
        }
    }
}
