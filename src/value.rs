//! Option values.
//!
//! An option map mixes semantic flags (`block`, `escape`, `ratio`) with
//! literal HTML attributes, so a value is any JSON-like scalar or an
//! arbitrarily nested list of them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Key-sorted map of option values.
pub type OptionMap = BTreeMap<String, OptionValue>;

/// A single option value.
///
/// Serialized untagged, so JSON `null`, booleans, numbers, strings and arrays
/// map directly onto the variants. Objects are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<OptionValue>),
}

impl OptionValue {
    /// Parses a command-line value.
    ///
    /// Valid JSON (`true`, `480`, `null`, `["a", "b"]`) keeps its type;
    /// anything else is taken as a plain string.
    pub fn parse_loose(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|_| Self::String(raw.to_string()))
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Truthiness with the usual scripting rules: `null`, `false`, `0`,
    /// `0.0`, `""`, `"0"` and the empty list are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::String(s) => !s.is_empty() && s != "0",
            Self::List(items) => !items.is_empty(),
        }
    }

    /// Numeric view of the value, if it has one.
    ///
    /// Strings count when they hold a plain decimal number (surrounding
    /// whitespace allowed).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::String(s) => parse_numeric(s),
            _ => None,
        }
    }

    /// Loose equality: numeric strings compare as numbers, booleans compare
    /// against truthiness and `null` equals any empty value.
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(b), other) | (other, Self::Bool(b)) => *b == other.is_truthy(),
            (Self::Null, Self::String(s)) | (Self::String(s), Self::Null) => s.is_empty(),
            (Self::Null, other) | (other, Self::Null) => !other.is_truthy(),
            (Self::String(a), Self::String(b)) => match (parse_numeric(a), parse_numeric(b)) {
                (Some(x), Some(y)) => x == y,
                _ => a == b,
            },
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y))
            }
            (Self::List(_), _) | (_, Self::List(_)) => false,
            (Self::String(s), number) | (number, Self::String(s)) => parse_numeric(s).map_or_else(
                || number.to_string() == *s,
                |parsed| number.as_number() == Some(parsed),
            ),
            (a, b) => a.as_number() == b.as_number(),
        }
    }

    /// String form used when the value becomes a class-like token.
    ///
    /// `true` becomes `1`; `null` and `false` have no token form.
    pub(crate) fn token_form(&self) -> Option<String> {
        match self {
            Self::Null | Self::Bool(false) => None,
            Self::Bool(true) => Some("1".to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::String(s) => Some(s.clone()),
            Self::List(_) => None,
        }
    }
}

fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let plain = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !plain || !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::List(items) => {
                let mut first = true;
                for item in items {
                    if !first {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for OptionValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for OptionValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for OptionValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Builds an [`OptionMap`] from `key => value` pairs.
///
/// ```
/// use htmlopts::{options, OptionValue};
///
/// let map = options! { "class" => "btn", "height" => 480, "title" => OptionValue::Null };
/// assert_eq!(map.len(), 3);
/// ```
#[macro_export]
macro_rules! options {
    () => {
        $crate::OptionMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::OptionMap::new();
        $(
            map.insert(::std::string::String::from($key), $crate::OptionValue::from($value));
        )+
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(OptionValue::Null.to_string(), "null");
        assert_eq!(OptionValue::Bool(true).to_string(), "true");
        assert_eq!(OptionValue::Bool(false).to_string(), "false");
        assert_eq!(OptionValue::Int(-1).to_string(), "-1");
        assert_eq!(OptionValue::Float(0.1).to_string(), "0.1");
        assert_eq!(OptionValue::Float(2.0).to_string(), "2");
        assert_eq!(OptionValue::from("0").to_string(), "0");
    }

    #[test]
    fn test_display_nested_list() {
        let value = OptionValue::List(vec![
            "a".into(),
            OptionValue::List(vec!["b".into(), 3.into()]),
        ]);
        assert_eq!(value.to_string(), "a b 3");
    }

    #[test]
    fn test_is_truthy() {
        assert!(!OptionValue::Null.is_truthy());
        assert!(!OptionValue::Bool(false).is_truthy());
        assert!(!OptionValue::Int(0).is_truthy());
        assert!(!OptionValue::from("").is_truthy());
        assert!(!OptionValue::from("0").is_truthy());
        assert!(!OptionValue::List(vec![]).is_truthy());

        assert!(OptionValue::from("0.0").is_truthy());
        assert!(OptionValue::Int(-1).is_truthy());
        assert!(OptionValue::Float(0.1).is_truthy());
    }

    #[test]
    fn test_loose_eq_numeric_strings() {
        assert!(OptionValue::from("1").loose_eq(&OptionValue::Int(1)));
        assert!(OptionValue::Int(1).loose_eq(&OptionValue::from(" 1")));
        assert!(OptionValue::from("1e1").loose_eq(&OptionValue::from("10")));
        assert!(OptionValue::Float(0.1).loose_eq(&OptionValue::from("0.1")));
        assert!(!OptionValue::from("abc").loose_eq(&OptionValue::Int(0)));
    }

    #[test]
    fn test_loose_eq_booleans() {
        assert!(OptionValue::Bool(true).loose_eq(&OptionValue::from("css")));
        assert!(OptionValue::Bool(true).loose_eq(&OptionValue::Int(1)));
        assert!(OptionValue::Bool(false).loose_eq(&OptionValue::from("0")));
        assert!(!OptionValue::Bool(true).loose_eq(&OptionValue::Null));
    }

    #[test]
    fn test_loose_eq_null() {
        assert!(OptionValue::Null.loose_eq(&OptionValue::from("")));
        assert!(OptionValue::Null.loose_eq(&OptionValue::Int(0)));
        assert!(!OptionValue::Null.loose_eq(&OptionValue::from("0")));
    }

    #[test]
    fn test_loose_eq_lists() {
        let a = OptionValue::from(vec!["1", "2"]);
        let b = OptionValue::from(vec![1, 2]);
        assert!(a.loose_eq(&b));
        assert!(!a.loose_eq(&OptionValue::from("1 2")));
    }

    #[test]
    fn test_parse_loose() {
        assert_eq!(OptionValue::parse_loose("true"), OptionValue::Bool(true));
        assert_eq!(OptionValue::parse_loose("480"), OptionValue::Int(480));
        assert_eq!(OptionValue::parse_loose("0.5"), OptionValue::Float(0.5));
        assert_eq!(OptionValue::parse_loose("null"), OptionValue::Null);
        assert_eq!(
            OptionValue::parse_loose(r#"["a", "b"]"#),
            OptionValue::from(vec!["a", "b"])
        );
        assert_eq!(
            OptionValue::parse_loose("btn btn-primary"),
            OptionValue::from("btn btn-primary")
        );
    }

    #[test]
    fn test_deserialize_rejects_objects() {
        let result: Result<OptionValue, _> = serde_json::from_str(r#"{"a": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_options_macro() {
        let map = options! { "zero" => 0, "alt" => "text", "none" => OptionValue::Null };
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["alt", "none", "zero"]);
        assert_eq!(map.get("zero"), Some(&OptionValue::Int(0)));
    }
}
