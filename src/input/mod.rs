mod reader;

use anyhow::{Context, Result, bail};

use crate::html::is_attribute_name;
use crate::value::OptionMap;

pub use reader::InputReader;

/// Parses a JSON object of options.
///
/// Blank input is an empty map, so the tool can run on presets and
/// `--set` flags alone. Keys that cannot be rendered as attribute names
/// are rejected.
pub fn parse_option_map(text: &str) -> Result<OptionMap> {
    if text.trim().is_empty() {
        return Ok(OptionMap::new());
    }
    let map: OptionMap =
        serde_json::from_str(text).context("Input must be a JSON object of options")?;

    if let Some(key) = map.keys().find(|key| !is_attribute_name(key)) {
        bail!("Invalid attribute name {key:?} in input");
    }
    Ok(map)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::options;
    use crate::value::OptionValue;

    #[test]
    fn test_parse_blank_input() {
        assert!(parse_option_map("").unwrap().is_empty());
        assert!(parse_option_map(" \n\t").unwrap().is_empty());
    }

    #[test]
    fn test_parse_mixed_values() {
        let map = parse_option_map(
            r#"{"alt": "text", "zero": 0, "half": 0.5, "off": false, "none": null, "class": ["a", ["b"]]}"#,
        )
        .unwrap();

        assert_eq!(
            map,
            options! {
                "alt" => "text",
                "class" => OptionValue::List(vec!["a".into(), OptionValue::from(vec!["b"])]),
                "half" => 0.5,
                "none" => OptionValue::Null,
                "off" => false,
                "zero" => 0,
            }
        );
    }

    #[test]
    fn test_parse_rejects_unsafe_keys() {
        let err = parse_option_map(r#"{"a\" onclick=\"x": "v"}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid attribute name"));

        assert!(parse_option_map(r#"{"data id": "v"}"#).is_err());
        assert!(parse_option_map(r#"{"": "v"}"#).is_err());
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(parse_option_map("[1, 2]").is_err());
        assert!(parse_option_map(r#"{"nested": {"a": 1}}"#).is_err());
        assert!(parse_option_map("not json").is_err());
    }
}
