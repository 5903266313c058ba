//! Token normalization for class-like option values.
//!
//! `class` and every `data-*` key hold a set of whitespace-separated tokens.
//! Their values are flattened, split, cleaned and de-duplicated, then
//! re-joined in ascending byte order. The sorted output is relied upon by
//! callers comparing rendered attributes, so insertion order is never kept.

use std::collections::BTreeSet;

use crate::value::OptionValue;

/// Returns `true` if the values of `key` are normalized token lists.
pub fn is_normalized_key(key: &str) -> bool {
    key == "class" || key.starts_with("data-")
}

/// Flattens arbitrarily nested lists into their leaf values.
pub fn flatten(value: &OptionValue) -> Vec<&OptionValue> {
    let mut leaves = Vec::new();
    collect_leaves(value, &mut leaves);
    leaves
}

fn collect_leaves<'a>(value: &'a OptionValue, leaves: &mut Vec<&'a OptionValue>) {
    match value {
        OptionValue::List(items) => {
            for item in items {
                collect_leaves(item, leaves);
            }
        }
        leaf => leaves.push(leaf),
    }
}

/// The de-duplicated, sorted token set of a value.
///
/// `null` and `false` leaves are dropped, string leaves are split on
/// whitespace runs and empty tokens are discarded.
pub fn tokens(value: &OptionValue) -> BTreeSet<String> {
    flatten(value)
        .into_iter()
        .filter_map(OptionValue::token_form)
        .flat_map(|leaf| {
            leaf.split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Normalizes a token list into a single space-separated string.
pub fn normalize_tokens(value: &OptionValue) -> String {
    tokens(value).into_iter().collect::<Vec<_>>().join(" ")
}

/// Produces the effective form of a value stored under `key`.
///
/// Strings and lists under normalized keys become a normalized token string.
/// Other strings are trimmed. Everything else passes through unchanged.
pub fn build_value(key: &str, value: &OptionValue) -> OptionValue {
    match value {
        OptionValue::String(_) | OptionValue::List(_) if is_normalized_key(key) => {
            OptionValue::String(normalize_tokens(value))
        }
        OptionValue::String(s) => OptionValue::String(s.trim().to_string()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_tokens() -> OptionValue {
        OptionValue::List(vec![
            "first".into(),
            OptionValue::List(vec!["second".into(), OptionValue::from(vec!["third"])]),
            OptionValue::from(vec!["fourth"]),
        ])
    }

    fn noisy_tokens() -> OptionValue {
        OptionValue::List(vec![
            "first".into(),
            "second".into(),
            "third".into(),
            "".into(),
            " ".into(),
            "fourth".into(),
            "first".into(),
            OptionValue::Null,
            false.into(),
        ])
    }

    #[test]
    fn test_is_normalized_key() {
        assert!(is_normalized_key("class"));
        assert!(is_normalized_key("data-toggle"));
        assert!(is_normalized_key("data-"));
        assert!(!is_normalized_key("classes"));
        assert!(!is_normalized_key("alt"));
        assert!(!is_normalized_key("metadata-x"));
    }

    #[test]
    fn test_flatten_nested() {
        let value = nested_tokens();
        let leaves: Vec<_> = flatten(&value).into_iter().cloned().collect();
        assert_eq!(
            leaves,
            vec![
                OptionValue::from("first"),
                OptionValue::from("second"),
                OptionValue::from("third"),
                OptionValue::from("fourth"),
            ]
        );
    }

    #[test]
    fn test_flatten_scalar() {
        let value = OptionValue::Int(3);
        assert_eq!(flatten(&value), vec![&OptionValue::Int(3)]);
    }

    #[test]
    fn test_normalize_sorts_and_dedups() {
        for value in [
            OptionValue::from("first  second third fourth first  "),
            noisy_tokens(),
            nested_tokens(),
        ] {
            assert_eq!(normalize_tokens(&value), "first fourth second third");
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_tokens(&OptionValue::from("c b a b"));
        let twice = normalize_tokens(&OptionValue::from(once.as_str()));
        assert_eq!(once, "a b c");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_splits_strings_inside_lists() {
        let value = OptionValue::from(vec!["btn btn-lg", "\tactive\n"]);
        assert_eq!(normalize_tokens(&value), "active btn btn-lg");
    }

    #[test]
    fn test_normalize_scalar_leaves() {
        let value = OptionValue::List(vec![2.into(), true.into(), 0.5.into()]);
        assert_eq!(normalize_tokens(&value), "0.5 1 2");
    }

    #[test]
    fn test_normalize_sorts_by_bytes() {
        let value = OptionValue::from("b B a A");
        assert_eq!(normalize_tokens(&value), "A B a b");
    }

    #[test]
    fn test_build_value_trims_plain_strings() {
        for raw in ["aaa", " aaa", " aaa  "] {
            assert_eq!(
                build_value("someKey", &OptionValue::from(raw)),
                OptionValue::from("aaa")
            );
        }
    }

    #[test]
    fn test_build_value_passes_other_values_through() {
        for value in [
            OptionValue::Bool(true),
            OptionValue::Bool(false),
            OptionValue::Int(0),
            OptionValue::from("0"),
            OptionValue::Float(0.1),
            OptionValue::Int(-1),
            OptionValue::Null,
            OptionValue::List(vec![]),
            OptionValue::List(vec![OptionValue::List(vec![])]),
        ] {
            assert_eq!(build_value("someKey", &value), value);
        }
    }

    #[test]
    fn test_build_value_normalizes_class_like_keys() {
        for key in ["class", "data-toggle"] {
            for value in [
                OptionValue::from("first  second third fourth first  "),
                noisy_tokens(),
                nested_tokens(),
            ] {
                assert_eq!(
                    build_value(key, &value),
                    OptionValue::from("first fourth second third")
                );
            }
        }
    }

    #[test]
    fn test_build_value_keeps_scalars_on_normalized_keys() {
        assert_eq!(
            build_value("data-id", &OptionValue::Int(42)),
            OptionValue::Int(42)
        );
        assert_eq!(
            build_value("data-open", &OptionValue::Bool(true)),
            OptionValue::Bool(true)
        );
    }
}
