//! The options parser.
//!
//! Holds the option map of a single render next to the map of defaults the
//! caller supplied. Defaults are consulted lazily and never copied into the
//! option map, so deleting a key can never hide its default.

use std::fmt;

use crate::html::{escape_attribute, strip_tags};
use crate::normalize::{build_value, is_normalized_key, tokens};
use crate::value::{OptionMap, OptionValue};

/// Bootstrap button kinds recognized by [`OptionsParser::add_button_classes`].
///
/// Each kind is also accepted with an `outline-` prefix.
pub const BUTTON_KINDS: &[&str] = &[
    "primary",
    "secondary",
    "success",
    "danger",
    "warning",
    "info",
    "light",
    "dark",
    "link",
];

const FALLBACK_BUTTON_CLASS: &str = "btn-light";

fn is_button_kind(kind: &str) -> bool {
    let base = kind.strip_prefix("outline-").unwrap_or(kind);
    BUTTON_KINDS.contains(&base)
}

/// Merges, normalizes and renders an option map against a map of defaults.
///
/// Mutating methods return `&mut Self` so calls can be chained:
///
/// ```
/// use htmlopts::{options, OptionsParser};
///
/// let mut parser = OptionsParser::new(options! { "class" => "lead" }, options! { "role" => "note" });
/// parser.append("class", "text-muted").add("id", "intro");
/// assert_eq!(parser.to_string(), r#"class="lead text-muted" id="intro" role="note""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionsParser {
    options: OptionMap,
    defaults: OptionMap,
}

impl OptionsParser {
    pub const fn new(options: OptionMap, defaults: OptionMap) -> Self {
        Self { options, defaults }
    }

    pub const fn from_options(options: OptionMap) -> Self {
        Self::new(options, OptionMap::new())
    }

    fn raw(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key).or_else(|| self.defaults.get(key))
    }

    /// Sets an option, overwriting any explicit or default value.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Sets several options at once.
    pub fn add_many<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        for (key, value) in pairs {
            self.add(key, value);
        }
        self
    }

    /// Adds `value` to the current value of `key`.
    ///
    /// For normalized keys the token union is recomputed. Other keys join
    /// strings with a single space and concatenate lists. An unset key
    /// behaves like [`add`](Self::add).
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();

        let merged = match self.raw(&key) {
            None => value,
            Some(existing) if is_normalized_key(&key) => build_value(
                &key,
                &OptionValue::List(vec![existing.clone(), value]),
            ),
            Some(existing) => concat(existing, value),
        };

        self.options.insert(key, merged);
        self
    }

    /// Returns the effective value of `key` and removes the explicit one.
    ///
    /// Defaults are left alone, so a consumed key with a default still exists.
    pub fn consume(&mut self, key: &str) -> Option<OptionValue> {
        let value = self.get(key);
        self.options.remove(key);
        value
    }

    /// Removes an explicit option. Defaults stay visible.
    pub fn delete(&mut self, key: &str) -> &mut Self {
        self.options.remove(key);
        self
    }

    pub fn delete_many<I, K>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for key in keys {
            self.options.remove(key.as_ref());
        }
        self
    }

    /// Returns `true` if `key` is set explicitly or by default, whatever its value.
    pub fn exists(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    /// Returns `true` if `key` exists and its effective value loosely equals `value`.
    pub fn contains(&self, key: &str, value: impl Into<OptionValue>) -> bool {
        let value = value.into();
        self.get(key).is_some_and(|current| current.loose_eq(&value))
    }

    /// The effective value of `key`: explicit first, then default, normalized.
    pub fn get(&self, key: &str) -> Option<OptionValue> {
        self.raw(key).map(|value| build_value(key, value))
    }

    /// Sets a default value. Explicit options still take precedence.
    pub fn set_default(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> &mut Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    pub fn delete_default(&mut self, key: &str) -> &mut Self {
        self.defaults.remove(key);
        self
    }

    /// Every effective option, sorted by key.
    pub fn to_map(&self) -> OptionMap {
        self.defaults
            .iter()
            .chain(&self.options)
            .map(|(key, value)| (key.clone(), build_value(key, value)))
            .collect()
    }

    /// Renders every effective option as `key="value"` pairs.
    pub fn to_attr_string(&self) -> String {
        self.to_string()
    }

    /// Expands a `tooltip` option into Bootstrap tooltip attributes.
    ///
    /// The tooltip text becomes the `title` (tags stripped) and
    /// `data-toggle` gains the `tooltip` token. A `tooltip-align` option is
    /// moved to `data-placement`.
    pub fn tooltip(&mut self) -> &mut Self {
        let Some(tooltip) = self.consume("tooltip") else {
            return self;
        };
        if !tooltip.is_truthy() {
            return self;
        }

        let title = strip_tags(&tooltip.to_string()).trim().to_string();
        self.append("data-toggle", "tooltip").add("title", title);

        if let Some(align) = self.consume("tooltip-align") {
            self.add("data-placement", align);
        }

        self
    }

    /// Ensures the `btn` class plus one or more `btn-<kind>` classes.
    ///
    /// If the class list already carries a known `btn-<kind>` class, only
    /// `btn` is added. Otherwise every valid kind in `kinds` is added (with or
    /// without the `btn-` prefix), or `btn-light` when none is valid.
    pub fn add_button_classes<I, S>(&mut self, kinds: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let has_kind = self.get("class").is_some_and(|class| {
            tokens(&class)
                .iter()
                .any(|token| token.strip_prefix("btn-").is_some_and(is_button_kind))
        });
        if has_kind {
            return self.append("class", "btn");
        }

        let mut classes: Vec<String> = kinds
            .into_iter()
            .filter_map(|kind| {
                let kind = kind.as_ref().trim();
                let kind = kind.strip_prefix("btn-").unwrap_or(kind);
                is_button_kind(kind).then(|| format!("btn-{kind}"))
            })
            .collect();
        if classes.is_empty() {
            classes.push(FALLBACK_BUTTON_CLASS.to_string());
        }
        classes.push("btn".to_string());

        self.append("class", classes)
    }
}

fn concat(existing: &OptionValue, value: OptionValue) -> OptionValue {
    match (existing, value) {
        (OptionValue::Null, value) => value,
        (OptionValue::List(items), OptionValue::List(more)) => {
            OptionValue::List(items.iter().cloned().chain(more).collect())
        }
        (OptionValue::List(items), value) => {
            let mut items = items.clone();
            items.push(value);
            OptionValue::List(items)
        }
        (existing, OptionValue::List(more)) => OptionValue::List(
            std::iter::once(existing.clone()).chain(more).collect(),
        ),
        (existing, value) => OptionValue::String(format!(
            "{} {}",
            existing.to_string().trim(),
            value.to_string().trim()
        )),
    }
}

impl fmt::Display for OptionsParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in self.to_map() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{key}=\"{}\"", escape_attribute(&value.to_string()))?;
            first = false;
        }
        Ok(())
    }
}

impl From<OptionMap> for OptionsParser {
    fn from(options: OptionMap) -> Self {
        Self::from_options(options)
    }
}
