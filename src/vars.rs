//! The variable mapping fed to the renderers, and the adapters that build it
//! from the process environment, JSON and `KEY=VALUE` assignments.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde_json::Value;
use regex::Regex;
use std::ffi::OsString;
use std::sync::LazyLock;

static LEADING_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}", crate::constants::NAME_PATTERN)).expect("name pattern is valid")
});

/// Immutable-per-render mapping from variable name to value.
///
/// Lookups distinguish *presence* (the key exists, even with an empty value)
/// from *truthiness* (the key exists and its value is non-empty).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    inner: IndexMap<String, String>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a variable, replacing and returning any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    /// Value of `name`, or the empty string when it is not set.
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// True when `name` is set to a non-empty value.
    pub fn is_truthy(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Loads every environment variable whose name passes [`is_uppercase_name`].
    pub fn from_env() -> Self {
        Self::from_env_pairs(std::env::vars_os())
    }

    /// Same filtering as [`Variables::from_env`] over an arbitrary set of
    /// OS strings. Entries that are not valid Unicode are skipped.
    pub fn from_env_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let pairs = pairs.into_iter().filter_map(|(key, value)| {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => Some((key, value)),
                (key, _) => {
                    log::debug!("Skipping non-unicode environment entry {key:?}");
                    None
                }
            }
        });
        Self::from_pairs(pairs)
    }

    /// Builds a mapping from `(name, value)` pairs, keeping only uppercase names.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut vars = Self::new();
        for (key, value) in pairs {
            let key = key.into();
            if is_uppercase_name(&key) {
                vars.insert(key, value);
            } else {
                log::trace!("Ignoring environment variable '{key}'");
            }
        }
        vars
    }

    /// Parses a JSON object into variables.
    ///
    /// Strings are taken verbatim, numbers and booleans use their JSON text
    /// and `null` becomes the empty string. Nested arrays or objects are
    /// rejected, as is any top-level value that is not an object.
    pub fn from_json(buf: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(buf)?;
        let Value::Object(map) = value else {
            return Err(Error::VariablesError("expected a JSON object".to_string()));
        };

        let mut vars = Self::new();
        for (key, value) in map {
            let value = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                Value::Bool(_) | Value::Number(_) => value.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(Error::VariablesError(format!(
                        "value of '{key}' must be a string, number, boolean or null"
                    )));
                }
            };
            vars.insert(key, value);
        }
        Ok(vars)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Variables {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut vars = Self::new();
        vars.extend(iter);
        vars
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Variables {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Variables {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

/// Whether an environment variable name counts as "uppercase".
///
/// The name needs at least one cased character and every cased character
/// must be uppercase, so `PATH` and `MY_VAR_2` pass while `path`, `Path`,
/// `_1` and names with titlecase letters such as `ǅA` do not.
pub fn is_uppercase_name(name: &str) -> bool {
    let mut has_cased = false;
    for c in name.chars() {
        if c.is_uppercase() {
            has_cased = true;
        } else if c.is_lowercase() || is_titlecase(c) {
            return false;
        }
    }
    has_cased
}

/// Titlecase letters (`ǅ`, `ǈ`, ...) are neither upper- nor lowercase but
/// still change under both case mappings.
fn is_titlecase(c: char) -> bool {
    !c.to_uppercase().eq([c]) && !c.to_lowercase().eq([c])
}

/// The tag name at the start of `s`, or `""` if `s` does not start with one.
pub fn leading_name(s: &str) -> &str {
    LEADING_NAME.find(s).map_or("", |m| m.as_str())
}

pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && leading_name(name).len() == name.len()
}

/// Splits a `KEY=VALUE` assignment on its first `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
        Error::VariablesError(format!("'{raw}' is not a KEY=VALUE assignment"))
    })?;
    if !is_valid_name(key) {
        return Err(Error::VariablesError(format!(
            "'{key}' is not a valid variable name"
        )));
    }
    Ok((key.to_string(), value.to_string()))
}
