//! Run-time projection parameters, keyed by PROJ-style names ("lat_1", "lat_ts", ...).

use std::collections::HashMap;

/// Name → value parameter bundle, supplied once at projection construction
/// and never mutated afterwards.
///
/// Angular values are radians; converting user-facing degrees is the
/// caller's job. Projections ignore keys they do not consume, and a missing
/// key falls back to the projection's documented default.
#[derive(Clone, Debug, Default)]
pub struct ParamList {
    values: HashMap<String, f64>,
}

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter, returning `self` for chaining.
    pub fn set(mut self, key: &str, value: f64) -> Self {
        self.values.insert(key.to_owned(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// The value for `key`, or `default` when the key is absent.
    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl<const N: usize> From<[(&str, f64); N]> for ParamList {
    fn from(entries: [(&str, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a> FromIterator<(&'a str, f64)> for ParamList {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.to_owned(), v)).collect(),
        }
    }
}
