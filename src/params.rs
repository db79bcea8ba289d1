use crate::coerce::boolean_to_number;
use serde_json::Value;

/// Query parameters for a single CGI command.
///
/// Keys keep their insertion order and inserting an existing key replaces
/// its value in place, so the final query string never carries duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn insert_opt<T: ToString>(&mut self, key: impl Into<String>, value: Option<T>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Inserts a 0/1 flag. `None` falls back to `default`; with no default the
    /// key is left out of the request.
    pub fn insert_flag(&mut self, key: impl Into<String>, value: Option<bool>, default: Option<u8>) {
        let value = boolean_to_number(
            value.map(Value::Bool).unwrap_or(Value::Null),
            default.map(Value::from),
        );
        match value {
            Value::Null => {}
            Value::String(s) => self.insert(key, s),
            other => self.insert(key, other),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overlays `other` on top of `self`; keys in `other` win.
    pub fn merge(mut self, other: Params) -> Self {
        for (key, value) in other.0 {
            self.insert(key, value);
        }
        self
    }

    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
