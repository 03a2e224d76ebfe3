//! Submitted form fields and the write payload built from them

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::action::Action;

/// Named fields of a submitted form, in submission order.
///
/// A name may repeat (checkbox groups such as `booksToReturn[]`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(IndexMap<String, Vec<String>>);

impl FormFields {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: IndexMap<String, Vec<String>> = IndexMap::new();
        for (name, value) in pairs {
            fields.entry(name.into()).or_default().push(value.into());
        }
        Self(fields)
    }

    /// First value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// First value under `name`, trimmed, if it is not blank
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Every non-blank value submitted under `name`
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.0
            .get(name)
            .map(|values| {
                values
                    .iter()
                    .map(|v| v.trim())
                    .filter(|v| !v.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), vec![value.into()]);
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.0.shift_remove(name)
    }

    /// JSON body for a write: every field plus the `action` discriminator.
    /// A single value stays a string, a repeated name becomes an array.
    pub fn to_payload(&self, action: Action) -> Map<String, Value> {
        let mut payload = Map::new();
        for (name, values) in &self.0 {
            let value = match values.as_slice() {
                [single] => Value::String(single.clone()),
                many => Value::Array(many.iter().cloned().map(Value::String).collect()),
            };
            payload.insert(name.clone(), value);
        }
        payload.insert("action".to_string(), Value::String(action.as_str().to_string()));
        payload
    }
}
