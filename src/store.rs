use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};

/// Write/read capability a field uses against the store that owns its
/// committed value. Passed by reference at each call site; fields never
/// reach for a global.
pub trait FieldStore {
    fn get(&self, name: &str) -> Option<&str>;
    fn set(&mut self, name: &str, value: String);
    fn touch(&mut self, name: &str);
}

/// In-memory form store: committed values, touched flags, and the
/// error channel. Validation lives with whoever owns the store; fields
/// only display what they find here.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    values: IndexMap<String, String>,
    touched: IndexSet<String>,
    errors: IndexMap<String, String>,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn set_error(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(name.into(), message.into());
    }

    pub fn clear_error(&mut self, name: &str) {
        self.errors.shift_remove(name);
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Load committed values from a JSON object. Scalars are coerced to
    /// their display text; nested values are skipped.
    pub fn seed_from_value(&mut self, value: &Value) {
        let Value::Object(map) = value else {
            return;
        };
        for (name, entry) in map {
            match entry {
                Value::String(text) => {
                    self.values.insert(name.clone(), text.clone());
                }
                Value::Number(num) => {
                    self.values.insert(name.clone(), num.to_string());
                }
                Value::Bool(flag) => {
                    self.values.insert(name.clone(), flag.to_string());
                }
                _ => {}
            }
        }
    }

    /// Snapshot of the committed values as a JSON object, in insertion
    /// order.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in &self.values {
            map.insert(name.clone(), Value::String(value.clone()));
        }
        Value::Object(map)
    }
}

impl FieldStore for FormStore {
    fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    fn set(&mut self, name: &str, value: String) {
        self.values.insert(name.to_string(), value);
    }

    fn touch(&mut self, name: &str) {
        self.touched.insert(name.to_string());
    }
}
