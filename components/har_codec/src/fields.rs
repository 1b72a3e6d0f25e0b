//! Property access over one JSON object of a HAR document
//!
//! A [`Fields`] owns the object being read. Each known property is removed
//! as it is read; whatever is left over, plus any value that could not be
//! read as its declared type, becomes the entity's additional fields.

use har_types::{field_key_matches, Additional};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{CodecError, Result};

pub(crate) struct Fields {
    path: String,
    map: Map<String, Value>,
    preserved: Map<String, Value>,
}

impl Fields {
    pub(crate) fn new(path: String, map: Map<String, Value>) -> Self {
        Self {
            path,
            map,
            preserved: Map::new(),
        }
    }

    /// Path of a property of this object, e.g. `log.entries[0].request`
    pub(crate) fn child_path(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.path, name)
        }
    }

    /// Remove a property by canonical name, returning the key it was found
    /// under. An exact spelling wins over a normalized one.
    fn take(&mut self, name: &str) -> Option<(String, Value)> {
        if let Some(value) = self.map.remove(name) {
            return Some((name.to_string(), value));
        }

        let key = self
            .map
            .keys()
            .find(|key| field_key_matches(key, name))?
            .clone();
        let value = self.map.remove(&key)?;
        debug!(
            "Normalized property '{}' to '{}' at {}",
            key,
            name,
            self.child_path(name)
        );
        Some((key, value))
    }

    /// Like `take`, treating an explicit `null` as absent
    fn take_present(&mut self, name: &str) -> Option<(String, Value)> {
        match self.take(name)? {
            (_, Value::Null) => None,
            found => Some(found),
        }
    }

    fn preserve(&mut self, key: String, value: Value, expected: &str) {
        warn!(
            "Property '{}' at {} is {} where {} was expected; keeping original value",
            key,
            self.path_or_root(),
            json_type(&value),
            expected
        );
        self.preserved.insert(key, value);
    }

    fn path_or_root(&self) -> &str {
        if self.path.is_empty() {
            "document root"
        } else {
            &self.path
        }
    }

    pub(crate) fn string(&mut self, name: &str) -> Option<String> {
        match self.take_present(name)? {
            (_, Value::String(s)) => Some(s),
            (key, other) => {
                self.preserve(key, other, "a string");
                None
            }
        }
    }

    pub(crate) fn integer(&mut self, name: &str) -> Option<i64> {
        let (key, value) = self.take_present(name)?;
        match as_integer(&value) {
            Some(n) => Some(n),
            None => {
                self.preserve(key, value, "an integer");
                None
            }
        }
    }

    pub(crate) fn number(&mut self, name: &str) -> Option<f64> {
        let (key, value) = self.take_present(name)?;
        match value.as_f64() {
            Some(n) => Some(n),
            None => {
                self.preserve(key, value, "a number");
                None
            }
        }
    }

    pub(crate) fn boolean(&mut self, name: &str) -> Option<bool> {
        match self.take_present(name)? {
            (_, Value::Bool(b)) => Some(b),
            (key, other) => {
                self.preserve(key, other, "a boolean");
                None
            }
        }
    }

    /// Optional nested object
    pub(crate) fn object<T>(
        &mut self,
        name: &str,
        read: impl FnOnce(Fields) -> Result<T>,
    ) -> Result<Option<T>> {
        let Some((key, value)) = self.take_present(name) else {
            return Ok(None);
        };
        match value {
            Value::Object(map) => read(Fields::new(self.child_path(name), map)).map(Some),
            other => {
                self.preserve(key, other, "an object");
                Ok(None)
            }
        }
    }

    /// Nested object without which the document cannot be read
    pub(crate) fn required_object<T>(
        &mut self,
        name: &str,
        read: impl FnOnce(Fields) -> Result<T>,
    ) -> Result<T> {
        let path = self.child_path(name);
        match self.take_present(name) {
            Some((_, Value::Object(map))) => read(Fields::new(path, map)),
            Some((_, other)) => Err(CodecError::schema(
                path,
                format!("expected an object, found {}", json_type(&other)),
            )),
            None => Err(CodecError::schema(path, "required object is missing")),
        }
    }

    /// Optional list of objects; absent reads as empty.
    ///
    /// A list holding anything but objects cannot be read item by item
    /// without losing the odd ones out, so it is preserved whole and the
    /// field reads as empty.
    pub(crate) fn list<T>(
        &mut self,
        name: &str,
        read: impl Fn(Fields) -> Result<T>,
    ) -> Result<Vec<T>> {
        let Some((key, value)) = self.take_present(name) else {
            return Ok(Vec::new());
        };
        let items = match value {
            Value::Array(items) if items.iter().all(Value::is_object) => items,
            Value::Array(items) => {
                self.preserve(key, Value::Array(items), "an array of objects");
                return Ok(Vec::new());
            }
            other => {
                self.preserve(key, other, "an array");
                return Ok(Vec::new());
            }
        };

        let base = self.child_path(name);
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            if let Value::Object(map) = item {
                out.push(read(Fields::new(format!("{}[{}]", base, index), map))?);
            }
        }
        Ok(out)
    }

    /// List of objects without which the document cannot be read
    pub(crate) fn required_list<T>(
        &mut self,
        name: &str,
        read: impl Fn(Fields) -> Result<T>,
    ) -> Result<Vec<T>> {
        let base = self.child_path(name);
        let items = match self.take_present(name) {
            Some((_, Value::Array(items))) => items,
            Some((_, other)) => {
                return Err(CodecError::schema(
                    base,
                    format!("expected an array, found {}", json_type(&other)),
                ))
            }
            None => return Err(CodecError::schema(base, "required array is missing")),
        };

        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let path = format!("{}[{}]", base, index);
            match item {
                Value::Object(map) => out.push(read(Fields::new(path, map))?),
                other => {
                    return Err(CodecError::schema(
                        path,
                        format!("expected an object, found {}", json_type(&other)),
                    ))
                }
            }
        }
        Ok(out)
    }

    /// Everything not consumed as a known field
    pub(crate) fn finish(mut self) -> Additional {
        if !self.map.is_empty() {
            debug!(
                "Keeping {} additional field(s) at {}",
                self.map.len(),
                self.path_or_root()
            );
        }
        self.map.append(&mut self.preserved);
        self.map
    }
}

/// Integer view of a JSON number; integral floats are accepted
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if value.is_f64() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
