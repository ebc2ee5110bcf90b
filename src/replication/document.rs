use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A schemaless ACL document: field name to JSON value.
///
/// Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AclDocument {
    fields: Map<String, Value>,
}

impl AclDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Sets a field, replacing any previous value.
    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) {
        self.fields.insert(name.to_string(), value.into());
    }

    /// Builder-style [`AclDocument::set_field`].
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// Reads a field as an identifier.
    ///
    /// Strings are taken as is, numbers and booleans by their textual form,
    /// and multi-valued fields by their first value. Null, objects, absent
    /// fields and empty strings yield `None`.
    pub fn id_value(&self, name: &str) -> Option<String> {
        self.field(name).and_then(id_text).filter(|id| !id.is_empty())
    }
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(values) => values.first().and_then(id_text),
        Value::Null | Value::Object(_) => None,
    }
}
