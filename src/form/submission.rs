use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Field id to entered value, in form order.
///
/// A repeated id keeps its first position but takes the later value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmissionRecord(IndexMap<String, String>);

impl SubmissionRecord {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, value)| (id.as_str(), value.as_str()))
    }

    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(id, value)| (id.clone(), Value::String(value.clone())))
                .collect(),
        )
    }

    pub(crate) fn insert(&mut self, id: &str, value: &str) {
        self.0.insert(id.to_string(), value.to_string());
    }
}
