//! Status projection over describe responses
//!
//! A projection is an ordered list of `label -> field path` pairs. Each path
//! is walked independently through the describe document; a path that cannot
//! be resolved yields [`VALUE_NOT_FOUND`] instead of an error.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Displayed when a field path does not resolve
pub const VALUE_NOT_FOUND: &str = "Value not found";

/// Sequence of nested-key lookups, e.g. `Endpoint,Address` or `Endpoint.Address`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Split a path specification on `,` and `.`
    pub fn parse(spec: &str) -> Self {
        Self(
            spec.split([',', '.'])
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Walk the document key by key. Numeric segments index into arrays.
    pub fn resolve<'a>(&self, document: &'a Value) -> Option<&'a Value> {
        if self.0.is_empty() {
            return None;
        }
        self.0.iter().try_fold(document, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }
}

/// Ordered mapping from display label to field path
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusProjection {
    fields: IndexMap<String, FieldPath>,
}

impl StatusProjection {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field(mut self, label: impl Into<String>, path: &str) -> Self {
        self.fields.insert(label.into(), FieldPath::parse(path));
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldPath)> {
        self.fields.iter().map(|(label, path)| (label.as_str(), path))
    }
}

impl<'a> FromIterator<(&'a String, &'a String)> for StatusProjection {
    fn from_iter<I: IntoIterator<Item = (&'a String, &'a String)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(label, path)| (label.clone(), FieldPath::parse(path)))
                .collect(),
        }
    }
}

/// A single projected `label : value` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedField {
    pub label: String,
    pub value: String,
}

/// Apply a projection to a describe document, preserving configured order
pub fn project(document: &Value, projection: &StatusProjection) -> Vec<ProjectedField> {
    projection
        .iter()
        .map(|(label, path)| ProjectedField {
            label: label.to_string(),
            value: path
                .resolve(document)
                .map(render)
                .unwrap_or_else(|| VALUE_NOT_FOUND.to_string()),
        })
        .collect()
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
