//! Tabular rows exchanged with the external processing engine.
//!
//! A [`Row`] is a named, ordered sequence of [`Value`] cells. Rows arriving
//! from the engine are unchecked external data, so reading one can fail;
//! [`RowError`] covers the two ways it can go wrong.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::DataType;

/// Errors from reading a malformed external row.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("Row is missing required field: {0}")]
    MissingField(String),

    #[error("Field {field} has mismatched type: expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: DataType,
        found: DataType,
    },
}

/// A single cell in a row.
///
/// The set of shapes is closed over what the annotation schema admits;
/// the engine stores no annotation cell outside these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    String(String),
    Int32(i32),
    Float32(f32),
    StringMap(BTreeMap<String, String>),
    Float32Array(Vec<f32>),
}

impl Value {
    /// Shape descriptor for this cell.
    pub fn data_type(&self) -> DataType {
        match self {
            Value::String(_) => DataType::String,
            Value::Int32(_) => DataType::Int32,
            Value::Float32(_) => DataType::Float32,
            Value::StringMap(_) => DataType::string_map(),
            Value::Float32Array(_) => DataType::float32_array(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int32(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float32(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_string_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Value::StringMap(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_f32_slice(&self) -> Option<&[f32]> {
        match self {
            Value::Float32Array(values) => Some(values),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int32(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float32(n)
    }
}

impl From<BTreeMap<String, String>> for Value {
    fn from(map: BTreeMap<String, String>) -> Self {
        Value::StringMap(map)
    }
}

impl From<Vec<f32>> for Value {
    fn from(values: Vec<f32>) -> Self {
        Value::Float32Array(values)
    }
}

/// A named, ordered sequence of cells.
///
/// Field order is part of the interchange contract, so `Row` keeps fields
/// in the order they were added rather than keying them by name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    fields: Vec<(String, Value)>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from already-ordered fields.
    pub fn from_fields(fields: Vec<(String, Value)>) -> Self {
        Self { fields }
    }

    /// Append a field, keeping it last in the column order.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Look up a field by name, failing if the row lacks it.
    pub fn require(&self, name: &str) -> Result<&Value, RowError> {
        self.get(name)
            .ok_or_else(|| RowError::MissingField(name.to_string()))
    }

    /// Iterate fields in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check this row against a `Struct` descriptor: same field names in
    /// the same order, each cell matching the declared shape.
    pub fn conforms_to(&self, schema: &DataType) -> bool {
        let fields = match schema {
            DataType::Struct(fields) => fields,
            _ => return false,
        };
        self.fields.len() == fields.len()
            && self
                .fields
                .iter()
                .zip(fields)
                .all(|((name, value), field)| {
                    *name == field.name && value.data_type() == field.data_type
                })
    }
}
