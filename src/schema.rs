//! Row schema descriptors for annotation interchange.
//!
//! The external processing engine identifies columns by name and position,
//! so the names, order, and cell shapes of stored annotation data are a
//! fixed contract. The descriptors here pin that contract down; the
//! conversions in [`crate::models`] and the validation in [`crate::row`]
//! both build on them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column name for the annotator type tag.
pub const ANNOTATOR_TYPE: &str = "annotatorType";
/// Column name for the first character offset.
pub const BEGIN: &str = "begin";
/// Column name for the last character offset.
pub const END: &str = "end";
/// Column name for the annotation result string.
pub const RESULT: &str = "result";
/// Column name for the metadata map.
pub const METADATA: &str = "metadata";
/// Column name for the embeddings vector.
pub const EMBEDDINGS: &str = "embeddings";

/// Shape of a single column or nested value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    String,
    Int32,
    Float32,
    Map {
        key: Box<DataType>,
        value: Box<DataType>,
    },
    Array {
        element: Box<DataType>,
    },
    Struct(Vec<Field>),
}

impl DataType {
    /// Map from string keys to string values.
    pub fn string_map() -> Self {
        DataType::Map {
            key: Box::new(DataType::String),
            value: Box::new(DataType::String),
        }
    }

    /// Array of single-precision floats.
    pub fn float32_array() -> Self {
        DataType::Array {
            element: Box::new(DataType::Float32),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::String => f.write_str("string"),
            DataType::Int32 => f.write_str("int"),
            DataType::Float32 => f.write_str("float"),
            DataType::Map { key, value } => write!(f, "map<{}, {}>", key, value),
            DataType::Array { element } => write!(f, "array<{}>", element),
            DataType::Struct(fields) => {
                f.write_str("struct<")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.data_type)?;
                }
                f.write_str(">")
            }
        }
    }
}

/// A named, typed column in a row schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub data_type: DataType,
    /// Whether the engine accepts a missing value for this column.
    pub nullable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
        }
    }
}
