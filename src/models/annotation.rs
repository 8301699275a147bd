//! The annotation record produced by text annotators.
//!
//! `Annotation` is the unit of output every annotator emits: a typed span
//! of the source text with its result string, metadata, and optional
//! embedding vector. Records are immutable by convention — `with_result`
//! is the only update path — and convert to and from the tabular rows the
//! external processing engine stores.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::row::{Row, RowError, Value};
use crate::schema::{self, DataType, Field};

/// One unit of annotator output.
///
/// `begin` and `end` are inclusive character offsets into the source text;
/// `begin <= end` is the producing annotator's responsibility, not checked
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Output type tag (see [`super::annotator_type`] for known values).
    pub annotator_type: String,
    /// Index of the first character under this annotation.
    pub begin: i32,
    /// Index of the last character under this annotation.
    pub end: i32,
    /// The resulting string of the annotation.
    pub result: String,
    /// Auxiliary attributes, e.g. confidence scores serialized as strings.
    pub metadata: BTreeMap<String, String>,
    /// Embeddings vector where applicable; empty otherwise.
    pub embeddings: Vec<f32>,
}

impl Annotation {
    /// Create a new annotation. All six fields are required; nothing is
    /// validated, normalized, or defaulted.
    pub fn new(
        annotator_type: impl Into<String>,
        begin: i32,
        end: i32,
        result: impl Into<String>,
        metadata: BTreeMap<String, String>,
        embeddings: Vec<f32>,
    ) -> Self {
        Self {
            annotator_type: annotator_type.into(),
            begin,
            end,
            result: result.into(),
            metadata,
            embeddings,
        }
    }

    /// New annotation with a different result, sharing every other field
    /// of this one. The receiver is left untouched.
    pub fn with_result(&self, result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            ..self.clone()
        }
    }

    /// Row schema for a single annotation.
    ///
    /// Stored annotation data is exchanged under exactly these column
    /// names, in exactly this order; changing either breaks interchange
    /// with existing data.
    pub fn data_type() -> DataType {
        DataType::Struct(vec![
            Field::new(schema::ANNOTATOR_TYPE, DataType::String, false),
            Field::new(schema::BEGIN, DataType::Int32, false),
            Field::new(schema::END, DataType::Int32, false),
            Field::new(schema::RESULT, DataType::String, false),
            Field::new(schema::METADATA, DataType::string_map(), false),
            Field::new(schema::EMBEDDINGS, DataType::float32_array(), false),
        ])
    }

    /// Row schema for a column holding a sequence of annotations.
    pub fn array_type() -> DataType {
        DataType::Array {
            element: Box::new(Self::data_type()),
        }
    }

    /// Read an annotation out of an external row.
    ///
    /// The row must carry all six schema fields with their schema shapes;
    /// anything else fails with a [`RowError`], propagated as-is.
    pub fn from_row(row: &Row) -> Result<Self, RowError> {
        Ok(Self {
            annotator_type: string_field(row, schema::ANNOTATOR_TYPE)?,
            begin: int_field(row, schema::BEGIN)?,
            end: int_field(row, schema::END)?,
            result: string_field(row, schema::RESULT)?,
            metadata: map_field(row, schema::METADATA)?,
            embeddings: float_array_field(row, schema::EMBEDDINGS)?,
        })
    }

    /// Project this annotation into a row, schema names in schema order.
    pub fn to_row(&self) -> Row {
        Row::new()
            .with_field(schema::ANNOTATOR_TYPE, self.annotator_type.as_str())
            .with_field(schema::BEGIN, self.begin)
            .with_field(schema::END, self.end)
            .with_field(schema::RESULT, self.result.as_str())
            .with_field(schema::METADATA, self.metadata.clone())
            .with_field(schema::EMBEDDINGS, self.embeddings.clone())
    }

    /// Convert a batch of rows, e.g. one [`Self::array_type`] column cell.
    /// Fails on the first non-conforming row.
    pub fn from_rows(rows: &[Row]) -> Result<Vec<Self>, RowError> {
        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                Self::from_row(row).map_err(|error| {
                    debug!(index, %error, "row conversion failed");
                    error
                })
            })
            .collect()
    }

    /// Project a batch of annotations into rows.
    pub fn to_rows(annotations: &[Self]) -> Vec<Row> {
        annotations.iter().map(Self::to_row).collect()
    }
}

fn string_field(row: &Row, name: &str) -> Result<String, RowError> {
    let value = row.require(name)?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| mismatch(name, DataType::String, value))
}

fn int_field(row: &Row, name: &str) -> Result<i32, RowError> {
    let value = row.require(name)?;
    value
        .as_i32()
        .ok_or_else(|| mismatch(name, DataType::Int32, value))
}

fn map_field(row: &Row, name: &str) -> Result<BTreeMap<String, String>, RowError> {
    let value = row.require(name)?;
    value
        .as_string_map()
        .cloned()
        .ok_or_else(|| mismatch(name, DataType::string_map(), value))
}

fn float_array_field(row: &Row, name: &str) -> Result<Vec<f32>, RowError> {
    let value = row.require(name)?;
    value
        .as_f32_slice()
        .map(|values| values.to_vec())
        .ok_or_else(|| mismatch(name, DataType::float32_array(), value))
}

fn mismatch(field: &str, expected: DataType, found: &Value) -> RowError {
    RowError::TypeMismatch {
        field: field.to_string(),
        expected,
        found: found.data_type(),
    }
}

/// Human-readable form for logs: type, bounds, result, then the metadata
/// pairs. Not a parseable format.
impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Annotation({}, {}, {}, {}, {{",
            self.annotator_type, self.begin, self.end, self.result
        )?;
        for (i, (key, value)) in self.metadata.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}': '{}'", key, value)?;
        }
        f.write_str("})")
    }
}

impl TryFrom<&Row> for Annotation {
    type Error = RowError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Self::from_row(row)
    }
}

impl From<&Annotation> for Row {
    fn from(annotation: &Annotation) -> Self {
        annotation.to_row()
    }
}
