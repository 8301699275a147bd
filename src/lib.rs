//! annotex - annotation data format and tabular row interchange.
//!
//! Core library exposing the `Annotation` record produced by text
//! annotators, the row schema that fixes how annotations are stored by
//! tabular processing engines, and the conversions between the two.

pub mod models;
pub mod row;
pub mod schema;
