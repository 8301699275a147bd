//! Row Interchange Tests
//!
//! Verifies the annotation/row interchange contract end to end: the fixed
//! column schema, both conversion directions, and serde serialization of
//! the record.

use std::collections::BTreeMap;

use annotex::models::{annotator_type, Annotation};
use annotex::row::{Row, RowError, Value};
use annotex::schema;

/// An entity annotation with embeddings, matching what an embedding-aware
/// annotator would emit.
fn entity_annotation() -> Annotation {
    Annotation::new(
        annotator_type::ENTITY,
        10,
        15,
        "Apple",
        BTreeMap::new(),
        vec![0.1, 0.2],
    )
}

/// A conforming external row, built field by field the way the engine
/// would deliver it.
fn entity_row() -> Row {
    Row::new()
        .with_field(schema::ANNOTATOR_TYPE, "ENTITY")
        .with_field(schema::BEGIN, 10)
        .with_field(schema::END, 15)
        .with_field(schema::RESULT, "Apple")
        .with_field(schema::METADATA, BTreeMap::<String, String>::new())
        .with_field(schema::EMBEDDINGS, vec![0.1f32, 0.2f32])
}

#[test]
fn external_row_converts_to_matching_annotation() {
    let annotation = Annotation::from_row(&entity_row()).unwrap();

    assert_eq!(annotation.annotator_type, "ENTITY");
    assert_eq!(annotation.begin, 10);
    assert_eq!(annotation.end, 15);
    assert_eq!(annotation.result, "Apple");
    assert!(annotation.metadata.is_empty());
    assert_eq!(annotation.embeddings, vec![0.1, 0.2]);
}

#[test]
fn row_survives_conversion_round_trip() {
    let row = entity_row();
    let back = Annotation::from_row(&row).unwrap().to_row();
    assert_eq!(back, row);
}

#[test]
fn annotation_survives_conversion_round_trip() {
    let mut metadata = BTreeMap::new();
    metadata.insert("sentence".to_string(), "0".to_string());
    metadata.insert("confidence".to_string(), "0.97".to_string());
    let annotation = Annotation::new(annotator_type::TOKEN, 0, 4, "Hello", metadata, vec![]);

    let back = Annotation::from_row(&annotation.to_row()).unwrap();
    assert_eq!(back, annotation);
}

#[test]
fn produced_rows_conform_to_the_published_schema() {
    assert!(entity_annotation().to_row().conforms_to(&Annotation::data_type()));
    assert!(!entity_row().conforms_to(&Annotation::array_type()));
}

#[test]
fn conversion_traits_mirror_the_inherent_functions() {
    let annotation = entity_annotation();

    let row = Row::from(&annotation);
    assert_eq!(row, annotation.to_row());

    let back = Annotation::try_from(&row).unwrap();
    assert_eq!(back, annotation);
}

#[test]
fn truncated_row_reports_the_missing_field() {
    let row = Row::new()
        .with_field(schema::ANNOTATOR_TYPE, "ENTITY")
        .with_field(schema::BEGIN, 10);

    let err = Annotation::from_row(&row).unwrap_err();
    assert_eq!(err.to_string(), "Row is missing required field: end");
}

#[test]
fn mismatched_cell_reports_both_shapes() {
    let row = entity_row();
    let mut fields: Vec<(String, Value)> = Vec::new();
    for (name, value) in row.iter() {
        if name == schema::EMBEDDINGS {
            fields.push((name.to_string(), Value::from("not a vector")));
        } else {
            fields.push((name.to_string(), value.clone()));
        }
    }

    let err = Annotation::from_row(&Row::from_fields(fields)).unwrap_err();
    assert!(matches!(err, RowError::TypeMismatch { .. }));
    assert_eq!(
        err.to_string(),
        "Field embeddings has mismatched type: expected array<float>, found string"
    );
}

#[test]
fn annotation_serializes_with_snake_case_fields() {
    let json = serde_json::to_value(entity_annotation()).unwrap();

    assert_eq!(json["annotator_type"], "ENTITY");
    assert_eq!(json["begin"], 10);
    assert_eq!(json["end"], 15);
    assert_eq!(json["result"], "Apple");
    assert!(json["metadata"].as_object().unwrap().is_empty());
    assert_eq!(json["embeddings"].as_array().unwrap().len(), 2);

    let back: Annotation = serde_json::from_value(json).unwrap();
    assert_eq!(back, entity_annotation());
}
