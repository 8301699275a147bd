//! Known annotator output types.
//!
//! The `annotator_type` field on [`Annotation`](super::Annotation) is
//! free-form by contract; these are the values the standard annotators
//! emit. Nothing in this crate validates against them — producers own
//! the vocabulary.

pub const DOCUMENT: &str = "DOCUMENT";
pub const TOKEN: &str = "TOKEN";
pub const WORDPIECE: &str = "WORDPIECE";
pub const WORD_EMBEDDINGS: &str = "WORD_EMBEDDINGS";
pub const SENTENCE_EMBEDDINGS: &str = "SENTENCE_EMBEDDINGS";
pub const CATEGORY: &str = "CATEGORY";
pub const DATE: &str = "DATE";
pub const ENTITY: &str = "ENTITY";
pub const SENTIMENT: &str = "SENTIMENT";
pub const POS: &str = "POS";
pub const CHUNK: &str = "CHUNK";
pub const NAMED_ENTITY: &str = "NAMED_ENTITY";
pub const NEGEX: &str = "NEGEX";
pub const DEPENDENCY: &str = "DEPENDENCY";
pub const LABELED_DEPENDENCY: &str = "LABELED_DEPENDENCY";
pub const LANGUAGE: &str = "LANGUAGE";
pub const KEYWORD: &str = "KEYWORD";
pub const DUMMY: &str = "DUMMY";
