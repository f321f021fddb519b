//! # hl7gen Core
//!
//! Core types shared by the hl7gen message-structure compiler.
//!
//! This crate provides:
//! - Flat structure tokens and the bracket marker classifier
//! - Schema row to token conversion
//! - The compiled structure tree (segment and group nodes)
//! - Segment field definitions
//! - The `StructureError` type raised on malformed nesting

pub mod error;
pub mod field;
pub mod node;
pub mod token;

pub use error::{Result, StructureError};
pub use field::FieldDef;
pub use node::{GroupNode, Node, SegmentNode};
pub use token::{
    Cardinality, MarkerKind, MarkerToken, PLACEHOLDER_SEGMENT, SchemaRow, SegmentToken, Token,
};
