//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use hl7gen::prelude::*;
//! ```

// Core types
pub use hl7gen_core::{
    Cardinality, FieldDef, GroupNode, MarkerKind, Node, SchemaRow, SegmentNode, StructureError,
    Token,
};

// Compiler
pub use hl7gen_schema::{NameScope, build_from_rows, build_structure, field_accessor_names};

// Generation
pub use hl7gen_codegen::{
    ChildKind, CodegenError, Emitter, GenerationReport, Generator, MemorySource, ResolvedChild,
    ResolvedGroup, StructureModel, StructureRegistry, StructureSource, compile_structure,
};
