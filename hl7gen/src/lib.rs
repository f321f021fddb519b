//! # hl7gen
//!
//! Compiler from flat HL7 message-structure definitions to accessor trees.
//!
//! A message structure is described by schema rows in source order: segment
//! codes interleaved with bracket markers (`[ ]` optional, `{ }` repeating,
//! `[{ }]` optional repeating). hl7gen compiles those rows into a tree of
//! groups and segments with resolved cardinality and collision-free accessor
//! names, ready for an emitter to render.
//!
//! ## Quick Start
//!
//! ```ignore
//! use hl7gen::prelude::*;
//!
//! let mut source = MemorySource::new();
//! source.insert_codes("ACK", &["MSH", "MSA", "[", "ERR", "]"]);
//!
//! let mut emitted: Vec<StructureModel> = Vec::new();
//! let report = Generator::builder()
//!     .structure("ACK")
//!     .build()
//!     .run(&source, &mut emitted)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Tokens, structure tree nodes, errors
//! - [`schema`] - Bracket matcher, tree builder, accessor naming
//! - [`codegen`] - Batch generator, accessor model, structure registry

pub mod prelude;

/// Tokens, structure tree nodes and errors.
pub mod core {
    pub use hl7gen_core::*;
}

/// Structure compiler.
pub mod schema {
    pub use hl7gen_schema::*;
}

/// Emitter-facing generation layer.
pub mod codegen {
    pub use hl7gen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use hl7gen_codegen::{Generator, GeneratorBuilder, compile_structure};
pub use hl7gen_core::{GroupNode, Node, SegmentNode, StructureError, Token};
pub use hl7gen_schema::{build_from_rows, build_structure};
