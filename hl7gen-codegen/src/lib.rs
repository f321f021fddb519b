//! # hl7gen Codegen
//!
//! Emitter-facing layer of the hl7gen message-structure compiler.
//!
//! This crate provides:
//! - A batch generator that compiles many structures and logs-and-continues
//!   past malformed ones
//! - The resolved accessor model handed to emitters
//! - Provider and emitter traits
//! - A structure registry keyed by structure name

pub mod error;
pub mod generator;
pub mod model;
pub mod registry;
pub mod source;

pub use error::CodegenError;
pub use generator::{GenerationReport, Generator, GeneratorBuilder, compile_structure};
pub use model::{ChildKind, ResolvedChild, ResolvedGroup, StructureModel};
pub use registry::StructureRegistry;
pub use source::{Emitter, MemorySource, StructureSource};
