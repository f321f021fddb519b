//! # hl7gen Schema
//!
//! Message-structure compiler.
//!
//! This crate provides:
//! - Bracket matching over flat token sequences
//! - Structure tree building with required/repeating cardinality
//! - Sibling accessor disambiguation (`NTE`, `NTE2`, ...)
//! - Field accessor naming from segment field descriptions
//!
//! The compiler is pure and synchronous: it performs no I/O and no logging,
//! and separate builds share no state.

pub mod builder;
pub mod matcher;
pub mod naming;

pub use builder::{MAX_NESTING_DEPTH, build_from_rows, build_structure};
pub use matcher::find_group_end;
pub use naming::{NameScope, accessor_name, field_accessor_names, segment_base_name};
