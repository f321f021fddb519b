//! Schema provider and emitter seams.

use crate::error::CodegenError;
use crate::model::StructureModel;
use hl7gen_core::SchemaRow;
use std::collections::HashMap;

/// Provider of structure rows, already in left-to-right structural order.
pub trait StructureSource {
    /// Returns the rows of a message structure or group.
    ///
    /// # Errors
    /// Returns `CodegenError` if the structure cannot be retrieved.
    fn rows(&self, structure: &str) -> Result<Vec<SchemaRow>, CodegenError>;
}

/// Consumer of compiled structures.
pub trait Emitter {
    /// Receives one compiled structure.
    ///
    /// # Errors
    /// Returns `CodegenError` if the structure cannot be emitted.
    fn emit(&mut self, model: &StructureModel) -> Result<(), CodegenError>;
}

impl Emitter for Vec<StructureModel> {
    fn emit(&mut self, model: &StructureModel) -> Result<(), CodegenError> {
        self.push(model.clone());
        Ok(())
    }
}

/// In-memory structure source.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    structures: HashMap<String, Vec<SchemaRow>>,
}

impl MemorySource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a structure.
    pub fn insert(&mut self, structure: impl Into<String>, rows: Vec<SchemaRow>) {
        self.structures.insert(structure.into(), rows);
    }

    /// Adds a structure given as bare segment codes and marker spellings.
    pub fn insert_codes(&mut self, structure: impl Into<String>, codes: &[&str]) {
        let rows = codes.iter().map(|c| SchemaRow::new(*c)).collect();
        self.insert(structure, rows);
    }

    /// Returns true if the structure is present.
    #[must_use]
    pub fn contains(&self, structure: &str) -> bool {
        self.structures.contains_key(structure)
    }

    /// Returns the number of structures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.structures.len()
    }

    /// Returns true if the source holds no structures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }
}

impl StructureSource for MemorySource {
    fn rows(&self, structure: &str) -> Result<Vec<SchemaRow>, CodegenError> {
        self.structures
            .get(structure)
            .cloned()
            .ok_or_else(|| CodegenError::unavailable(structure, "structure not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_rows() {
        let mut source = MemorySource::new();
        assert!(source.is_empty());
        source.insert_codes("ACK", &["MSH", "MSA", "[", "ERR", "]"]);

        assert!(source.contains("ACK"));
        assert_eq!(source.len(), 1);
        let rows = source.rows("ACK").unwrap();
        let codes: Vec<&str> = rows.iter().map(|r| r.seg_code.as_str()).collect();
        assert_eq!(codes, vec!["MSH", "MSA", "[", "ERR", "]"]);
    }

    #[test]
    fn test_memory_source_missing() {
        let source = MemorySource::new();
        let err = source.rows("ADT_A01").unwrap_err();
        assert!(matches!(err, CodegenError::Source { .. }));
        assert_eq!(err.structure(), "ADT_A01");
    }
}
