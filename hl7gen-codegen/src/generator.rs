//! Batch driver compiling many structures in one run.

use crate::error::CodegenError;
use crate::model::StructureModel;
use crate::source::{Emitter, StructureSource};
use hl7gen_core::SchemaRow;
use hl7gen_schema::build_from_rows;

/// Compiles one structure from its rows.
///
/// # Arguments
/// * `name` - Message structure or group name
/// * `rows` - The structure's rows in source order
///
/// # Errors
/// Returns `CodegenError::Structure` if the rows' markers are not nested properly.
pub fn compile_structure(
    name: &str,
    rows: Vec<SchemaRow>,
) -> Result<StructureModel, CodegenError> {
    let tree = build_from_rows(rows, Some(name)).map_err(|source| CodegenError::Structure {
        structure: name.to_string(),
        source,
    })?;
    Ok(StructureModel::from_tree(name, tree))
}

/// Builder for configuring a generation run.
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    structures: Vec<String>,
    fail_fast: bool,
}

impl GeneratorBuilder {
    /// Creates a builder with no structures and log-and-continue failure handling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a structure to compile.
    #[must_use]
    pub fn structure(mut self, name: impl Into<String>) -> Self {
        self.structures.push(name.into());
        self
    }

    /// Adds several structures to compile.
    #[must_use]
    pub fn structures<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.structures.extend(names.into_iter().map(Into::into));
        self
    }

    /// Stops the run at the first failing structure instead of skipping it.
    #[must_use]
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Builds the generator.
    #[must_use]
    pub fn build(self) -> Generator {
        Generator {
            structures: self.structures,
            fail_fast: self.fail_fast,
        }
    }
}

/// Compiles the configured structures and hands each to an emitter.
#[derive(Debug, Clone)]
pub struct Generator {
    structures: Vec<String>,
    fail_fast: bool,
}

impl Generator {
    /// Creates a generator builder.
    #[must_use]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Returns the configured structure names.
    #[must_use]
    pub fn structures(&self) -> &[String] {
        &self.structures
    }

    /// Runs the generation.
    ///
    /// A structure that fails to load, compile or emit is logged and recorded
    /// in the report, and the run moves on to the next one. With `fail_fast`
    /// the first failure is returned instead.
    ///
    /// # Errors
    /// Returns `CodegenError` only in fail-fast mode.
    pub fn run<S, E>(&self, source: &S, emitter: &mut E) -> Result<GenerationReport, CodegenError>
    where
        S: StructureSource + ?Sized,
        E: Emitter + ?Sized,
    {
        tracing::info!("Generating {} structures", self.structures.len());
        let mut report = GenerationReport::default();

        for name in &self.structures {
            match Self::generate_one(name, source, emitter) {
                Ok(()) => {
                    tracing::debug!("Generated structure {}", name);
                    report.generated.push(name.clone());
                }
                Err(e) if self.fail_fast => {
                    tracing::error!("Aborting generation: {}", e);
                    return Err(e);
                }
                Err(e) => {
                    tracing::error!("Skipping structure {}: {}", name, e);
                    report.failures.push(e);
                }
            }
        }

        if report.failures.is_empty() {
            tracing::info!("Generated {} structures", report.generated.len());
        } else {
            tracing::warn!(
                "Generated {} structures, {} failed",
                report.generated.len(),
                report.failures.len()
            );
        }
        Ok(report)
    }

    fn generate_one<S, E>(name: &str, source: &S, emitter: &mut E) -> Result<(), CodegenError>
    where
        S: StructureSource + ?Sized,
        E: Emitter + ?Sized,
    {
        let rows = source.rows(name)?;
        let model = compile_structure(name, rows)?;
        emitter.emit(&model)
    }
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Structures emitted successfully, in run order.
    pub generated: Vec<String>,
    /// Structures skipped, with the error that caused the skip.
    pub failures: Vec<CodegenError>,
}

impl GenerationReport {
    /// Returns true if every structure was generated.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the names of the structures that failed.
    #[must_use]
    pub fn failed(&self) -> Vec<&str> {
        self.failures.iter().map(CodegenError::structure).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::StructureRegistry;
    use hl7gen_core::StructureError;

    fn source() -> crate::source::MemorySource {
        let mut source = crate::source::MemorySource::new();
        source.insert_codes("ACK", &["MSH", "MSA", "[", "ERR", "]"]);
        source.insert_codes("BAD", &["MSH", "{", "NTE"]);
        source.insert_codes(
            "ORU_R01",
            &["MSH", "{", "PID", "{", "OBR", "{", "OBX", "}", "}", "}"],
        );
        source
    }

    struct RejectingEmitter;

    impl Emitter for RejectingEmitter {
        fn emit(&mut self, model: &StructureModel) -> Result<(), CodegenError> {
            Err(CodegenError::emit(&model.name, "rejected"))
        }
    }

    #[test]
    fn test_builder_defaults() {
        let generator = Generator::builder().build();
        assert!(generator.structures().is_empty());
        assert!(!generator.fail_fast);
    }

    #[test]
    fn test_builder_structures() {
        let generator = GeneratorBuilder::new()
            .structure("ACK")
            .structures(["ADT_A01", "ORU_R01"])
            .fail_fast(true)
            .build();
        assert_eq!(generator.structures(), ["ACK", "ADT_A01", "ORU_R01"]);
        assert!(generator.fail_fast);
    }

    #[test]
    fn test_compile_structure() {
        let model = compile_structure("ACK", source().rows("ACK").unwrap()).unwrap();
        assert_eq!(model.name, "ACK");
        assert_eq!(model.groups.len(), 2);
    }

    #[test]
    fn test_compile_structure_error_names_structure() {
        let err = compile_structure("BAD", source().rows("BAD").unwrap()).unwrap_err();
        match err {
            CodegenError::Structure { structure, source } => {
                assert_eq!(structure, "BAD");
                assert!(matches!(source, StructureError::Unclosed { position: 1, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_run_logs_and_continues() {
        let generator = Generator::builder()
            .structures(["ACK", "BAD", "MISSING", "ORU_R01"])
            .build();
        let mut emitted: Vec<StructureModel> = Vec::new();
        let report = generator.run(&source(), &mut emitted).unwrap();

        assert!(!report.is_success());
        assert_eq!(report.generated, vec!["ACK", "ORU_R01"]);
        assert_eq!(report.failed(), vec!["BAD", "MISSING"]);
        assert!(matches!(report.failures[0], CodegenError::Structure { .. }));
        assert!(matches!(report.failures[1], CodegenError::Source { .. }));

        let names: Vec<&str> = emitted.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["ACK", "ORU_R01"]);
    }

    #[test]
    fn test_run_skips_too_deep_structure() {
        let depth = hl7gen_schema::MAX_NESTING_DEPTH + 2;
        let mut codes = Vec::new();
        for _ in 0..depth {
            codes.extend(["[", "NTE"]);
        }
        codes.extend(std::iter::repeat_n("]", depth));

        let mut source = source();
        source.insert_codes("DEEP", &codes);
        let generator = Generator::builder().structures(["DEEP", "ACK"]).build();
        let mut emitted: Vec<StructureModel> = Vec::new();
        let report = generator.run(&source, &mut emitted).unwrap();

        assert_eq!(report.generated, vec!["ACK"]);
        assert!(matches!(
            report.failures[0],
            CodegenError::Structure {
                source: StructureError::TooDeep { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_run_fail_fast() {
        let generator = Generator::builder()
            .structures(["ACK", "BAD", "ORU_R01"])
            .fail_fast(true)
            .build();
        let mut emitted: Vec<StructureModel> = Vec::new();
        let err = generator.run(&source(), &mut emitted).unwrap_err();

        assert_eq!(err.structure(), "BAD");
        assert_eq!(emitted.len(), 1);
    }

    #[test]
    fn test_run_emit_failure_recorded() {
        let generator = Generator::builder().structure("ACK").build();
        let report = generator.run(&source(), &mut RejectingEmitter).unwrap();
        assert!(report.generated.is_empty());
        assert!(matches!(report.failures[0], CodegenError::Emit { .. }));
    }

    #[test]
    fn test_registry_from_report() {
        let generator = Generator::builder().structures(["ACK", "ORU_R01"]).build();
        let mut emitted: Vec<StructureModel> = Vec::new();
        let report = generator.run(&source(), &mut emitted).unwrap();
        assert!(report.is_success());

        let mut registry = StructureRegistry::new();
        for model in emitted {
            let name = model.name.clone();
            registry.register(name, move || model.root().class_name.clone());
        }
        assert_eq!(registry.names(), vec!["ACK", "ORU_R01"]);
        assert_eq!(registry.create("ORU_R01").as_deref(), Some("ORU_R01"));
    }
}
