//! Example generation run printing the accessor model of each structure.
//!
//! Run with: `RUST_LOG=debug cargo run --example generate`

use hl7gen::prelude::*;

/// Emitter that prints each group class and its accessors.
struct PrintEmitter;

impl Emitter for PrintEmitter {
    fn emit(&mut self, model: &StructureModel) -> Result<(), CodegenError> {
        println!("== {}", model.name);
        for group in &model.groups {
            println!("  class {}", group.class_name);
            for child in &group.children {
                let marker = match (child.is_optional(), child.is_repeating()) {
                    (false, false) => "",
                    (true, false) => " [0..1]",
                    (false, true) => " [1..*]",
                    (true, true) => " [0..*]",
                };
                println!("    {}: {}{}", child.accessor, child.type_name, marker);
            }
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut source = MemorySource::new();
    source.insert_codes(
        "ORU_R01",
        &[
            "MSH", "{", "[", "PID", "[", "NTE", "]", "[", "PV1", "]", "]", "{", "[", "ORC", "]",
            "OBR", "{", "[", "NTE", "]", "}", "{", "[", "OBX", "]", "{", "[", "NTE", "]", "}",
            "}", "}", "}", "[", "DSC", "]",
        ],
    );
    source.insert_codes(
        "ADT_A01",
        &["MSH", "EVN", "PID", "[", "PD1", "]", "[{", "NK1", "}]", "PV1", "?"],
    );
    source.insert_codes("BROKEN", &["MSH", "{", "PID", "]"]);

    let generator = Generator::builder()
        .structures(["ORU_R01", "ADT_A01", "BROKEN"])
        .build();
    let report = generator.run(&source, &mut PrintEmitter)?;

    println!("generated: {:?}", report.generated);
    for failure in &report.failures {
        println!("failed: {}", failure);
    }
    Ok(())
}
