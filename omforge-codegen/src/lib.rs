//! # omforge Codegen
//!
//! Inheritance-stub code generation for the omforge object model.
//!
//! This crate provides:
//! - Ancestor resolution for subtype declarations (same-table base,
//!   cross-table base, or external class)
//! - Stub class generation with discriminator tagging
//! - A write-once output pipeline (existing stubs are never overwritten)

pub mod config;
pub mod error;
pub mod generator;
pub mod graph;
pub mod pipeline;
pub mod resolver;
pub mod stub;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::StubGenerator;
pub use graph::{BuilderGraph, ClassRef};
pub use pipeline::{StubReport, write_stubs};
pub use resolver::{AncestorSource, ResolvedAncestor, resolve_ancestor};
pub use stub::{ClassDoc, Constructor, Stamp, StubClass};

use omforge_schema::{Database, SubtypeDecl, Table};

/// One generated stub: where it belongs and its source text.
#[derive(Debug, Clone)]
pub struct GeneratedStub {
    /// Declared subtype class name.
    pub class_name: String,
    /// Effective package, when non-empty.
    pub package: Option<String>,
    /// Rendered source text.
    pub source: String,
}

/// Generates the source text for one subtype declaration.
#[must_use]
pub fn generate_stub(
    database: &Database,
    table: &Table,
    decl: &SubtypeDecl,
    config: &GeneratorConfig,
) -> String {
    StubGenerator::new(database, table, decl, config).generate()
}

/// Generates stubs for every subtype declared in a schema XML string.
///
/// # Arguments
/// * `xml` - schema XML content
/// * `config` - generator configuration
///
/// # Returns
/// One `GeneratedStub` per declared subtype, in schema order.
///
/// # Errors
/// Returns `CodegenError` if the schema cannot be parsed.
pub fn generate_stubs_from_xml(
    xml: &str,
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedStub>, CodegenError> {
    let database = omforge_schema::parse_schema(xml)?;
    let mut stubs = Vec::new();

    for table in &database.tables {
        for decl in &table.subtypes {
            let generator = StubGenerator::new(&database, table, decl, config);
            stubs.push(GeneratedStub {
                class_name: generator.class_name().to_string(),
                package: generator.package().map(str::to_string),
                source: generator.generate(),
            });
        }
    }

    Ok(stubs)
}

/// Generates stubs for every subtype declared in a schema XML file.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_stubs_from_file(
    path: &std::path::Path,
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedStub>, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_stubs_from_xml(&xml, config)
}
