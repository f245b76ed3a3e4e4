//! Output pipeline: writes generated stubs to disk.
//!
//! Stubs are user-extensible classes, so an existing file is never
//! overwritten; the pipeline only fills in the stubs that do not exist yet
//! and reports what it did.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::generator::StubGenerator;
use omforge_schema::Database;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of one stub-writing pass.
#[derive(Debug, Default)]
pub struct StubReport {
    /// Files created in this pass.
    pub written: Vec<PathBuf>,
    /// Files left untouched because they already existed.
    pub skipped: Vec<PathBuf>,
}

/// Writes one stub file per declared subtype in the database, under
/// `out_dir`, using one directory level per package segment.
///
/// # Errors
/// Returns `CodegenError::Io` if a directory or file cannot be created.
pub fn write_stubs(
    database: &Database,
    config: &GeneratorConfig,
    out_dir: &Path,
) -> Result<StubReport, CodegenError> {
    let mut report = StubReport::default();

    for table in &database.tables {
        for decl in &table.subtypes {
            let generator = StubGenerator::new(database, table, decl, config);
            let path = stub_path(&generator, out_dir);

            if path.exists() {
                debug!(path = %path.display(), "stub exists, skipping");
                report.skipped.push(path);
                continue;
            }

            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, generator.generate())?;
            info!(class = generator.class_name(), path = %path.display(), "wrote stub");
            report.written.push(path);
        }
    }

    Ok(report)
}

/// Computes the output path for one stub:
/// `<out_dir>/<package segments>/<ClassName>.php`.
fn stub_path(generator: &StubGenerator<'_>, out_dir: &Path) -> PathBuf {
    let mut path = out_dir.to_path_buf();

    if let Some(package) = generator.package() {
        for segment in package.split(['\\', '.']) {
            if !segment.is_empty() {
                path.push(segment);
            }
        }
    }

    path.push(format!("{}.php", generator.class_name()));
    path
}
