//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
///
/// Stub assembly itself is infallible; errors only arise while loading the
/// schema or writing generated files.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema XML parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] omforge_schema::ParseError),

    /// Schema model error.
    #[error("schema error: {0}")]
    Schema(#[from] omforge_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
