//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use omforge::prelude::*;
//! ```

// Schema types
pub use omforge_schema::{
    Column, Database, ParseError, SchemaError, SubtypeDecl, Table, parse_schema,
};

// Codegen types
pub use omforge_codegen::{
    AncestorSource, BuilderGraph, CodegenError, GeneratedStub, GeneratorConfig, ResolvedAncestor,
    StubClass, StubGenerator, StubReport, generate_stub, generate_stubs_from_file,
    generate_stubs_from_xml, resolve_ancestor, write_stubs,
};
