//! # omforge Schema
//!
//! Database schema model and XML loader for the omforge generator.
//!
//! This crate provides:
//! - XML schema parsing (`<database>/<table>/<column>/<inheritance>`)
//! - The database/table/column object model consumed by code generation
//! - Single-table inheritance subtype declarations
//! - Class-name formatting helpers

pub mod error;
pub mod model;
pub mod name;
pub mod parser;
pub mod subtype;

pub use error::{ParseError, SchemaError};
pub use model::{Column, Database, Table};
pub use name::{short_name, to_pascal_case};
pub use parser::parse_schema;
pub use subtype::SubtypeDecl;
