//! # omforge
//!
//! Schema-driven object-model stub generator.
//!
//! omforge reads a database schema XML and generates the empty,
//! user-customizable subtype stub classes for tables that use single-table
//! inheritance: one stub per declared subtype, each extending the right
//! ancestor and tagging every instance with its discriminator value at
//! construction time. Generated files are write-once; a stub that already
//! exists on disk is never regenerated over.
//!
//! ## Quick Start
//!
//! ```
//! use omforge::prelude::*;
//!
//! let xml = r#"<database name="bookstore" package="Bookstore">
//!     <table name="employee">
//!         <column name="employee_type" inheritance="single">
//!             <inheritance key="MANAGER" class="Manager"/>
//!         </column>
//!     </table>
//! </database>"#;
//!
//! let stubs = generate_stubs_from_xml(xml, &GeneratorConfig::default()).unwrap();
//! assert_eq!(stubs[0].class_name, "Manager");
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema XML parsing and the database object model
//! - [`codegen`] - Ancestor resolution, stub generation, output pipeline

pub use omforge_codegen as codegen;
pub use omforge_schema as schema;

pub mod prelude;
