//! Read-only accessor over the database for builder lookups.
//!
//! The stub generator never owns schema entities; it looks up the generated
//! class names it references (base objects, table maps, class key
//! constants) through this view.

use omforge_schema::{Database, SubtypeDecl, Table};

/// Reference to a generated class: its full classpath and short name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRef {
    /// Backslash-separated classpath, e.g. `Bookstore\Base\Employee`.
    pub classpath: String,
    /// Short class name, e.g. `Employee`.
    pub short_name: String,
}

/// Read-only view over a database for cross-table builder lookups.
#[derive(Debug, Clone, Copy)]
pub struct BuilderGraph<'a> {
    database: &'a Database,
}

impl<'a> BuilderGraph<'a> {
    /// Creates a graph view over the given database.
    #[must_use]
    pub fn new(database: &'a Database) -> Self {
        Self { database }
    }

    /// Returns the underlying database.
    #[must_use]
    pub fn database(&self) -> &'a Database {
        self.database
    }

    /// Returns the base object class generated for a table. Base objects
    /// live in the `Base` sub-namespace of the table's effective package.
    #[must_use]
    pub fn base_object(&self, table: &Table) -> ClassRef {
        let package = table.package_or(&self.database.package);
        let classpath = if package.is_empty() {
            format!("Base\\{}", table.type_name)
        } else {
            format!("{}\\Base\\{}", package, table.type_name)
        };

        ClassRef {
            classpath,
            short_name: table.type_name.clone(),
        }
    }

    /// Returns the table map class name generated for a table.
    #[must_use]
    pub fn table_map_class(&self, table: &Table) -> String {
        format!("{}TableMap", table.type_name)
    }

    /// Returns true if some table's object-model type name matches `name`.
    #[must_use]
    pub fn has_table_by_type_name(&self, name: &str) -> bool {
        self.database.has_table_by_type_name(name)
    }

    /// Looks up a table by its object-model type name.
    #[must_use]
    pub fn table_by_type_name(&self, name: &str) -> Option<&'a Table> {
        self.database.table_by_type_name(name)
    }

    /// Returns the class key constant name generated for a subtype on its
    /// owning table's map class.
    #[must_use]
    pub fn classkey_constant(&self, decl: &SubtypeDecl) -> String {
        format!("CLASSKEY_{}", decl.constant_suffix())
    }
}
