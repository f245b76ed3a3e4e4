//! Database object model.
//!
//! This module contains the data structures representing a parsed schema:
//! the database, its tables, their columns and their declared inheritance
//! subtypes. The model is consumed read-only by the code generator.

use crate::name::to_pascal_case;
use crate::subtype::SubtypeDecl;
use std::collections::HashMap;

/// Complete database schema definition.
#[derive(Debug, Clone)]
pub struct Database {
    /// Database name.
    pub name: String,
    /// Default package (namespace) for generated classes.
    pub package: String,
    /// Table definitions.
    pub tables: Vec<Table>,
    /// Table lookup by SQL name (built during parsing).
    table_map: HashMap<String, usize>,
    /// Table lookup by object-model type name (built during parsing).
    type_name_map: HashMap<String, usize>,
}

impl Database {
    /// Creates a new empty database.
    #[must_use]
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            tables: Vec::new(),
            table_map: HashMap::new(),
            type_name_map: HashMap::new(),
        }
    }

    /// Adds a table definition to the database.
    pub fn add_table(&mut self, table: Table) {
        let index = self.tables.len();
        self.table_map.insert(table.name.clone(), index);
        self.type_name_map.insert(table.type_name.clone(), index);
        self.tables.push(table);
    }

    /// Looks up a table by SQL name.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.table_map.get(name).map(|&idx| &self.tables[idx])
    }

    /// Looks up a table by its object-model type name.
    #[must_use]
    pub fn table_by_type_name(&self, name: &str) -> Option<&Table> {
        self.type_name_map.get(name).map(|&idx| &self.tables[idx])
    }

    /// Returns true if a table with the given object-model type name
    /// exists.
    #[must_use]
    pub fn has_table_by_type_name(&self, name: &str) -> bool {
        self.type_name_map.contains_key(name)
    }

    /// Rebuilds the lookup maps from the tables vector.
    pub fn build_table_maps(&mut self) {
        self.table_map.clear();
        self.type_name_map.clear();
        for (idx, table) in self.tables.iter().enumerate() {
            self.table_map.insert(table.name.clone(), idx);
            self.type_name_map.insert(table.type_name.clone(), idx);
        }
    }
}

/// Table definition.
#[derive(Debug, Clone)]
pub struct Table {
    /// SQL table name.
    pub name: String,
    /// Object-model type name (explicit `typeName` attribute or the
    /// PascalCase form of the SQL name).
    pub type_name: String,
    /// Table description.
    pub description: Option<String>,
    /// Package override; falls back to the database package when absent.
    pub package: Option<String>,
    /// Column definitions.
    pub columns: Vec<Column>,
    /// Declared inheritance subtypes.
    pub subtypes: Vec<SubtypeDecl>,
}

impl Table {
    /// Creates a new table with the type name derived from the SQL name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_name = to_pascal_case(&name);
        Self {
            name,
            type_name,
            description: None,
            package: None,
            columns: Vec::new(),
            subtypes: Vec::new(),
        }
    }

    /// Adds a column definition.
    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Adds a subtype declaration.
    pub fn add_subtype(&mut self, subtype: SubtypeDecl) {
        self.subtypes.push(subtype);
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns the effective package: the table override when set, else
    /// the given database package.
    #[must_use]
    pub fn package_or<'a>(&'a self, database_package: &'a str) -> &'a str {
        match &self.package {
            Some(p) if !p.is_empty() => p,
            _ => database_package,
        }
    }

    /// Returns true if the table declares inheritance subtypes.
    #[must_use]
    pub fn has_subtypes(&self) -> bool {
        !self.subtypes.is_empty()
    }

    /// Returns the discriminator column, if the table has one.
    #[must_use]
    pub fn inheritance_column(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.inheritance)
    }

    /// Checks the subtype declaration invariants: every declaration keys
    /// off a column this table owns, and no two declarations map to the
    /// same class key constant.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownColumn` or
    /// `SchemaError::DuplicateClassKey` on the first violation.
    pub fn validate_subtypes(&self) -> Result<(), crate::error::SchemaError> {
        use crate::error::SchemaError;
        let mut seen = std::collections::HashSet::new();

        for decl in &self.subtypes {
            if self.column(&decl.column).is_none() {
                return Err(SchemaError::UnknownColumn {
                    table: self.name.clone(),
                    column: decl.column.clone(),
                    class_name: decl.class_name.clone(),
                });
            }
            if !seen.insert(decl.constant_suffix()) {
                return Err(SchemaError::DuplicateClassKey {
                    table: self.name.clone(),
                    key: decl.constant_suffix(),
                });
            }
        }

        Ok(())
    }
}

/// Column definition.
#[derive(Debug, Clone)]
pub struct Column {
    /// SQL column name.
    pub name: String,
    /// Object-model field name (explicit `objectName` attribute or the
    /// PascalCase form of the SQL name).
    pub object_name: String,
    /// SQL type as written in the schema.
    pub sql_type: Option<String>,
    /// Whether the column is NOT NULL.
    pub required: bool,
    /// Column description.
    pub description: Option<String>,
    /// Whether this column is the table's inheritance discriminator.
    pub inheritance: bool,
}

impl Column {
    /// Creates a new column with the object name derived from the SQL
    /// name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let object_name = to_pascal_case(&name);
        Self {
            name,
            object_name,
            sql_type: None,
            required: false,
            description: None,
            inheritance: false,
        }
    }

    /// Returns the generated setter name for this column
    /// (`employee_type` -> `setEmployeeType`).
    #[must_use]
    pub fn setter_name(&self) -> String {
        format!("set{}", self.object_name)
    }
}
