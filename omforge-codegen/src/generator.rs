//! Stub generator: one instance per subtype declaration.
//!
//! The declaration is a constructor parameter, so a generator can never be
//! asked to emit without one; emission is total and produces the complete
//! stub text in a single call. Generating the same declaration twice yields
//! byte-identical output unless the timestamp stamp is enabled.

use crate::config::GeneratorConfig;
use crate::graph::BuilderGraph;
use crate::resolver::{AncestorSource, resolve_ancestor};
use crate::stub::{ClassDoc, Constructor, Stamp, StubClass};
use omforge_schema::{Database, SubtypeDecl, Table, to_pascal_case};

/// Generator for one subtype stub class.
#[derive(Debug, Clone, Copy)]
pub struct StubGenerator<'a> {
    database: &'a Database,
    table: &'a Table,
    decl: &'a SubtypeDecl,
    config: &'a GeneratorConfig,
}

impl<'a> StubGenerator<'a> {
    /// Creates a generator for one subtype declaration of a table.
    #[must_use]
    pub fn new(
        database: &'a Database,
        table: &'a Table,
        decl: &'a SubtypeDecl,
        config: &'a GeneratorConfig,
    ) -> Self {
        Self {
            database,
            table,
            decl,
            config,
        }
    }

    /// Returns the declared subtype class name. The outer pipeline uses
    /// this to compute the output file name.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.decl.class_name
    }

    /// Returns the effective package: the declaration override when set,
    /// else the owning table's, else the database's; `None` when the whole
    /// chain is empty. The outer pipeline uses this for output directory
    /// placement.
    #[must_use]
    pub fn package(&self) -> Option<&str> {
        let package = match self.decl.package.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => self.table.package_or(&self.database.package),
        };

        if package.is_empty() { None } else { Some(package) }
    }

    /// Assembles the structured stub.
    ///
    /// Ancestor resolution decides the `extends` target and the import
    /// set: a base object (same-table or cross-table) is imported by
    /// classpath, an external ancestor is referenced by short name under
    /// the current namespace with no import.
    #[must_use]
    pub fn build(&self) -> StubClass {
        let graph = BuilderGraph::new(self.database);
        let resolved = resolve_ancestor(self.decl, self.table, &graph);

        let mut imports = Vec::new();
        if resolved.source != AncestorSource::External {
            imports.push(resolved.classpath);
        }

        let doc = self.config.add_class_level_comment.then(|| ClassDoc {
            table_name: self.table.name.clone(),
            description: self.table.description.clone(),
            stamp: self.config.add_timestamp.then(|| Stamp {
                version: self.config.version.clone(),
                generated_at: chrono::Local::now().to_rfc2822(),
            }),
        });

        let setter_name = match self.table.column(&self.decl.column) {
            Some(column) => column.setter_name(),
            // The loader guarantees the column exists; a hand-built decl
            // still generates, with the setter derived from the raw name.
            None => format!("set{}", to_pascal_case(&self.decl.column)),
        };

        StubClass {
            namespace: self.package().map(str::to_string),
            imports,
            doc,
            class_name: self.decl.class_name.clone(),
            parent_short_name: resolved.short_name,
            constructor: Constructor {
                class_name: self.decl.class_name.clone(),
                column_name: self.decl.column.clone(),
                setter_name,
                table_map_class: graph.table_map_class(self.table),
                classkey_constant: graph.classkey_constant(self.decl),
            },
        }
    }

    /// Generates the stub source text.
    #[must_use]
    pub fn generate(&self) -> String {
        self.build().render()
    }
}
