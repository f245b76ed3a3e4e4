//! Ancestor resolution for subtype declarations.
//!
//! Each declared subtype extends exactly one ancestor. Which class that is
//! depends on the declaration and the rest of the schema: the owning
//! table's generated base object, another table's generated base object, or
//! a class outside the generated model entirely.

use crate::graph::BuilderGraph;
use omforge_schema::{SubtypeDecl, Table, short_name};

/// Where a resolved ancestor declaration comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AncestorSource {
    /// The owning table's generated base object.
    SameTableBase,
    /// Another table's generated base object (cross-hierarchy extension).
    CrossTableBase,
    /// An externally supplied class outside the generated model.
    External,
}

/// A resolved ancestor: its source, classpath and short class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAncestor {
    /// Where the ancestor declaration comes from.
    pub source: AncestorSource,
    /// Full classpath of the ancestor.
    pub classpath: String,
    /// Short class name used in the `extends` clause.
    pub short_name: String,
}

/// Resolves the ancestor of a subtype declaration.
///
/// - No `ancestor` string: the subtype extends the owning table's base
///   object.
/// - The string names another table's object-model type: the subtype
///   extends that table's base object.
/// - Anything else is trusted verbatim as an external classpath, with the
///   short name taken from its last path segment. No validation is applied;
///   a malformed or empty ancestor string passes through unchanged and will
///   surface in the generated source.
#[must_use]
pub fn resolve_ancestor(
    decl: &SubtypeDecl,
    table: &Table,
    graph: &BuilderGraph<'_>,
) -> ResolvedAncestor {
    let Some(ancestor) = decl.ancestor.as_deref() else {
        let base = graph.base_object(table);
        return ResolvedAncestor {
            source: AncestorSource::SameTableBase,
            classpath: base.classpath,
            short_name: base.short_name,
        };
    };

    if let Some(other) = graph.table_by_type_name(ancestor) {
        let base = graph.base_object(other);
        return ResolvedAncestor {
            source: AncestorSource::CrossTableBase,
            classpath: base.classpath,
            short_name: base.short_name,
        };
    }

    ResolvedAncestor {
        source: AncestorSource::External,
        classpath: ancestor.to_string(),
        short_name: short_name(ancestor).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omforge_schema::{Database, parse_schema};

    fn bookstore() -> Database {
        let xml = r#"<database name="bookstore" package="Bookstore">
            <table name="employee" description="Company staff">
                <column name="id"/>
                <column name="employee_type" inheritance="single">
                    <inheritance key="MANAGER" class="Manager"/>
                    <inheritance key="CONTRACTOR" class="Contractor" extends="Vendor"/>
                    <inheritance key="INTERN" class="Intern" extends="\Acme\LegacyIntern"/>
                </column>
            </table>
            <table name="vendor">
                <column name="id"/>
            </table>
        </database>"#;
        parse_schema(xml).expect("Failed to parse schema")
    }

    #[test]
    fn test_unset_ancestor_resolves_to_same_table_base() {
        let db = bookstore();
        let graph = BuilderGraph::new(&db);
        let employee = db.table("employee").expect("Failed to find table");

        let resolved = resolve_ancestor(&employee.subtypes[0], employee, &graph);
        assert_eq!(resolved.source, AncestorSource::SameTableBase);
        assert_eq!(resolved.classpath, "Bookstore\\Base\\Employee");
        assert_eq!(resolved.short_name, "Employee");
    }

    #[test]
    fn test_known_type_name_resolves_to_cross_table_base() {
        let db = bookstore();
        let graph = BuilderGraph::new(&db);
        let employee = db.table("employee").expect("Failed to find table");

        let resolved = resolve_ancestor(&employee.subtypes[1], employee, &graph);
        assert_eq!(resolved.source, AncestorSource::CrossTableBase);
        assert_eq!(resolved.classpath, "Bookstore\\Base\\Vendor");
        assert_eq!(resolved.short_name, "Vendor");
    }

    #[test]
    fn test_unknown_name_falls_back_to_external() {
        let db = bookstore();
        let graph = BuilderGraph::new(&db);
        let employee = db.table("employee").expect("Failed to find table");

        let resolved = resolve_ancestor(&employee.subtypes[2], employee, &graph);
        assert_eq!(resolved.source, AncestorSource::External);
        assert_eq!(resolved.classpath, "\\Acme\\LegacyIntern");
        assert_eq!(resolved.short_name, "LegacyIntern");
    }

    #[test]
    fn test_empty_ancestor_string_is_external_verbatim() {
        let db = bookstore();
        let graph = BuilderGraph::new(&db);
        let employee = db.table("employee").expect("Failed to find table");

        let mut decl = employee.subtypes[1].clone();
        decl.ancestor = Some(String::new());

        let resolved = resolve_ancestor(&decl, employee, &graph);
        assert_eq!(resolved.source, AncestorSource::External);
        assert_eq!(resolved.classpath, "");
        assert_eq!(resolved.short_name, "");
    }
}
