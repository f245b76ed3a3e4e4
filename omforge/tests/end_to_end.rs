//! Full pipeline: parse a schema, write stubs, re-run and keep edits.

use omforge::prelude::*;
use std::fs;

const SCHEMA: &str = r#"<database name="bookstore" package="Bookstore">
    <table name="employee" description="Company staff">
        <column name="employee_type" type="VARCHAR" inheritance="single">
            <inheritance key="MANAGER" class="Manager"/>
            <inheritance key="CONTRACTOR" class="Contractor" extends="Vendor"/>
        </column>
    </table>
    <table name="vendor">
        <column name="id" type="INTEGER"/>
    </table>
</database>"#;

#[test]
fn generate_write_customize_regenerate() {
    let db = parse_schema(SCHEMA).expect("Failed to parse schema");
    let config = GeneratorConfig::default();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let report = write_stubs(&db, &config, dir.path()).expect("Failed to write stubs");
    assert_eq!(report.written.len(), 2);

    let manager = dir.path().join("Bookstore/Manager.php");
    let generated = fs::read_to_string(&manager).expect("Failed to read stub");
    assert!(generated.contains("class Manager extends Employee"));

    // A user customizes the stub; regeneration must leave it alone.
    let customized = format!("{generated}\n// custom business logic\n");
    fs::write(&manager, &customized).expect("Failed to write file");

    let rerun = write_stubs(&db, &config, dir.path()).expect("Failed to write stubs");
    assert!(rerun.written.is_empty());
    assert_eq!(rerun.skipped.len(), 2);

    let kept = fs::read_to_string(&manager).expect("Failed to read stub");
    assert_eq!(kept, customized);
}

#[test]
fn cross_table_ancestor_resolves_through_the_graph() {
    let db = parse_schema(SCHEMA).expect("Failed to parse schema");
    let employee = db.table("employee").expect("Failed to find table");
    let graph = BuilderGraph::new(&db);

    let resolved = resolve_ancestor(&employee.subtypes[1], employee, &graph);
    assert_eq!(resolved.source, AncestorSource::CrossTableBase);
    assert_eq!(resolved.short_name, "Vendor");
}
