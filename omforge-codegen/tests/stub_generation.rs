//! End-to-end stub generation over a parsed schema.

use omforge_codegen::{GeneratorConfig, generate_stub, generate_stubs_from_xml};
use omforge_schema::parse_schema;

const BOOKSTORE_SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<database name="bookstore" package="Bookstore">
    <table name="employee" description="Company staff">
        <column name="id" type="INTEGER" required="true"/>
        <column name="employee_type" type="VARCHAR" inheritance="single">
            <inheritance key="MANAGER" class="Manager"/>
            <inheritance key="CONTRACTOR" class="Contractor" extends="Vendor"/>
            <inheritance key="INTERN" class="Intern" extends="\Acme\LegacyIntern"/>
        </column>
    </table>
    <table name="vendor">
        <column name="id" type="INTEGER"/>
    </table>
</database>"#;

#[test]
fn manager_stub_matches_expected_source() {
    let db = parse_schema(BOOKSTORE_SCHEMA).expect("Failed to parse schema");
    let employee = db.table("employee").expect("Failed to find table");
    let config = GeneratorConfig::default();

    let source = generate_stub(&db, employee, &employee.subtypes[0], &config);

    let expected = "<?php

namespace Bookstore;

use Bookstore\\Base\\Employee;

/**
 * Skeleton subclass for representing a row from one of the subclasses of the 'employee' table.
 *
 * Company staff
 *
 * You should add additional methods to this class to meet the
 * application requirements.  This class will only be generated as
 * long as it does not already exist in the output directory.
 */
class Manager extends Employee
{
    /**
     * Constructs a new Manager class, setting the employee_type column to EmployeeTableMap::CLASSKEY_MANAGER.
     */
    public function __construct()
    {
        parent::__construct();
        $this->setEmployeeType(EmployeeTableMap::CLASSKEY_MANAGER);
    }
}
";
    assert_eq!(source, expected);
}

#[test]
fn contractor_extends_vendor_base_object() {
    let db = parse_schema(BOOKSTORE_SCHEMA).expect("Failed to parse schema");
    let employee = db.table("employee").expect("Failed to find table");
    let config = GeneratorConfig::default();

    let source = generate_stub(&db, employee, &employee.subtypes[1], &config);

    assert!(source.contains("use Bookstore\\Base\\Vendor;"));
    assert!(source.contains("class Contractor extends Vendor"));
    // The discriminator still comes from the declaring table.
    assert!(source.contains("$this->setEmployeeType(EmployeeTableMap::CLASSKEY_CONTRACTOR);"));
}

#[test]
fn intern_extends_external_class_by_short_name() {
    let db = parse_schema(BOOKSTORE_SCHEMA).expect("Failed to parse schema");
    let employee = db.table("employee").expect("Failed to find table");
    let config = GeneratorConfig::default();

    let source = generate_stub(&db, employee, &employee.subtypes[2], &config);

    assert!(source.contains("class Intern extends LegacyIntern"));
    assert!(!source.contains("\nuse "));
}

#[test]
fn repeated_generation_is_byte_identical_without_timestamp() {
    let config = GeneratorConfig::default();
    let first = generate_stubs_from_xml(BOOKSTORE_SCHEMA, &config).expect("Failed to generate");
    let second = generate_stubs_from_xml(BOOKSTORE_SCHEMA, &config).expect("Failed to generate");

    assert_eq!(first.len(), 3);
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.source, b.source);
    }
}

#[test]
fn timestamped_stubs_differ_only_in_the_timestamp_line() {
    let config = GeneratorConfig::default().with_timestamp(true);
    let first = generate_stubs_from_xml(BOOKSTORE_SCHEMA, &config).expect("Failed to generate");
    let second = generate_stubs_from_xml(BOOKSTORE_SCHEMA, &config).expect("Failed to generate");

    for (a, b) in first.iter().zip(second.iter()) {
        assert!(a.source.contains("This class was autogenerated by omforge "));
        let differing: Vec<_> = a
            .source
            .lines()
            .zip(b.source.lines())
            .filter(|(x, y)| x != y)
            .collect();
        // Zero lines differ when both runs land on the same second.
        assert!(differing.len() <= 1);
    }
}

#[test]
fn every_stub_tags_its_discriminator_exactly_once() {
    let config = GeneratorConfig::default();
    let stubs = generate_stubs_from_xml(BOOKSTORE_SCHEMA, &config).expect("Failed to generate");

    for stub in &stubs {
        assert_eq!(stub.source.matches("parent::__construct();").count(), 1);
        assert_eq!(
            stub.source
                .matches("$this->setEmployeeType(EmployeeTableMap::CLASSKEY_")
                .count(),
            1
        );
        // Ancestor call comes first.
        let parent_at = stub
            .source
            .find("parent::__construct();")
            .expect("Failed to find ancestor call");
        let setter_at = stub
            .source
            .find("$this->setEmployeeType(")
            .expect("Failed to find setter call");
        assert!(parent_at < setter_at);
    }
}

#[test]
fn generated_stub_metadata_drives_output_placement() {
    let config = GeneratorConfig::default();
    let stubs = generate_stubs_from_xml(BOOKSTORE_SCHEMA, &config).expect("Failed to generate");

    let names: Vec<&str> = stubs.iter().map(|s| s.class_name.as_str()).collect();
    assert_eq!(names, vec!["Manager", "Contractor", "Intern"]);
    for stub in &stubs {
        assert_eq!(stub.package.as_deref(), Some("Bookstore"));
    }
}
