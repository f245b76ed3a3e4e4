//! Schema XML parser.
//!
//! This module parses `schema.xml` files describing a database, its tables
//! and columns, and any single-table inheritance declarations attached to a
//! discriminator column:
//!
//! ```xml
//! <database name="bookstore" package="Bookstore">
//!     <table name="employee" description="Company staff">
//!         <column name="id" type="INTEGER" required="true"/>
//!         <column name="employee_type" type="VARCHAR" inheritance="single">
//!             <inheritance key="MANAGER" class="Manager"/>
//!             <inheritance key="CONTRACTOR" class="Contractor" extends="Vendor"/>
//!         </column>
//!     </table>
//! </database>
//! ```
//!
//! Unknown elements and attributes are ignored.

use crate::error::{ParseError, SchemaError};
use crate::model::{Column, Database, Table};
use crate::subtype::SubtypeDecl;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parses a database schema from an XML string.
///
/// # Arguments
/// * `xml` - schema XML content
///
/// # Returns
/// Parsed database or error.
///
/// # Errors
/// Returns `SchemaError` if the XML is malformed, a required attribute is
/// missing, or a table's subtype declarations violate the model invariants
/// (duplicate class key constants).
pub fn parse_schema(xml: &str) -> Result<Database, SchemaError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut database: Option<Database> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes).map_err(ParseError::from)?;
                match name {
                    "database" => {
                        database = Some(parse_database(e)?);
                    }
                    "table" => {
                        if let Some(db) = database.as_mut() {
                            let table = parse_table(&mut reader, e)?;
                            table.validate_subtypes()?;
                            db.add_table(table);
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes).map_err(ParseError::from)?;
                if name == "table" {
                    if let Some(db) = database.as_mut() {
                        db.add_table(parse_table_attrs(e)?);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e).into()),
            _ => {}
        }
        buf.clear();
    }

    database.ok_or_else(|| {
        ParseError::InvalidStructure {
            message: "No database element found".to_string(),
        }
        .into()
    })
}

/// Parses the database element attributes.
fn parse_database(e: &BytesStart<'_>) -> Result<Database, ParseError> {
    let mut name: Option<String> = None;
    let mut package = String::new();

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "name" => name = Some(value.to_string()),
            "package" => package = value.to_string(),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("database", "name"))?;

    Ok(Database::new(name, package))
}

/// Parses a table element and its children.
fn parse_table(reader: &mut Reader<&[u8]>, e: &BytesStart<'_>) -> Result<Table, ParseError> {
    let mut table = parse_table_attrs(e)?;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                if tag_name == "column" {
                    parse_column(reader, e, &mut table)?;
                } else {
                    skip_element(reader)?;
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                if tag_name == "column" {
                    table.add_column(parse_column_attrs(e)?);
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(table)
}

/// Parses the table element attributes.
fn parse_table_attrs(e: &BytesStart<'_>) -> Result<Table, ParseError> {
    let mut name: Option<String> = None;
    let mut type_name: Option<String> = None;
    let mut description = None;
    let mut package = None;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "name" => name = Some(value.to_string()),
            "typeName" => type_name = Some(value.to_string()),
            "description" => description = Some(value.to_string()),
            "package" => package = Some(value.to_string()),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("table", "name"))?;

    let mut table = Table::new(name);
    if let Some(type_name) = type_name {
        table.type_name = type_name;
    }
    table.description = description;
    table.package = package;

    Ok(table)
}

/// Parses a column element with children; any `inheritance` children are
/// attached to the owning table as subtype declarations keyed off this
/// column.
fn parse_column(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    table: &mut Table,
) -> Result<(), ParseError> {
    let column = parse_column_attrs(e)?;
    let column_name = column.name.clone();
    table.add_column(column);

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                if tag_name == "inheritance" {
                    table.add_subtype(parse_inheritance(e, &column_name)?);
                }
                skip_element(reader)?;
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                if tag_name == "inheritance" {
                    table.add_subtype(parse_inheritance(e, &column_name)?);
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Parses the column element attributes.
fn parse_column_attrs(e: &BytesStart<'_>) -> Result<Column, ParseError> {
    let mut name: Option<String> = None;
    let mut object_name: Option<String> = None;
    let mut sql_type = None;
    let mut required = false;
    let mut description = None;
    let mut inheritance = false;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "name" => name = Some(value.to_string()),
            "objectName" => object_name = Some(value.to_string()),
            "type" => sql_type = Some(value.to_string()),
            "required" => {
                required = value
                    .parse()
                    .map_err(|_| ParseError::invalid_attr("column", "required", value))?;
            }
            "description" => description = Some(value.to_string()),
            "inheritance" => inheritance = value == "single",
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("column", "name"))?;

    let mut column = Column::new(name);
    if let Some(object_name) = object_name {
        column.object_name = object_name;
    }
    column.sql_type = sql_type;
    column.required = required;
    column.description = description;
    column.inheritance = inheritance;

    Ok(column)
}

/// Parses an inheritance element into a subtype declaration.
fn parse_inheritance(e: &BytesStart<'_>, column_name: &str) -> Result<SubtypeDecl, ParseError> {
    let mut class_name: Option<String> = None;
    let mut key: Option<String> = None;
    let mut ancestor = None;
    let mut package = None;

    for attr in e.attributes().flatten() {
        let attr_key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match attr_key {
            "class" => class_name = Some(value.to_string()),
            "key" => key = Some(value.to_string()),
            "extends" => ancestor = Some(value.to_string()),
            "package" => package = Some(value.to_string()),
            _ => {}
        }
    }

    let class_name = class_name.ok_or_else(|| ParseError::missing_attr("inheritance", "class"))?;
    let key = key.ok_or_else(|| ParseError::missing_attr("inheritance", "key"))?;

    let mut decl = SubtypeDecl::new(class_name, key, column_name);
    decl.ancestor = ancestor;
    decl.package = package;

    Ok(decl)
}

/// Skips to the end of the current element.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}
