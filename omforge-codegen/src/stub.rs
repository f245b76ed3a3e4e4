//! Structured stub class model and rendering.
//!
//! A generated stub is assembled as a small structured value first
//! (namespace, imports, doc block, declaration header, constructor) and
//! turned into source text by one rendering pass. Rendering is a pure
//! function of the fields; the generated-on timestamp, when enabled, is a
//! field like any other and is filled in during assembly.

/// One generated subtype stub, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubClass {
    /// Namespace the stub is declared in, when the effective package is
    /// non-empty.
    pub namespace: Option<String>,
    /// Classpaths imported with `use` declarations.
    pub imports: Vec<String>,
    /// Optional class-level doc block.
    pub doc: Option<ClassDoc>,
    /// Declared subtype class name.
    pub class_name: String,
    /// Short name of the resolved ancestor.
    pub parent_short_name: String,
    /// The discriminator-tagging constructor.
    pub constructor: Constructor,
}

/// Class-level doc block naming the owning table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDoc {
    /// Owning table name.
    pub table_name: String,
    /// Owning table description.
    pub description: Option<String>,
    /// Optional generated-on stamp.
    pub stamp: Option<Stamp>,
}

/// Generator version and timestamp stamped into the doc block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    /// Generator version string.
    pub version: String,
    /// RFC 2822 timestamp of the generation run.
    pub generated_at: String,
}

/// Constructor that tags every instance with its discriminator value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    /// Declared subtype class name.
    pub class_name: String,
    /// Discriminator column name (doc comment only).
    pub column_name: String,
    /// Discriminator column setter name.
    pub setter_name: String,
    /// Owning table's map class name.
    pub table_map_class: String,
    /// Class key constant on the table map.
    pub classkey_constant: String,
}

impl StubClass {
    /// Renders the stub to source text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str("<?php\n");

        if let Some(namespace) = &self.namespace {
            output.push_str(&format!("\nnamespace {};\n", namespace));
        }

        if !self.imports.is_empty() {
            output.push('\n');
            for import in &self.imports {
                output.push_str(&format!("use {};\n", import));
            }
        }

        output.push('\n');
        if let Some(doc) = &self.doc {
            output.push_str(&doc.render());
        }

        output.push_str(&format!(
            "class {} extends {}\n{{\n",
            self.class_name, self.parent_short_name
        ));
        output.push_str(&self.constructor.render());
        output.push_str("}\n");

        output
    }
}

impl ClassDoc {
    /// Renders the class-level doc block.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str("/**\n");
        output.push_str(&format!(
            " * Skeleton subclass for representing a row from one of the subclasses of the '{}' table.\n",
            self.table_name
        ));
        output.push_str(" *\n");

        if let Some(description) = &self.description {
            output.push_str(&format!(" * {}\n", description));
            output.push_str(" *\n");
        }

        if let Some(stamp) = &self.stamp {
            output.push_str(&format!(
                " * This class was autogenerated by {} on:\n",
                stamp.version
            ));
            output.push_str(" *\n");
            output.push_str(&format!(" * {}\n", stamp.generated_at));
            output.push_str(" *\n");
        }

        output.push_str(" * You should add additional methods to this class to meet the\n");
        output.push_str(" * application requirements.  This class will only be generated as\n");
        output.push_str(" * long as it does not already exist in the output directory.\n");
        output.push_str(" */\n");

        output
    }
}

impl Constructor {
    /// Renders the constructor: one ancestor-constructor call, then one
    /// discriminator setter call.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str("    /**\n");
        output.push_str(&format!(
            "     * Constructs a new {} class, setting the {} column to {}::{}.\n",
            self.class_name, self.column_name, self.table_map_class, self.classkey_constant
        ));
        output.push_str("     */\n");
        output.push_str("    public function __construct()\n");
        output.push_str("    {\n");
        output.push_str("        parent::__construct();\n");
        output.push_str(&format!(
            "        $this->{}({}::{});\n",
            self.setter_name, self.table_map_class, self.classkey_constant
        ));
        output.push_str("    }\n");

        output
    }
}
