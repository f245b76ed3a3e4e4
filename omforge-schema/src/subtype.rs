//! Single-table inheritance subtype declarations.

/// One declared subtype in a table's inheritance hierarchy.
///
/// Each declaration keys off the table's discriminator column: rows whose
/// column value equals `key` represent this subtype. The declaration only
/// stores the raw `ancestor` string; which class it actually names is
/// resolved at emission time, not here.
#[derive(Debug, Clone)]
pub struct SubtypeDecl {
    /// Generated stub class name. Unique within the owning table's
    /// hierarchy.
    pub class_name: String,
    /// Discriminator value identifying this subtype.
    pub key: String,
    /// Name of the discriminator column on the owning table.
    pub column: String,
    /// Package override; falls back to the owning table's package when
    /// absent.
    pub package: Option<String>,
    /// Raw ancestor classpath. When absent the subtype extends the owning
    /// table's base object.
    pub ancestor: Option<String>,
}

impl SubtypeDecl {
    /// Creates a new subtype declaration.
    #[must_use]
    pub fn new(
        class_name: impl Into<String>,
        key: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            key: key.into(),
            column: column.into(),
            package: None,
            ancestor: None,
        }
    }

    /// Returns the suffix of the `CLASSKEY_*` constant generated for this
    /// subtype on the owning table's map class.
    ///
    /// The schema key is upper-cased with non-alphanumeric characters
    /// mapped to `_`. A purely numeric key falls back to the upper-cased
    /// class name so the constant stays a legal identifier.
    #[must_use]
    pub fn constant_suffix(&self) -> String {
        let source = if !self.key.is_empty() && self.key.chars().all(|c| c.is_ascii_digit()) {
            &self.class_name
        } else {
            &self.key
        };

        source
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}
