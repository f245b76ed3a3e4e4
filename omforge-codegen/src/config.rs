//! Generator configuration.

/// Configuration for stub generation.
///
/// Controls the optional class-level doc comment and the generated-on
/// stamp. The stamp is the only non-reproducible part of a generated stub;
/// it is off by default so repeated runs are byte-identical.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Emit the descriptive class-level doc block.
    pub add_class_level_comment: bool,

    /// Stamp the doc block with the generator version and a timestamp.
    pub add_timestamp: bool,

    /// Version string written by the stamp.
    pub version: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            add_class_level_comment: true,
            add_timestamp: false,
            version: format!("omforge {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl GeneratorConfig {
    /// Builder method to enable/disable the class-level comment.
    #[must_use]
    pub fn with_class_level_comment(mut self, enabled: bool) -> Self {
        self.add_class_level_comment = enabled;
        self
    }

    /// Builder method to enable/disable the generated-on stamp.
    #[must_use]
    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.add_timestamp = enabled;
        self
    }

    /// Builder method to set the stamped version string.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}
