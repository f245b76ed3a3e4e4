//! Class-name formatting helpers.
//!
//! The object model uses backslash-separated classpaths
//! (e.g. `Bookstore\Base\Employee`); dot-separated package paths are
//! accepted as well.

/// Converts `snake_case` or `kebab-case` to `PascalCase`.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Returns the short class name of a classpath: the last backslash- or
/// dot-separated segment.
///
/// A path with no separators is returned unchanged; leading separators are
/// ignored (`\Acme\LegacyIntern` -> `LegacyIntern`).
#[must_use]
pub fn short_name(classpath: &str) -> &str {
    classpath
        .rsplit(['\\', '.'])
        .next()
        .unwrap_or(classpath)
}
