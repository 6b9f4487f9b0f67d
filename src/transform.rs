//! Suffix arithmetic on callable names.
//!
//! These two operations produce the suggested names consumed by the rule
//! engine and handed on to the external rename collaborator.

/// Append the suffix to a name.
pub fn append_suffix(name: &str, suffix: &str) -> String {
    format!("{name}{suffix}")
}

/// Strip the trailing suffix from a name.
///
/// Precondition: `name` ends with `suffix`. The rule engine checks this
/// before calling. A violation is a caller bug and panics rather than
/// truncating an arbitrary tail off the name.
pub fn strip_suffix(name: &str, suffix: &str) -> String {
    match name.strip_suffix(suffix) {
        Some(stem) => stem.to_string(),
        None => panic!("strip_suffix: '{name}' does not end with '{suffix}'"),
    }
}
