//! Naming conventions the comparison relies on.

/// Symbolic names starting with this prefix hold default values, not keys.
pub const DEFAULT_VALUE_PREFIX: &str = "DEFAULT_";

/// Text values ending with one of these are partial keys or file names, not keys.
pub const PARTIAL_KEY_SUFFIXES: &[&str] = &[".xml", ".", "-"];

/// Root element of a defaults document.
pub const DOCUMENT_ROOT: &str = "configuration";

/// Element wrapping a single document entry.
pub const DOCUMENT_PROPERTY: &str = "property";

/// Environment prefix for layered configuration overrides (`CONFDRIFT__...`).
pub const ENV_PREFIX: &str = "CONFDRIFT";
