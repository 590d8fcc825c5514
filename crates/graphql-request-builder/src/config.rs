/// Rendering options of a [`QueryBuilder`](crate::QueryBuilder).
#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    /// Escape quotes, backslashes and control characters of string literals.
    /// Disabled by default, strings are then embedded as given.
    pub escape_strings: bool,
    /// Maximum nesting of selection sets and list or object literals.
    /// Unbounded by default.
    pub max_depth: Option<usize>,
}
