/// Configuration options for the parser.
///
/// # Examples
///
/// ```rust
/// use tagser::{Parser, ParserOptions};
///
/// let parser = Parser::new(ParserOptions {
///     ignore_case: true,
///     ..Default::default()
/// });
/// let nodes = parser.parse("<row>cells</ROW>").unwrap();
/// assert_eq!(nodes[0].name(), "row");
/// ```
///
/// # Default
///
/// All options default to `false`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether close tags match their open tag regardless of ASCII case.
    ///
    /// Only the close-tag comparison is affected; node names keep the
    /// spelling of the open tag.
    ///
    /// # Default
    ///
    /// `false`
    pub ignore_case: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on syntax errors instead of returning them.
    ///
    /// Enabled only in test builds to produce backtraces on parse failures.
    pub panic_on_error: bool,
}
