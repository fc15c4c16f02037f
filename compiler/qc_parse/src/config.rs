//! Parser configuration.

use qc_stack::DEFAULT_MAX_DEPTH;

/// Knobs for a single parse.
///
/// ```
/// let config = qc_parse::ParserConfig::new().with_max_depth(64);
/// assert_eq!(config.max_depth(), 64);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParserConfig {
    max_depth: u32,
}

impl ParserConfig {
    pub fn new() -> Self {
        ParserConfig::default()
    }

    /// Maximum nesting of expressions and statements before the parse is
    /// rejected with a too-deep error.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
