//! Recognizer configuration

/// Default bound on simultaneously active `Expr`/`Factor`/`Statement` procedures
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Largest nesting depth the recognizer runs with. Deeper limits are clamped
/// to this so that a run on a default-sized thread stack ends in
/// `DepthExceeded` rather than a stack overflow.
pub const MAX_SUPPORTED_DEPTH: usize = 512;

/// Settings for a parse run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognizerConfig {
    max_depth: usize,
}

impl RecognizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth, clamped to [`MAX_SUPPORTED_DEPTH`].
    ///
    /// Each active `Expr`, `Factor` or `Statement` procedure counts one level,
    /// so a parenthesized operand costs two.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_SUPPORTED_DEPTH);
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        assert_eq!(RecognizerConfig::new().max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_limit_is_clamped() {
        let config = RecognizerConfig::new().with_max_depth(usize::MAX);
        assert_eq!(config.max_depth(), MAX_SUPPORTED_DEPTH);

        let config = RecognizerConfig::new().with_max_depth(7);
        assert_eq!(config.max_depth(), 7);
    }
}
