//! Core types for route rewriting.

use serde::Serialize;

/// Default input size ceiling. Unbounded: any text is accepted unless the
/// caller opts into a cap.
pub const DEFAULT_MAX_FILE_SIZE: u64 = u64::MAX;

/// How many times a single rule fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    /// Stable rule name, e.g. `drop-cast-check`.
    pub rule: &'static str,
    /// Replacements or deletions made by this rule.
    pub matches: usize,
}

/// Result of running the full rule sequence over one text.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteResult {
    /// Original content before modification.
    pub original: String,
    /// Content after all rules ran.
    pub modified: String,
    /// One entry per rule, in application order.
    pub outcomes: Vec<RuleOutcome>,
    /// Total matches across all rules.
    pub count: usize,
    /// Unified diff showing changes.
    pub diff: String,
}

impl RewriteResult {
    /// Whether any rule matched.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.count > 0
    }

    /// Matches recorded for the named rule, or 0 if it is unknown.
    #[must_use]
    pub fn matches_for(&self, rule: &str) -> usize {
        self.outcomes
            .iter()
            .find(|o| o.rule == rule)
            .map_or(0, |o| o.matches)
    }
}

/// Configuration for file rewrites.
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Maximum file size in bytes (default unbounded).
    pub max_file_size: u64,
    /// Compute the result without touching the file.
    pub dry_run: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            dry_run: false,
        }
    }
}
