//! Route rewriter implementation.
//!
//! Runs the featured-filter rules over a text and persists the result.

use std::fmt::Write as _;
use std::path::Path;

use tracing::{debug, info};

use crate::diff::{generate_file_diff, generate_unified_diff};
use crate::error::RewriteError;
use crate::rules::featured_rules;
use crate::types::{RewriteConfig, RewriteResult, RuleOutcome};

/// RouteRewriter - narrows featured-item filtering in route sources.
///
/// # Example
///
/// ```rust,ignore
/// use route_rewrite::RouteRewriter;
///
/// let result = RouteRewriter::rewrite("WHERE is_featured = 1 OR is_hot = 1");
/// assert_eq!(result.modified, "WHERE is_featured = 1 is_hot = 1");
/// ```
pub struct RouteRewriter;

impl RouteRewriter {
    /// Run every rule over `content`, in order.
    ///
    /// Each rule consumes the previous rule's output. Content that matches
    /// nothing comes back unchanged with `count == 0`.
    #[must_use]
    pub fn rewrite(content: &str) -> RewriteResult {
        let mut modified = content.to_string();
        let mut outcomes = Vec::new();

        for rule in featured_rules() {
            let (next, matches) = rule.apply(&modified);
            debug!(rule = rule.name(), matches, "applied rule");
            modified = next;
            outcomes.push(RuleOutcome {
                rule: rule.name(),
                matches,
            });
        }

        let count = outcomes.iter().map(|o| o.matches).sum();
        let diff = if count == 0 {
            String::new()
        } else {
            generate_unified_diff(content, &modified)
        };

        RewriteResult {
            original: content.to_string(),
            modified,
            outcomes,
            count,
            diff,
        }
    }

    /// Rewrite a file.
    ///
    /// The whole file is read before any rule runs. Unless `config.dry_run`
    /// is set, it is then overwritten exactly once, even when no rule matched,
    /// so an unwritable target always surfaces as `RewriteError::Write`.
    pub fn rewrite_file<P: AsRef<Path>>(
        path: P,
        config: &RewriteConfig,
    ) -> Result<RewriteResult, RewriteError> {
        let path = path.as_ref();
        let content = route_io::read_text_safe(path, config.max_file_size)?;

        let mut result = Self::rewrite(&content);
        if result.is_changed() {
            result.diff =
                generate_file_diff(&path.to_string_lossy(), &result.original, &result.modified);
        }

        if config.dry_run {
            debug!(path = %path.display(), changes = result.count, "dry run, file left as is");
            return Ok(result);
        }

        route_io::write_text(path, &result.modified).map_err(|source| RewriteError::Write {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        info!(path = %path.display(), changes = result.count, "rewrote route file");

        Ok(result)
    }

    /// Preview the rewrite (no file modification).
    pub fn preview<P: AsRef<Path>>(path: P) -> Result<RewriteResult, RewriteError> {
        Self::rewrite_file(
            path,
            &RewriteConfig {
                dry_run: true,
                ..Default::default()
            },
        )
    }

    /// Apply the rewrite in place.
    ///
    /// **Use with caution** - no backup is made.
    pub fn apply<P: AsRef<Path>>(path: P) -> Result<RewriteResult, RewriteError> {
        Self::rewrite_file(path, &RewriteConfig::default())
    }

    /// Format a rewrite result for display.
    ///
    /// Lists every rule that fired, then the diff.
    #[must_use]
    pub fn format_result(result: &RewriteResult, path: Option<&str>) -> String {
        let mut output = String::new();

        if let Some(p) = path {
            let _ = writeln!(output, "// REWRITE: {p}");
        }
        let _ = writeln!(output, "// Changes: {}", result.count);

        if !result.is_changed() {
            output.push_str("[No matches found]\n");
            return output;
        }

        output.push_str("\n// Rules:\n");
        for outcome in result.outcomes.iter().filter(|o| o.matches > 0) {
            let _ = writeln!(output, "{}: {}", outcome.rule, outcome.matches);
        }

        output.push_str("\n// Diff:\n");
        output.push_str(&result.diff);

        output
    }
}
