//! Diff generation utilities.
//!
//! Unified diff output for dry runs, built on the `similar` crate.

use similar::TextDiff;

/// Lines of unchanged context around each hunk.
const CONTEXT_LINES: usize = 3;

/// Generate a unified diff between two strings.
///
/// Hunks carry `@@ -a,b +c,d @@` headers and `+`/`-`/` ` line prefixes.
/// Identical inputs yield an empty string.
#[must_use]
pub fn generate_unified_diff(original: &str, modified: &str) -> String {
    render(original, modified, None)
}

/// Generate a unified diff for a file, headed by `--- a/<path>` and
/// `+++ b/<path>` so it can be fed to `patch -p1` or `git apply`.
#[must_use]
pub fn generate_file_diff(path: &str, original: &str, modified: &str) -> String {
    let old = format!("a/{path}");
    let new = format!("b/{path}");
    render(original, modified, Some((old.as_str(), new.as_str())))
}

fn render(original: &str, modified: &str, header: Option<(&str, &str)>) -> String {
    if original == modified {
        return String::new();
    }

    let diff = TextDiff::from_lines(original, modified);
    let mut unified = diff.unified_diff();
    unified.context_radius(CONTEXT_LINES);
    if let Some((old, new)) = header {
        unified.header(old, new);
    }
    unified.to_string()
}
