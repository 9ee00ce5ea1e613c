//! Tests for rewriter module - RouteRewriter over realistic route text.

use std::fs;
use tempfile::TempDir;

use route_rewrite::{RewriteConfig, RewriteError, RouteRewriter};

const TOP_PICKS_ROUTE: &str = r#"router.get('/api/products/page/:page', async (req, res) => {
  const ucQuery = `
    SELECT * FROM unified_content
    WHERE (
      is_featured = 1 OR is_hot = 1
      OR CAST(is_featured AS TEXT) IN ('1','true','yes')
      OR COALESCE(is_featured, 0) = 1
    )
    ORDER BY created_at DESC
  `;
  let products = sqliteDb.prepare(ucQuery).all();
  // Fallback: If top picks return empty, broaden selection
  if (products.length === 0) {
    products = sqliteDb.prepare(broadQuery).all();
  }
  res.json(products);
});
"#;

const TOP_PICKS_EXPECTED: &str = r#"router.get('/api/products/page/:page', async (req, res) => {
  const ucQuery = `
    SELECT * FROM unified_content
    WHERE (
      is_featured = 1 is_hot = 1
    )
    ORDER BY created_at DESC
  `;
  let products = sqliteDb.prepare(ucQuery).all();
  
  res.json(products);
});
"#;

fn write_route(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("routes.js");
    fs::write(&path, content).expect("Write route file");
    path
}

#[test]
fn test_full_route_rewrite() {
    let result = RouteRewriter::rewrite(TOP_PICKS_ROUTE);

    assert_eq!(result.modified, TOP_PICKS_EXPECTED);
    assert_eq!(result.count, 4);
    for rule in [
        "strip-or-widening",
        "drop-cast-check",
        "drop-coalesce-check",
        "drop-fallback-block",
    ] {
        assert_eq!(result.matches_for(rule), 1, "{rule}");
    }
}

#[test]
fn test_rewrite_is_idempotent() {
    let once = RouteRewriter::rewrite(TOP_PICKS_ROUTE);
    let twice = RouteRewriter::rewrite(&once.modified);

    assert_eq!(twice.count, 0);
    assert_eq!(twice.modified, once.modified);
}

#[test]
fn test_fallback_example_block() {
    let content = "const a = 1;\n// Fallback: broaden search\nif (results.length === 0) {\n  results = getAllFeatured();\n}\nconst b = 2;\n";
    let result = RouteRewriter::rewrite(content);

    assert_eq!(result.modified, "const a = 1;\n\nconst b = 2;\n");
}

#[test]
fn test_other_lines_untouched_by_line_deletes() {
    let content = "one\nOR CAST(is_featured AS TEXT) = '1'\ntwo\nWHERE COALESCE(is_featured , 0) = 1\nthree\n";
    let result = RouteRewriter::rewrite(content);

    assert_eq!(result.modified, "one\ntwo\nthree\n");
}

#[test]
fn test_crlf_line_endings() {
    let content = "a\r\nOR CAST(is_featured AS TEXT) = '1'\r\nb\r\n";
    let result = RouteRewriter::rewrite(content);

    assert_eq!(result.modified, "a\r\nb\r\n");
}

#[test]
fn test_apply_writes_file() {
    let dir = TempDir::new().expect("Create temp dir");
    let path = write_route(&dir, TOP_PICKS_ROUTE);

    let result = RouteRewriter::apply(&path).expect("Should apply");

    assert!(result.is_changed());
    assert_eq!(fs::read_to_string(&path).expect("Read file"), TOP_PICKS_EXPECTED);
}

#[test]
fn test_preview_leaves_file() {
    let dir = TempDir::new().expect("Create temp dir");
    let path = write_route(&dir, TOP_PICKS_ROUTE);

    let result = RouteRewriter::preview(&path).expect("Should preview");

    assert_eq!(result.modified, TOP_PICKS_EXPECTED);
    assert!(result.diff.contains("-      OR CAST(is_featured AS TEXT)"));
    assert!(result.diff.contains("@@ -"));
    assert_eq!(fs::read_to_string(&path).expect("Read file"), TOP_PICKS_ROUTE);
}

#[test]
fn test_unmatched_file_is_byte_identical() {
    let dir = TempDir::new().expect("Create temp dir");
    let content = "app.get('/api/health', ok);\n// no fallback here\n";
    let path = write_route(&dir, content);

    let result = RouteRewriter::apply(&path).expect("Should apply");

    assert!(!result.is_changed());
    assert_eq!(fs::read(&path).expect("Read file"), content.as_bytes());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().expect("Create temp dir");
    let result = RouteRewriter::apply(dir.path().join("absent.js"));

    assert!(matches!(result, Err(RewriteError::Io(_))));
}

#[test]
fn test_size_limit_respected() {
    let dir = TempDir::new().expect("Create temp dir");
    let path = write_route(&dir, TOP_PICKS_ROUTE);
    let config = RewriteConfig {
        max_file_size: 16,
        ..Default::default()
    };

    let result = RouteRewriter::rewrite_file(&path, &config);

    assert!(matches!(result, Err(RewriteError::Io(_))));
    assert_eq!(fs::read_to_string(&path).expect("Read file"), TOP_PICKS_ROUTE);
}

#[test]
fn test_large_file_accepted_by_default() {
    let dir = TempDir::new().expect("Create temp dir");
    let mut content = "// padding line for a long route file\n".repeat(40_000);
    content.push_str("WHERE is_featured = 1 OR is_hot = 1\n");
    assert!(content.len() > 1024 * 1024);
    let path = write_route(&dir, &content);

    let result = RouteRewriter::apply(&path).expect("Should apply");

    assert_eq!(result.matches_for("strip-or-widening"), 1);
    let written = fs::read_to_string(&path).expect("Read file");
    assert!(!written.contains("is_featured = 1 OR"));
    assert!(written.ends_with("WHERE is_featured = 1 is_hot = 1\n"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_unwritable_file_without_matches_fails() {
    // Readable, never writable, and free of featured-filter patterns.
    let result = RouteRewriter::apply("/proc/version");

    assert!(matches!(result, Err(RewriteError::Write { .. })));
}

#[test]
fn test_file_diff_is_headed_by_path() {
    let dir = TempDir::new().expect("Create temp dir");
    let path = write_route(&dir, TOP_PICKS_ROUTE);

    let result = RouteRewriter::preview(&path).expect("Should preview");

    assert!(result.diff.starts_with("--- a/"));
    assert!(result.diff.contains("routes.js\n+++ b/"));
}
