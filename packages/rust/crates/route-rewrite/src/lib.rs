#![allow(clippy::doc_markdown)]

//! route-rewrite - Featured-items filter tightening for route definitions
//!
//! Rewrites a server route file so that featured listings rely on the
//! strict `is_featured = 1` condition alone.
//!
//! # Rules (applied in order)
//!
//! 1. **strip-or-widening**: `is_featured = 1 OR` becomes `is_featured = 1`
//! 2. **drop-cast-check**: delete lines containing `CAST(is_featured AS TEXT)`
//! 3. **drop-coalesce-check**: delete lines containing `COALESCE(is_featured, 0) = 1`
//! 4. **drop-fallback-block**: delete the first `// Fallback:` block up to
//!    the next standalone `}`
//!
//! # Architecture
//!
//! ```text
//! route-rewrite/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── main.rs     # route-rewrite binary
//! ├── error.rs    # RewriteError enum (thiserror)
//! ├── types.rs    # RewriteResult, RuleOutcome, RewriteConfig
//! ├── rules.rs    # Rule definitions and the fixed rule order
//! ├── diff.rs     # Diff generation utilities
//! └── rewriter.rs # RouteRewriter implementation
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use route_rewrite::{RewriteConfig, RouteRewriter};
//!
//! let result = RouteRewriter::rewrite_file("server/routes.js", &RewriteConfig::default())?;
//! println!("{}", RouteRewriter::format_result(&result, Some("server/routes.js")));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod diff;
mod error;
mod rewriter;
mod rules;
mod types;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use error::RewriteError;
pub use rewriter::RouteRewriter;
pub use rules::{Rule, featured_rules};
pub use types::{DEFAULT_MAX_FILE_SIZE, RewriteConfig, RewriteResult, RuleOutcome};

// Re-export diff utility for external use
pub use diff::{generate_file_diff, generate_unified_diff};
