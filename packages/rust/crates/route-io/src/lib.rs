#![allow(clippy::doc_markdown)]

//! route-io - Safe whole-file text I/O for in-place rewriting
//!
//! Reads a file fully into memory with size and binary checks, and writes
//! the rewritten text back to the same path.
//!
//! # Features
//!
//! - **Safety**: Binary detection & Size limits
//! - **Byte-faithful**: Strict UTF-8 decoding, so write-back never alters
//!   bytes the caller did not touch
//!
//! # Architecture
//!
//! ```text
//! route-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── detect.rs   # Binary detection & decoding
//! └── sync.rs     # Read / write API
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use route_io::{read_text_safe, write_text};
//!
//! let content = read_text_safe("routes.js", 1024 * 1024)?;
//! write_text("routes.js", &content)?;
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod detect;
mod error;
mod sync;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use error::IoError;
pub use sync::{read_text_safe, write_text};

// Re-export detection utilities for advanced use
pub use detect::{decode_buffer, is_binary};
