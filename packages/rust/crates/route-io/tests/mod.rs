//! Tests for route-io crate.
//!
//! Integration tests for safe file I/O operations.
