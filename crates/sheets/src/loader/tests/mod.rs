//! Tests for sheet loading.
//!
//! Responsibilities:
//! - Test directory scanning with the lenient per-file failure policy.
//! - Test document parsing and schema validation.
//!
//! Invariants:
//! - Temporary directories are cleaned up automatically via `tempfile`.
