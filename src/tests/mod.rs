//! Tests for the sequential fallback executor.
//!
//! ## Test Organization
//!
//! - `common`: Shared error type, invocation counters, and operation
//!   builders
//! - `basic`: Success paths, short-circuiting, and "falsy" results
//! - `exhaustion`: All-fail and empty-input behavior
//! - `ordering`: Left-to-right evaluation and at-most-once invocation
//! - `chain`: The `Chain` builder and its attempt reports
//!
//! ## Test Fixtures
//!
//! All tests use a "config fetch" domain: operations simulate reading a
//! value from a primary source, a mirror, or a built-in default, and either
//! return the value or fail with a `FetchError`. Each operation carries an
//! invocation counter so short-circuiting can be asserted.

mod common;
