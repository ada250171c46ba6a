//! Common types and operation builders for tests.
//!
//! This module contains:
//! - `FetchError`: the shared error type for all test operations
//! - `Calls`: a cloneable invocation counter
//! - Operation builders: `succeeds`, `fails`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Errors produced by the simulated config-fetch operations.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum FetchError {
    /// The source could not be reached.
    #[error("source unavailable: {0}")]
    Unavailable(String),

    /// The source answered with garbage.
    #[error("malformed payload")]
    Malformed,

    /// The source answered but the key was absent.
    #[error("missing key: {0}")]
    MissingKey(String),
}

/// Invocation counter shared between a test and the operations it builds.
#[derive(Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Build an operation that counts its invocations and returns `value`.
pub fn succeeds<R: Clone>(calls: &Calls, value: R) -> impl FnMut() -> Result<R, FetchError> {
    let calls = calls.clone();
    move || {
        calls.bump();
        Ok(value.clone())
    }
}

/// Build an operation that counts its invocations and fails with `error`.
pub fn fails<R>(calls: &Calls, error: FetchError) -> impl FnMut() -> Result<R, FetchError> {
    let calls = calls.clone();
    move || {
        calls.bump();
        Err(error.clone())
    }
}

pub fn unavailable(source: &str) -> FetchError {
    FetchError::Unavailable(source.to_owned())
}
