#![deny(missing_docs)]

//! Fallback — sequential fallback execution for fallible operations.
//!
//! # Design Goals
//!
//! Fallback is focused on **one control-flow primitive**:
//!
//! - **First success wins**: operations are tried strictly in order and the
//!   first `Ok` is returned immediately, skipping everything after it
//! - **Last failure surfaces**: if every operation fails, the error of the
//!   *last* operation is re-signaled unchanged
//! - **Falsy is not failure**: success is decided by `Ok`/`Err` alone, so
//!   `Ok(false)`, `Ok(0)` and `Ok("")` are successes like any other
//!
//! # Core Concepts
//!
//! - [`Operation`]: a niladic unit of work, implemented by any
//!   `FnMut() -> Result<R, E>` closure
//! - [`execute`]: run an ordered list of operations, returning the first
//!   success or the last failure
//! - [`Chain`]: a non-empty-by-construction builder whose [`Chain::run`]
//!   also records an attempt-by-attempt [`ChainReport`]
//!
//! # Example
//!
//! ```
//! use fallback::fallback;
//!
//! let result: Result<u32, _> = fallback!(
//!     || "not a number".parse::<u32>(),
//!     || "7".parse::<u32>(),
//! );
//! assert_eq!(result.unwrap(), 7);
//! ```

// Modules
pub mod chain;
pub mod error;
mod macros;
pub mod operation;
pub mod report;

// Re-exports for convenience
pub use chain::{execute, Chain, ChainOutcome};
pub use error::ChainError;
pub use operation::{boxed, BoxedOperation, Operation};
pub use report::{AttemptRecord, AttemptStatus, ChainReport};

#[cfg(test)]
mod tests;
