//! The fallback executor: `execute` and the `Chain` builder.
//!
//! Both run an ordered list of operations strictly left to right, return
//! the first success, and surface the last failure when everything fails.
//! `execute` is the bare primitive; `Chain` is non-empty by construction
//! and additionally records an attempt report.

use crate::error::ChainError;
use crate::operation::{BoxedOperation, Operation};
use crate::report::{AttemptStatus, ChainReport};

/// Try operations in order until one succeeds.
///
/// Operations are invoked strictly in the order given, each at most once.
/// The first `Ok` is returned immediately and no later operation is
/// invoked. If every operation fails, the error of the *last* operation is
/// surfaced unchanged inside [`ChainError::Exhausted`]; earlier failures
/// are discarded. An empty list fails with [`ChainError::NoOperations`]
/// without invoking anything.
///
/// Success is decided solely by `Ok`/`Err`: `Ok(false)`, `Ok(0)` and other
/// "empty" values are successes and are returned as-is.
///
/// Homogeneous operations (e.g. fn pointers) can be passed directly; mixed
/// closures go through [`boxed`](crate::boxed) or the
/// [`fallback!`](crate::fallback) macro:
///
/// ```
/// use fallback::{boxed, execute};
///
/// let value = execute(vec![
///     boxed(|| Err::<u32, &str>("primary down")),
///     boxed(|| Ok(40 + 2)),
/// ]);
/// assert_eq!(value, Ok(42));
/// ```
pub fn execute<I, Op>(operations: I) -> Result<Op::Output, ChainError<Op::Error>>
where
    I: IntoIterator<Item = Op>,
    Op: Operation,
{
    let mut last_error = None;

    for mut operation in operations {
        match operation.call() {
            Ok(value) => return Ok(value),
            Err(e) => last_error = Some(e),
        }
    }

    match last_error {
        Some(error) => Err(ChainError::Exhausted(error)),
        None => Err(ChainError::NoOperations),
    }
}

/// Outcome of running a [`Chain`].
///
/// Carries the value or the last error together with the [`ChainReport`]
/// describing what was attempted.
#[derive(Debug)]
pub enum ChainOutcome<R, E> {
    /// An operation succeeded; later operations were not invoked.
    Succeeded {
        /// The successful operation's value, unchanged.
        value: R,
        /// What was attempted up to and including the success.
        report: ChainReport,
    },
    /// Every operation failed.
    Exhausted {
        /// The last operation's error, unchanged.
        error: E,
        /// One failed attempt per operation.
        report: ChainReport,
    },
}

impl<R, E> ChainOutcome<R, E> {
    /// Returns `true` if an operation succeeded.
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// Returns `true` if every operation failed.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }

    /// Get the attempt report for this run.
    pub fn report(&self) -> &ChainReport {
        match self {
            Self::Succeeded { report, .. } => report,
            Self::Exhausted { report, .. } => report,
        }
    }

    /// Get the successful value, if any.
    pub fn value(&self) -> Option<&R> {
        match self {
            Self::Succeeded { value, .. } => Some(value),
            Self::Exhausted { .. } => None,
        }
    }

    /// Get the last error, if every operation failed.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Succeeded { .. } => None,
            Self::Exhausted { error, .. } => Some(error),
        }
    }

    /// Discard the report and return the plain result.
    pub fn into_result(self) -> Result<R, E> {
        match self {
            Self::Succeeded { value, .. } => Ok(value),
            Self::Exhausted { error, .. } => Err(error),
        }
    }
}

/// An ordered fallback chain, non-empty by construction.
///
/// [`Chain::first`] requires the first operation up front, so an empty
/// chain cannot be built and [`Chain::run`] always has a last error to
/// surface when everything fails. For runtime-sized lists (which may be
/// empty) use [`execute`] instead.
///
/// ```
/// use fallback::Chain;
///
/// let outcome = Chain::first(|| Err::<u32, &str>("primary down"))
///     .or_else(|| Ok(42))
///     .run();
/// assert_eq!(outcome.into_result(), Ok(42));
/// ```
pub struct Chain<'a, R, E> {
    first: BoxedOperation<'a, R, E>,
    rest: Vec<BoxedOperation<'a, R, E>>,
}

impl<'a, R, E> Chain<'a, R, E> {
    /// Start a chain with its first (primary) operation.
    pub fn first(operation: impl FnMut() -> Result<R, E> + 'a) -> Self {
        Self {
            first: Box::new(operation),
            rest: Vec::new(),
        }
    }

    /// Append a fallback operation, tried only if everything before it
    /// failed.
    pub fn or_else(mut self, operation: impl FnMut() -> Result<R, E> + 'a) -> Self {
        self.rest.push(Box::new(operation));
        self
    }

    /// Number of operations in the chain.
    pub fn operation_count(&self) -> usize {
        1 + self.rest.len()
    }

    /// Run the chain.
    ///
    /// Same semantics as [`execute`], with an [`AttemptRecord`] captured
    /// for every invoked operation.
    ///
    /// [`AttemptRecord`]: crate::report::AttemptRecord
    pub fn run(self) -> ChainOutcome<R, E> {
        let Chain { mut first, rest } = self;
        let mut report = ChainReport::new();
        report.mark_started();

        let mut last_error = match Self::attempt(&mut report, 0, &mut first) {
            Ok(value) => return ChainOutcome::Succeeded { value, report },
            Err(e) => e,
        };

        for (offset, mut operation) in rest.into_iter().enumerate() {
            match Self::attempt(&mut report, offset + 1, &mut operation) {
                Ok(value) => return ChainOutcome::Succeeded { value, report },
                Err(e) => last_error = e,
            }
        }

        ChainOutcome::Exhausted {
            error: last_error,
            report,
        }
    }

    fn attempt(
        report: &mut ChainReport,
        index: usize,
        operation: &mut BoxedOperation<'a, R, E>,
    ) -> Result<R, E> {
        report.record_attempt_start(index);

        #[cfg(feature = "tracing")]
        tracing::info!(attempt = index, "attempt.start");

        match operation.call() {
            Ok(value) => {
                report.record_attempt_end(AttemptStatus::Succeeded);

                #[cfg(feature = "tracing")]
                tracing::info!(attempt = index, outcome = "succeeded", "attempt.end");

                Ok(value)
            }
            Err(e) => {
                report.record_attempt_end(AttemptStatus::Failed);

                #[cfg(feature = "tracing")]
                tracing::warn!(attempt = index, outcome = "failed", "attempt.end");

                Err(e)
            }
        }
    }
}
