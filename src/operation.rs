//! Operation trait and related types for fallback chains.
//!
//! An `Operation` is a niladic unit of work that either produces a value or
//! fails with an error. Operations are opaque to the executor: it only
//! observes whether invoking one succeeds or fails.

/// A niladic, fallible unit of work.
///
/// Any `FnMut() -> Result<R, E>` closure is an `Operation` via the blanket
/// impl below, so callers normally never implement this trait by hand.
///
/// # Type Parameters (associated)
/// - `Output`: the value produced on success
/// - `Error`: the failure produced otherwise
pub trait Operation {
    /// The value produced by a successful invocation.
    type Output;

    /// The failure produced by an unsuccessful invocation.
    type Error;

    /// Invoke the operation once.
    ///
    /// Whatever side effects the operation performs happen here; the
    /// executor never invokes an operation more than once per call.
    fn call(&mut self) -> Result<Self::Output, Self::Error>;
}

impl<F, R, E> Operation for F
where
    F: FnMut() -> Result<R, E>,
{
    type Output = R;
    type Error = E;

    fn call(&mut self) -> Result<R, E> {
        self()
    }
}

/// A boxed operation, for putting closures of different concrete types into
/// one ordered list.
///
/// Closures have distinct anonymous types, so a `Vec` of them needs type
/// erasure. `Box<dyn FnMut>` is itself `FnMut`, so boxed operations flow
/// through [`Operation`] like any other closure.
pub type BoxedOperation<'a, R, E> = Box<dyn FnMut() -> Result<R, E> + 'a>;

/// Box a closure as a [`BoxedOperation`].
///
/// Shorthand used by the [`fallback!`](crate::fallback) macro and handy when
/// building heterogeneous operation lists by hand.
pub fn boxed<'a, R, E>(operation: impl FnMut() -> Result<R, E> + 'a) -> BoxedOperation<'a, R, E> {
    Box::new(operation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_an_operation() {
        let mut op = || Ok::<u32, &str>(7);
        assert_eq!(op.call(), Ok(7));
    }

    #[test]
    fn fn_pointer_is_an_operation() {
        fn always_fails() -> Result<u32, &'static str> {
            Err("nope")
        }
        let mut op: fn() -> Result<u32, &'static str> = always_fails;
        assert_eq!(op.call(), Err("nope"));
    }

    #[test]
    fn boxed_operations_share_a_list() {
        let mut operations: Vec<BoxedOperation<u32, &str>> =
            vec![boxed(|| Err("down")), boxed(|| Ok(42))];
        assert_eq!(operations[0].call(), Err("down"));
        assert_eq!(operations[1].call(), Ok(42));
    }
}
