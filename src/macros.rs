//! The `fallback!` variadic shorthand.

/// Try the given operations in order, returning the first success.
///
/// Boxes each operation and calls [`execute`](crate::execute), so the
/// operations can be closures of different concrete types as long as they
/// agree on the success and error types.
///
/// ```
/// use fallback::fallback;
///
/// let result: Result<u32, _> = fallback!(
///     || "eleventy".parse::<u32>(),
///     || "110".parse::<u32>(),
/// );
/// assert_eq!(result.unwrap(), 110);
/// ```
#[macro_export]
macro_rules! fallback {
    ($($operation:expr),+ $(,)?) => {
        $crate::execute(::std::vec![
            $($crate::boxed($operation)),+
        ])
    };
}
