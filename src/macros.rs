//! Macros: the `seq!` literal constructor and the internal trace hook.

/// Builds a [`Seq`](crate::seq::Seq) from a literal list of elements.
///
/// `seq![a, b, c]` is shorthand for `Seq::of([a, b, c])`. The elements are
/// stored once and cloned into the visitor on every traversal, so the
/// element type must be `Clone`.
///
/// # Syntax
///
/// - `seq![]` - the empty sequence
/// - `seq![x, y, z]` - a sequence yielding `x`, `y`, `z`
///
/// # Examples
///
/// ```
/// use lazyseq::seq;
///
/// let numbers = seq![1, 2, 3];
/// assert_eq!(numbers.to_list(), vec![1, 2, 3]);
/// // Replaying the literal yields the same elements again.
/// assert_eq!(numbers.to_list(), vec![1, 2, 3]);
///
/// let nothing: lazyseq::Seq<i32> = seq![];
/// assert!(nothing.is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::seq::Seq::empty()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::seq::Seq::of([$($element),+])
    };
}

/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
///
/// Statement position only. Without the feature the arguments are not
/// evaluated.
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($argument)*);
        }
    };
}
