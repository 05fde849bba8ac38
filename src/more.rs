//! More signal - "a value is present" versus "the source is exhausted".
//!
//! `More<T>` lets a source that never stops on its own (for example an
//! infinite index generator) tell a consumer when the values it carries have
//! run out. A signaled source keeps answering `Exhausted` after its last
//! `Present` value, so the *consumer* decides when to stop pulling.
//!
//! - [`More`]: the two-variant signal
//! - [`MoreSignal`]: an iterator adapter that turns any iterator into an
//!   endless stream of `More` values
//! - [`MoreExt`]: the `.more()` extension method for iterators
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::{More, MoreExt};
//!
//! let mut signals = vec![1, 2].into_iter().more();
//! assert_eq!(signals.next(), Some(More::Present(1)));
//! assert_eq!(signals.next(), Some(More::Present(2)));
//! assert_eq!(signals.next(), Some(More::Exhausted));
//! assert_eq!(signals.next(), Some(More::Exhausted));
//! ```

use std::iter::FusedIterator;

/// Presence signal carried by an otherwise unbounded source.
///
/// # Examples
///
/// ```rust
/// use lazyseq::More;
///
/// let present = More::Present(21).map(|x| x * 2);
/// assert_eq!(present.get_or(0), 42);
///
/// let exhausted: More<i32> = More::Exhausted;
/// assert_eq!(exhausted.get_or(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum More<T> {
    /// The source produced a value.
    Present(T),
    /// The source has no more values.
    Exhausted,
}

impl<T> More<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this carries a value.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if the source is exhausted.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option`, consuming the signal.
    #[inline]
    pub fn present(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Exhausted => None,
        }
    }

    /// Returns the carried value, or `default` when exhausted.
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Exhausted => default,
        }
    }

    /// Borrows the carried value.
    ///
    /// ```rust
    /// use lazyseq::More;
    ///
    /// let signal = More::Present("text".to_string());
    /// assert_eq!(signal.as_ref().map(|s| s.len()), More::Present(4));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> More<&T> {
        match self {
            Self::Present(value) => More::Present(value),
            Self::Exhausted => More::Exhausted,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a present value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> More<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => More::Present(function(value)),
            Self::Exhausted => More::Exhausted,
        }
    }

    /// Keeps a present value only if it satisfies `predicate`.
    ///
    /// ```rust
    /// use lazyseq::More;
    ///
    /// assert_eq!(More::Present(4).filter(|x| x % 2 == 0), More::Present(4));
    /// assert_eq!(More::Present(3).filter(|x| x % 2 == 0), More::Exhausted);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Exhausted,
        }
    }

    /// Runs `action` on a present value and returns the signal unchanged.
    #[inline]
    pub fn peek<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            action(value);
        }
        self
    }

    /// Returns `self` if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Exhausted => other,
        }
    }

    /// Returns `self` if present, otherwise the result of `supplier`.
    #[inline]
    pub fn or_else<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Exhausted => supplier(),
        }
    }
}

impl<T> From<Option<T>> for More<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Exhausted, Self::Present)
    }
}

impl<T> From<More<T>> for Option<T> {
    #[inline]
    fn from(more: More<T>) -> Self {
        more.present()
    }
}

// =============================================================================
// Iterator Adapter
// =============================================================================

/// Endless iterator of [`More`] values built from a finite or infinite iterator.
///
/// Yields `Present(x)` for each item of the inner iterator, then `Exhausted`
/// forever. `next` never returns `None`.
#[derive(Debug, Clone)]
pub struct MoreSignal<I> {
    inner: Option<I>,
}

impl<I: Iterator> MoreSignal<I> {
    /// Wraps `inner`.
    #[inline]
    pub const fn new(inner: I) -> Self {
        Self { inner: Some(inner) }
    }
}

impl<I: Iterator> Iterator for MoreSignal<I> {
    type Item = More<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(inner) = self.inner.as_mut() else {
            return Some(More::Exhausted);
        };
        match inner.next() {
            Some(value) => Some(More::Present(value)),
            None => {
                self.inner = None;
                Some(More::Exhausted)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<I: Iterator> FusedIterator for MoreSignal<I> {}

/// Extension trait adding [`more`](MoreExt::more) to every iterator.
pub trait MoreExt: Iterator + Sized {
    /// Wraps the iterator in the [`More`] exhaustion protocol.
    ///
    /// ```rust
    /// use lazyseq::{More, MoreExt};
    ///
    /// let signals: Vec<More<usize>> = (0..1).more().take(3).collect();
    /// assert_eq!(signals, vec![More::Present(0), More::Exhausted, More::Exhausted]);
    /// ```
    #[inline]
    fn more(self) -> MoreSignal<Self> {
        MoreSignal::new(self)
    }
}

impl<I: Iterator> MoreExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_more_option_conversion() {
        assert_eq!(More::from(Some(3)), More::Present(3));
        assert_eq!(More::<i32>::from(None), More::Exhausted);
        assert_eq!(Option::from(More::Present(3)), Some(3));
        assert_eq!(Option::<i32>::from(More::Exhausted), None);
    }

    #[rstest]
    fn test_more_or_prefers_present() {
        assert_eq!(More::Present(1).or(More::Present(2)), More::Present(1));
        assert_eq!(More::Exhausted.or(More::Present(2)), More::Present(2));
        assert_eq!(More::<i32>::Exhausted.or_else(|| More::Exhausted), More::Exhausted);
    }

    #[rstest]
    fn test_more_signal_stays_exhausted() {
        let mut signals = std::iter::empty::<i32>().more();
        for _ in 0..5 {
            assert_eq!(signals.next(), Some(More::Exhausted));
        }
    }

    #[rstest]
    fn test_more_peek_only_sees_present() {
        let mut seen = Vec::new();
        let _ = More::Present(7).peek(|x| seen.push(*x));
        let _ = More::<i32>::Exhausted.peek(|x| seen.push(*x));
        assert_eq!(seen, vec![7]);
    }
}
