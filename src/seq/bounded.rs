//! Combinators that end a traversal early, and the ones that count.
//!
//! `take`, `take_while`, `zip`, `zip_with` and `zip_more` stop their upstream
//! on their own. Each owns a [`Boundary`] for the traversal, so its own stop
//! is absorbed and only a stop requested further downstream is reported to
//! the caller. Nested bounded combinators each absorb exactly their own stop.
//!
//! `drop` and `drop_while` cannot skip ahead: they traverse every element and
//! forward the ones past the threshold. `take` then `drop` is not a slicing
//! window: `drop` counts within what `take` already let through.

use super::{Boundary, CONTINUE, STOP, Seq};
use crate::more::{More, MoreExt};

impl<T: 'static> Seq<T> {
    /// The first `count` elements.
    ///
    /// Stops the upstream right after the `count`-th element, so infinite
    /// sources are fine. `take(0)` never drives the upstream at all.
    ///
    /// ```rust
    /// use lazyseq::{Seq, seq};
    ///
    /// assert_eq!(seq![1, 2, 3].take(2).to_list(), vec![1, 2]);
    /// assert_eq!(seq![1, 2, 3].take(10).to_list(), vec![1, 2, 3]);
    /// assert_eq!(Seq::naturals().take(3).to_list(), vec![0, 1, 2]);
    /// ```
    pub fn take(&self, count: usize) -> Self {
        let upstream = self.clone();
        Self::new(move |sink| {
            if count == 0 {
                return CONTINUE;
            }
            let mut remaining = count;
            let mut boundary = Boundary::new();
            let _ = upstream.consume(|value| {
                boundary.forward(&mut *sink, value)?;
                remaining -= 1;
                if remaining == 0 {
                    trace_event!(count = count, "take: quota reached, stopping upstream");
                    STOP
                } else {
                    CONTINUE
                }
            });
            boundary.settle()
        })
    }

    /// The leading elements that satisfy `predicate`.
    ///
    /// The first element that fails is not emitted and ends the traversal.
    ///
    /// ```rust
    /// use lazyseq::Seq;
    ///
    /// let below_four = Seq::naturals().take_while(|n| *n < 4);
    /// assert_eq!(below_four.to_list(), vec![0, 1, 2, 3]);
    /// ```
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let upstream = self.clone();
        Self::new(move |sink| {
            let mut boundary = Boundary::new();
            let _ = upstream.consume(|value| {
                if predicate(&value) {
                    boundary.forward(&mut *sink, value)
                } else {
                    trace_event!("take_while: predicate failed, stopping upstream");
                    STOP
                }
            });
            boundary.settle()
        })
    }

    /// Every element after the first `count`.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let numbers = seq![1, 2, 3, 4, 5, 6];
    /// assert_eq!(numbers.drop(3).take(2).to_join_string(", "), "4, 5");
    /// // Composition order matters: drop counts inside what take let through.
    /// assert_eq!(numbers.take(2).drop(3).to_list(), Vec::<i32>::new());
    /// ```
    pub fn drop(&self, count: usize) -> Self {
        let upstream = self.clone();
        Self::new(move |sink| {
            let mut seen = 0;
            upstream.consume(|value| {
                if seen < count {
                    seen += 1;
                    CONTINUE
                } else {
                    sink(value)
                }
            })
        })
    }

    /// Every element from the first one that fails `predicate` on.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let rest = seq![1, 2, 5, 1, 7].drop_while(|x| *x < 3);
    /// assert_eq!(rest.to_list(), vec![5, 1, 7]);
    /// ```
    pub fn drop_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let upstream = self.clone();
        Self::new(move |sink| {
            let mut dropping = true;
            upstream.consume(|value| {
                if dropping && predicate(&value) {
                    return CONTINUE;
                }
                dropping = false;
                sink(value)
            })
        })
    }

    /// Pairs elements positionally with the items of a re-iterable source.
    ///
    /// Stops as soon as either side is exhausted. The partner is re-iterated
    /// from a fresh clone on every traversal.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let pairs = seq![1, 2, 3].zip(vec!['a', 'b']);
    /// assert_eq!(pairs.to_list(), vec![(1, 'a'), (2, 'b')]);
    /// ```
    pub fn zip<E, I>(&self, other: I) -> Seq<(T, E)>
    where
        E: 'static,
        I: IntoIterator<Item = E> + Clone + 'static,
    {
        self.zip_with(other, |value, partner| (value, partner))
    }

    /// Combines elements positionally with the items of a re-iterable source.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let labels = seq![1, 2, 3].zip_with(vec!['a', 'b', 'c'], |q, w| format!("{q}_{w}"));
    /// assert_eq!(labels.to_join_string(","), "1_a,2_b,3_c");
    /// ```
    pub fn zip_with<E, R, I, F>(&self, other: I, combine: F) -> Seq<R>
    where
        E: 'static,
        R: 'static,
        I: IntoIterator<Item = E> + Clone + 'static,
        F: Fn(T, E) -> R + 'static,
    {
        let upstream = self.clone();
        Seq::new(move |sink| {
            let mut partners = other.clone().into_iter().peekable();
            if partners.peek().is_none() {
                return CONTINUE;
            }
            let mut boundary = Boundary::new();
            let _ = upstream.consume(|value| {
                let Some(partner) = partners.next() else {
                    return STOP;
                };
                boundary.forward(&mut *sink, combine(value, partner))?;
                if partners.peek().is_none() {
                    trace_event!("zip: partner exhausted, stopping upstream");
                    STOP
                } else {
                    CONTINUE
                }
            });
            boundary.settle()
        })
    }

    /// Pairs elements with the values of a [`More`]-signaled source.
    ///
    /// The partner may be infinite: pairing ends when it answers
    /// `More::Exhausted` (or when `self` ends), so an unbounded sequence can
    /// be zipped against an unbounded generator without either needing a
    /// bound of its own.
    ///
    /// The partner is pulled, one signal per element, so it must be an
    /// iterator such as [`MoreExt::more`] returns. A push-style `Seq<More<E>>`
    /// from [`Seq::more`] cannot drive it directly; collect a finite prefix
    /// first (`partner.more().take(n).to_list()`).
    ///
    /// ```rust
    /// use lazyseq::{MoreExt, Seq};
    ///
    /// let letters = Seq::of_iter('a'..='z');
    /// let numbered = letters.zip_more(vec![10, 20].into_iter().more());
    /// assert_eq!(numbered.to_list(), vec![('a', 10), ('b', 20)]);
    /// ```
    pub fn zip_more<E, I>(&self, other: I) -> Seq<(T, E)>
    where
        E: 'static,
        I: IntoIterator<Item = More<E>> + Clone + 'static,
    {
        let upstream = self.clone();
        Seq::new(move |sink| {
            let mut signals = other.clone().into_iter();
            let mut boundary = Boundary::new();
            let _ = upstream.consume(|value| match signals.next() {
                Some(More::Present(partner)) => boundary.forward(&mut *sink, (value, partner)),
                Some(More::Exhausted) | None => {
                    trace_event!("zip_more: partner signaled exhaustion");
                    STOP
                }
            });
            boundary.settle()
        })
    }

    /// Wraps every element in `More::Present`, then emits `More::Exhausted`
    /// until the consumer stops.
    ///
    /// The result is infinite; bound it with `take`, `take_while` or a zip.
    ///
    /// ```rust
    /// use lazyseq::{More, seq};
    ///
    /// let signals = seq![1, 2].more().take(4).to_list();
    /// assert_eq!(
    ///     signals,
    ///     vec![More::Present(1), More::Present(2), More::Exhausted, More::Exhausted],
    /// );
    /// ```
    pub fn more(&self) -> Seq<More<T>> {
        let upstream = self.clone();
        Seq::new(move |sink| {
            upstream.consume(|value| sink(More::Present(value)))?;
            loop {
                sink(More::Exhausted)?;
            }
        })
    }

    /// Pairs every element with its zero-based index.
    ///
    /// Zips against the endless index generator `0..` wrapped in the
    /// [`More`] protocol; only `self` decides when pairing ends.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let indexed = seq!['a', 'b', 'c'].zip_with_index();
    /// assert_eq!(indexed.to_list(), vec![('a', 0), ('b', 1), ('c', 2)]);
    /// ```
    pub fn zip_with_index(&self) -> Seq<(T, usize)> {
        self.zip_more((0_usize..).more())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(pulls: &Rc<Cell<usize>>) -> Seq<i64> {
        let pulls = Rc::clone(pulls);
        Seq::naturals().peek(move |_| pulls.set(pulls.get() + 1))
    }

    #[rstest]
    fn test_take_zero_never_drives_upstream() {
        let pulls = Rc::new(Cell::new(0));
        assert!(counting(&pulls).take(0).to_list().is_empty());
        assert_eq!(pulls.get(), 0);
    }

    #[rstest]
    fn test_take_pulls_exactly_count() {
        let pulls = Rc::new(Cell::new(0));
        assert_eq!(counting(&pulls).take(3).to_list(), vec![0, 1, 2]);
        assert_eq!(pulls.get(), 3);
    }

    #[rstest]
    fn test_take_on_empty_is_empty() {
        assert!(Seq::<i32>::empty().take(5).to_list().is_empty());
    }

    #[rstest]
    fn test_nested_take_boundaries_are_independent() {
        let inner = seq![1, 2, 3].take(2);
        let combined = inner.concat(&seq![10, 20]).take(3);
        assert_eq!(combined.to_list(), vec![1, 2, 10]);
    }

    #[rstest]
    fn test_take_inside_flat_map_does_not_stop_outer() {
        let prefixes = seq![3, 2].flat_map(|n| Seq::naturals().take(n));
        assert_eq!(prefixes.to_list(), vec![0, 1, 2, 0, 1]);
    }

    #[rstest]
    fn test_take_while_excludes_failing_element() {
        let taken = seq![2, 4, 5, 6].take_while(|x| x % 2 == 0);
        assert_eq!(taken.to_list(), vec![2, 4]);
    }

    #[rstest]
    fn test_drop_traverses_everything() {
        let pulls = Rc::new(Cell::new(0));
        let dropped = counting(&pulls).take(5).drop(2);
        assert_eq!(dropped.to_list(), vec![2, 3, 4]);
        assert_eq!(pulls.get(), 5);
    }

    #[rstest]
    fn test_drop_while_only_skips_prefix() {
        let rest = seq![1, 1, 2, 1].drop_while(|x| *x == 1);
        assert_eq!(rest.to_list(), vec![2, 1]);
    }

    #[rstest]
    fn test_zip_truncates_to_shorter_partner() {
        let pairs = seq![1, 2, 3, 4].zip(vec!["a", "b"]);
        assert_eq!(pairs.to_list(), vec![(1, "a"), (2, "b")]);
    }

    #[rstest]
    fn test_zip_does_not_overpull_when_partner_runs_out() {
        let pulls = Rc::new(Cell::new(0));
        let pairs = counting(&pulls).zip(vec!['x', 'y']);
        assert_eq!(pairs.to_list(), vec![(0, 'x'), (1, 'y')]);
        assert_eq!(pulls.get(), 2);
    }

    #[rstest]
    fn test_zip_with_empty_partner() {
        let pulls = Rc::new(Cell::new(0));
        assert!(counting(&pulls).zip(Vec::<u8>::new()).to_list().is_empty());
        assert_eq!(pulls.get(), 0);
    }

    #[rstest]
    fn test_zip_more_infinite_against_infinite() {
        let pairs = Seq::naturals().zip_more((100_i64..).more()).take(2);
        assert_eq!(pairs.to_list(), vec![(0, 100), (1, 101)]);
    }

    #[rstest]
    fn test_more_then_zip_more_over_seq_partner() {
        let partner = seq!["x", "y"].more().take(10).to_list();
        let pairs = Seq::naturals().zip_more(partner);
        assert_eq!(pairs.to_list(), vec![(0, "x"), (1, "y")]);
    }

    #[rstest]
    fn test_zip_with_index_on_infinite_source() {
        let indexed = Seq::naturals().map(|n| n * 3).zip_with_index().take(3);
        assert_eq!(indexed.to_list(), vec![(0, 0), (3, 1), (6, 2)]);
    }
}
