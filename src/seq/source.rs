//! Sequence constructors.
//!
//! | Constructor | Source | Replayable |
//! |---|---|---|
//! | `empty` | nothing | yes |
//! | `unit` | one value | yes |
//! | `of` | a literal list, stored once | yes |
//! | `of_iter` | a cloneable `IntoIterator`, re-iterated per traversal | yes |
//! | `from_iterator` | a one-shot iterator | no: later traversals see what is left |
//! | `arithmetic_progression` / `naturals` | a [`Progression`] | yes |

use std::cell::RefCell;
use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::rc::Rc;

use super::{CONTINUE, Seq};

impl<T: 'static> Seq<T> {
    /// The sequence with no elements.
    #[inline]
    pub fn empty() -> Self {
        Self::new(|_| CONTINUE)
    }

    /// A single-element sequence.
    ///
    /// ```rust
    /// use lazyseq::Seq;
    ///
    /// assert_eq!(Seq::unit("only").to_list(), vec!["only"]);
    /// ```
    pub fn unit(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move |sink| sink(value.clone()))
    }

    /// A finite sequence over a literal list of elements.
    ///
    /// The elements are collected once at construction and cloned into the
    /// visitor on every traversal.
    ///
    /// ```rust
    /// use lazyseq::Seq;
    ///
    /// let numbers = Seq::of([1, 2, 3]);
    /// assert_eq!(numbers.to_list(), vec![1, 2, 3]);
    /// assert_eq!(numbers.to_list(), vec![1, 2, 3]);
    /// ```
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        let elements: Rc<[T]> = elements.into_iter().collect();
        Self::new(move |sink| {
            for element in &*elements {
                sink(element.clone())?;
            }
            CONTINUE
        })
    }

    /// Adapts a pull-based source that can be iterated more than once.
    ///
    /// Each traversal clones `source` and pulls from the fresh iterator until
    /// it is exhausted or the visitor stops. Infinite iterators are fine.
    ///
    /// ```rust
    /// use lazyseq::Seq;
    ///
    /// let evens = Seq::of_iter((0..).step_by(2));
    /// assert_eq!(evens.take(3).to_list(), vec![0, 2, 4]);
    /// assert_eq!(evens.take(2).to_list(), vec![0, 2]);
    /// ```
    pub fn of_iter<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'static,
    {
        Self::new(move |sink| {
            for element in source.clone() {
                sink(element)?;
            }
            CONTINUE
        })
    }

    /// Adapts a one-shot iterator.
    ///
    /// Pulls until the iterator is exhausted. The iterator is shared by
    /// every traversal: replaying the sequence resumes where the previous
    /// traversal left it, so once it is drained later traversals are empty.
    ///
    /// ```rust
    /// use lazyseq::Seq;
    ///
    /// let once = Seq::from_iterator(vec![1, 2, 3].into_iter());
    /// assert_eq!(once.take(1).to_list(), vec![1]);
    /// assert_eq!(once.to_list(), vec![2, 3]);
    /// assert!(once.to_list().is_empty());
    /// ```
    pub fn from_iterator<I>(iterator: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        let iterator = RefCell::new(iterator);
        Self::new(move |sink| {
            loop {
                // Released before the visitor runs; it may replay this sequence.
                let next = iterator.borrow_mut().next();
                match next {
                    Some(element) => sink(element)?,
                    None => return CONTINUE,
                }
            }
        })
    }
}

impl Seq<i64> {
    /// `start, start + step, start + 2 * step, ...` while strictly before
    /// `limit` in the direction of `step`.
    ///
    /// A zero `step` repeats `start` forever when `start < limit`.
    ///
    /// ```rust
    /// use lazyseq::Seq;
    ///
    /// assert_eq!(
    ///     Seq::arithmetic_progression(0, 1, 10).to_list(),
    ///     vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    /// );
    /// assert_eq!(Seq::arithmetic_progression(10, -4, 0).to_list(), vec![10, 6, 2]);
    /// ```
    pub fn arithmetic_progression(start: i64, step: i64, limit: i64) -> Self {
        Self::of_iter(Progression::new(start, step, limit))
    }

    /// `0, 1, 2, ...`, unbounded for practical purposes (stops at `i64::MAX`).
    pub fn naturals() -> Self {
        Self::of_iter(Progression::naturals())
    }

    /// `0, 1, ..., limit - 1`.
    pub fn naturals_below(limit: i64) -> Self {
        Self::arithmetic_progression(0, 1, limit)
    }
}

// =============================================================================
// Progression
// =============================================================================

/// Pull-based arithmetic progression with an exclusive limit.
///
/// Ends instead of overflowing `i64`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::seq::Progression;
///
/// let values: Vec<i64> = Progression::new(1, 3, 11).collect();
/// assert_eq!(values, vec![1, 4, 7, 10]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Progression {
    next: Option<i64>,
    step: i64,
    limit: i64,
}

impl Progression {
    /// A progression from `start` by `step`, stopping before `limit`.
    #[inline]
    pub const fn new(start: i64, step: i64, limit: i64) -> Self {
        Self {
            next: Some(start),
            step,
            limit,
        }
    }

    /// `0, 1, 2, ...` up to `i64::MAX` exclusive.
    #[inline]
    pub const fn naturals() -> Self {
        Self::new(0, 1, i64::MAX)
    }

    fn in_range(&self, value: i64) -> bool {
        match self.step.cmp(&0) {
            Ordering::Less => value > self.limit,
            Ordering::Equal | Ordering::Greater => value < self.limit,
        }
    }
}

impl Iterator for Progression {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.next?;
        if !self.in_range(current) {
            self.next = None;
            return None;
        }
        self.next = current.checked_add(self.step);
        Some(current)
    }
}

impl FusedIterator for Progression {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1, 5, vec![0, 1, 2, 3, 4])]
    #[case(0, 2, 5, vec![0, 2, 4])]
    #[case(5, 1, 5, vec![])]
    #[case(3, -1, 0, vec![3, 2, 1])]
    #[case(0, -1, 0, vec![])]
    fn test_progression_bounds(
        #[case] start: i64,
        #[case] step: i64,
        #[case] limit: i64,
        #[case] expected: Vec<i64>,
    ) {
        let values: Vec<i64> = Progression::new(start, step, limit).collect();
        assert_eq!(values, expected);
    }

    #[rstest]
    fn test_progression_stops_before_overflow() {
        let values: Vec<i64> = Progression::new(i64::MAX - 2, 2, i64::MAX).collect();
        assert_eq!(values, vec![i64::MAX - 2]);

        let values: Vec<i64> = Progression::new(i64::MIN + 1, -2, i64::MIN).collect();
        assert_eq!(values, vec![i64::MIN + 1]);
    }

    #[rstest]
    fn test_zero_step_repeats_start() {
        let values: Vec<i64> = Progression::new(7, 0, 8).take(3).collect();
        assert_eq!(values, vec![7, 7, 7]);
    }

    #[rstest]
    fn test_naturals_below() {
        assert_eq!(Seq::naturals_below(4).to_list(), vec![0, 1, 2, 3]);
        assert_eq!(Seq::naturals_below(0).to_list(), Vec::<i64>::new());
    }

    #[rstest]
    fn test_unit_and_empty() {
        assert_eq!(Seq::unit(5).to_list(), vec![5]);
        assert!(Seq::<i32>::empty().to_list().is_empty());
    }

    #[rstest]
    fn test_of_iter_replays_from_fresh_clone() {
        let source = vec![1, 2, 3];
        let sequence = Seq::of_iter(source);
        assert_eq!(sequence.to_list(), vec![1, 2, 3]);
        assert_eq!(sequence.to_list(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_from_iterator_is_one_shot() {
        let sequence = Seq::from_iterator(vec![1, 2, 3].into_iter());
        assert_eq!(sequence.to_list(), vec![1, 2, 3]);
        assert!(sequence.to_list().is_empty());
    }
}
