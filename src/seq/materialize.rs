//! Combinators that need memory beyond the current element.
//!
//! `sort*`, `reverse` and `take_last` drain the whole upstream into a buffer
//! before emitting anything, so they never finish on an infinite sequence.
//! `distinct*` and `zip_with_next` stream, keeping only a seen-set or the
//! previous element. All buffers belong to a single traversal.

use std::cmp::Ordering;
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use super::{CONTINUE, Seq};

// =============================================================================
// Seen-set Hasher
// =============================================================================

#[cfg(feature = "fxhash")]
type SeenHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type SeenHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type SeenHasher = std::collections::hash_map::RandomState;

type SeenSet<K> = HashSet<K, SeenHasher>;

impl<T: 'static> Seq<T> {
    /// Drains the upstream, lets `arrange` reorder the buffer, then emits it.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn drain_then_emit<F>(&self, label: &'static str, arrange: F) -> Self
    where
        F: Fn(&mut Vec<T>) + 'static,
    {
        let upstream = self.clone();
        Self::new(move |sink| {
            let mut buffer = Vec::new();
            upstream.for_each(|value| buffer.push(value));
            arrange(&mut buffer);
            trace_event!(combinator = label, buffered = buffer.len(), "materialized upstream");
            for value in buffer {
                sink(value)?;
            }
            CONTINUE
        })
    }

    /// Elements in ascending natural order (stable).
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// assert_eq!(seq![3, 1, 2].sort().to_list(), vec![1, 2, 3]);
    /// ```
    pub fn sort(&self) -> Self
    where
        T: Ord,
    {
        self.drain_then_emit("sort", |buffer| buffer.sort())
    }

    /// Elements ordered by `comparator`.
    ///
    /// The sort is stable: elements the comparator considers equal keep
    /// their upstream order.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let by_length = seq!["ccc", "a", "bb", "d"].sort_by(|x, y| x.len().cmp(&y.len()));
    /// assert_eq!(by_length.to_list(), vec!["a", "d", "bb", "ccc"]);
    /// ```
    pub fn sort_by<C>(&self, comparator: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'static,
    {
        self.drain_then_emit("sort_by", move |buffer| buffer.sort_by(&comparator))
    }

    /// Elements ordered by a derived key (stable).
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let by_abs = seq![-3, 1, -2].sort_by_key(|x: &i32| x.abs());
    /// assert_eq!(by_abs.to_list(), vec![1, -2, -3]);
    /// ```
    pub fn sort_by_key<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.drain_then_emit("sort_by_key", move |buffer| buffer.sort_by_key(&key))
    }

    /// Elements ordered by comparing derived keys with `comparator` (stable).
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let descending = seq!["b", "c", "a"].sort_by_key_with(|s| s.to_string(), |x, y| y.cmp(x));
    /// assert_eq!(descending.to_list(), vec!["c", "b", "a"]);
    /// ```
    pub fn sort_by_key_with<K, F, C>(&self, key: F, comparator: C) -> Self
    where
        F: Fn(&T) -> K + 'static,
        C: Fn(&K, &K) -> Ordering + 'static,
    {
        self.sort_by(move |left, right| comparator(&key(left), &key(right)))
    }

    /// Elements in reverse order.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// assert_eq!(seq![1, 2, 3].reverse().to_list(), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&self) -> Self {
        self.drain_then_emit("reverse", |buffer| buffer.reverse())
    }

    /// The last `count` elements.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// assert_eq!(seq![1, 2, 3, 4].take_last(2).to_list(), vec![3, 4]);
    /// assert_eq!(seq![1, 2].take_last(5).to_list(), vec![1, 2]);
    /// ```
    pub fn take_last(&self, count: usize) -> Self {
        let upstream = self.clone();
        Self::new(move |sink| {
            if count == 0 {
                return CONTINUE;
            }
            let mut window = VecDeque::new();
            upstream.for_each(|value| {
                if window.len() == count {
                    window.pop_front();
                }
                window.push_back(value);
            });
            for value in window {
                sink(value)?;
            }
            CONTINUE
        })
    }

    /// First occurrence of every distinct element.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// assert_eq!(seq![1, 2, 1, 3, 2].distinct().to_list(), vec![1, 2, 3]);
    /// ```
    pub fn distinct(&self) -> Self
    where
        T: Hash + Eq + Clone,
    {
        self.distinct_by(T::clone)
    }

    /// First element for every distinct key.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let first_per_initial = seq!["apple", "avocado", "banana", "blueberry"]
    ///     .distinct_by(|s| s.chars().next());
    /// assert_eq!(first_per_initial.to_list(), vec!["apple", "banana"]);
    /// ```
    pub fn distinct_by<K, F>(&self, key: F) -> Self
    where
        K: Hash + Eq + 'static,
        F: Fn(&T) -> K + 'static,
    {
        let upstream = self.clone();
        Self::new(move |sink| {
            let mut seen = SeenSet::default();
            upstream.consume(|value| {
                if seen.insert(key(&value)) {
                    sink(value)
                } else {
                    CONTINUE
                }
            })
        })
    }

    /// Pairs every element with the one after it: `n - 1` pairs for `n`
    /// elements.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let steps = seq![1, 2, 3, 4, 5].zip_with_next();
    /// assert_eq!(steps.to_list(), vec![(1, 2), (2, 3), (3, 4), (4, 5)]);
    /// ```
    pub fn zip_with_next(&self) -> Seq<(T, T)>
    where
        T: Clone,
    {
        let upstream = self.clone();
        Seq::new(move |sink| {
            let mut previous: Option<T> = None;
            upstream.consume(|value| match previous.replace(value.clone()) {
                Some(before) => sink((before, value)),
                None => CONTINUE,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_sort_by_is_stable() {
        let records = seq![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let sorted = records.sort_by(|x, y| x.0.cmp(&y.0));
        assert_eq!(sorted.to_list(), vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[rstest]
    fn test_sort_then_take_stops_emission() {
        let sorted = seq![5, 4, 3, 2, 1].sort().take(2);
        assert_eq!(sorted.to_list(), vec![1, 2]);
    }

    #[rstest]
    fn test_reverse_twice_is_identity() {
        let numbers = seq![1, 2, 3, 4];
        assert_eq!(numbers.reverse().reverse().to_list(), numbers.to_list());
    }

    #[rstest]
    fn test_distinct_seen_set_is_per_traversal() {
        let unique = seq![1, 1, 2].distinct();
        assert_eq!(unique.to_list(), vec![1, 2]);
        assert_eq!(unique.to_list(), vec![1, 2]);
    }

    #[rstest]
    fn test_distinct_streams_over_infinite_source() {
        let residues = Seq::naturals().map(|n| n % 3).distinct().take(3);
        assert_eq!(residues.to_list(), vec![0, 1, 2]);
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![7], vec![])]
    #[case(vec![7, 8], vec![(7, 8)])]
    fn test_zip_with_next_short_inputs(
        #[case] input: Vec<i32>,
        #[case] expected: Vec<(i32, i32)>,
    ) {
        assert_eq!(Seq::of(input).zip_with_next().to_list(), expected);
    }

    #[rstest]
    #[case(3, vec![1, 2, 3])]
    #[case(usize::MAX, vec![1, 2, 3])]
    #[case(1 << 40, vec![1, 2, 3])]
    fn test_take_last_count_beyond_length(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(seq![1, 2, 3].take_last(count).to_list(), expected);
    }

    #[rstest]
    fn test_take_last_zero() {
        assert!(seq![1, 2, 3].take_last(0).to_list().is_empty());
    }
}
