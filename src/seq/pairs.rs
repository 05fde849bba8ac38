//! Operations on sequences of pairs.
//!
//! A `Seq<(A, B)>` plays the part of a two-column sequence: the element
//! combinators see the pair as a whole, these see its halves.

use std::collections::HashMap;
use std::hash::Hash;

use super::Seq;

impl<A: 'static, B: 'static> Seq<(A, B)> {
    /// Maps both halves independently.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let pairs = seq![(1, "a"), (2, "b")].bimap(|n| n * 10, |s| s.to_uppercase());
    /// assert_eq!(pairs.to_list(), vec![(10, "A".to_string()), (20, "B".to_string())]);
    /// ```
    pub fn bimap<C, D, F, G>(&self, first: F, second: G) -> Seq<(C, D)>
    where
        C: 'static,
        D: 'static,
        F: Fn(A) -> C + 'static,
        G: Fn(B) -> D + 'static,
    {
        self.map(move |(left, right)| (first(left), second(right)))
    }

    /// Combines the halves of every pair.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let sums = seq![1, 2, 3].zip(vec![10, 20, 30]).map_pair(|a, b| a + b);
    /// assert_eq!(sums.to_list(), vec![11, 22, 33]);
    /// ```
    pub fn map_pair<R, F>(&self, function: F) -> Seq<R>
    where
        R: 'static,
        F: Fn(A, B) -> R + 'static,
    {
        self.map(move |(left, right)| function(left, right))
    }

    /// Collects the pairs into a map keyed by the first half. A later pair
    /// replaces an earlier one with the same key.
    pub fn to_pair_map(&self) -> HashMap<A, B>
    where
        A: Hash + Eq,
    {
        self.to_map_with(|(key, value), map| {
            map.insert(key, value);
        })
    }

    /// Splits the pairs into two lists.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let (numbers, letters) = seq![(1, 'a'), (2, 'b')].unzip();
    /// assert_eq!(numbers, vec![1, 2]);
    /// assert_eq!(letters, vec!['a', 'b']);
    /// ```
    pub fn unzip(&self) -> (Vec<A>, Vec<B>) {
        let mut lefts = Vec::new();
        let mut rights = Vec::new();
        self.for_each(|(left, right)| {
            lefts.push(left);
            rights.push(right);
        });
        (lefts, rights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_to_pair_map_last_write_wins() {
        let map = seq![("a", 1), ("b", 2), ("a", 3)].to_pair_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], 3);
    }

    #[rstest]
    fn test_unzip_of_zip_restores_inputs() {
        let (left, right) = seq![1, 2, 3].zip(vec!["x", "y", "z"]).unzip();
        assert_eq!(left, vec![1, 2, 3]);
        assert_eq!(right, vec!["x", "y", "z"]);
    }

    #[rstest]
    fn test_bimap_on_infinite_pairs() {
        let pairs = Seq::naturals()
            .zip_with_index()
            .bimap(|n| n * 2, |i| i + 1)
            .take(2);
        assert_eq!(pairs.to_list(), vec![(0, 1), (2, 2)]);
    }
}
