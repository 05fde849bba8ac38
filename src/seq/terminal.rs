//! Terminal operations: the ones that drive a sequence and return a value.
//!
//! # Short-circuiting
//!
//! | Operation | Stops early | Finishes on an infinite sequence |
//! |---|---|---|
//! | `head`, `is_empty` | after the first element | yes |
//! | `find_first`, `any_match` | at the first match | if a match exists |
//! | `all_match`, `none_match` | at the first counterexample | if one exists |
//! | `try_fold`, `try_for_each` | at the first `Err` | if an `Err` occurs |
//! | everything else | never | no |

use std::collections::{HashMap, HashSet};
use std::convert::Infallible;
use std::fmt::Display;
use std::hash::Hash;

use super::{CONTINUE, STOP, Seq};

impl<T: 'static> Seq<T> {
    // =========================================================================
    // Collections
    // =========================================================================

    /// Collects every element into a `Vec`, in order.
    ///
    /// ```rust
    /// use lazyseq::Seq;
    ///
    /// assert_eq!(Seq::naturals_below(3).to_list(), vec![0, 1, 2]);
    /// ```
    pub fn to_list(&self) -> Vec<T> {
        let mut list = Vec::new();
        self.for_each(|value| list.push(value));
        list
    }

    /// Collects every element into a `HashSet`.
    pub fn to_set(&self) -> HashSet<T>
    where
        T: Hash + Eq,
    {
        let mut set = HashSet::new();
        self.for_each(|value| {
            set.insert(value);
        });
        set
    }

    /// Hands every element, together with the map being built, to
    /// `accumulate`.
    ///
    /// The most general map collector: `accumulate` decides how each element
    /// lands in the map.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let counts = seq!["a", "b", "a"].to_map_with(|word, map| {
    ///     *map.entry(word).or_insert(0) += 1;
    /// });
    /// assert_eq!(counts["a"], 2);
    /// assert_eq!(counts["b"], 1);
    /// ```
    pub fn to_map_with<K, V, F>(&self, mut accumulate: F) -> HashMap<K, V>
    where
        K: Hash + Eq,
        F: FnMut(T, &mut HashMap<K, V>),
    {
        let mut map = HashMap::new();
        self.for_each(|value| accumulate(value, &mut map));
        map
    }

    /// Builds a map from derived keys and values. A later element replaces
    /// an earlier one with the same key.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let by_parity = seq![1, 2, 3, 4].to_map(|x| x % 2, |x| x * 10);
    /// assert_eq!(by_parity[&1], 30);
    /// assert_eq!(by_parity[&0], 40);
    /// ```
    pub fn to_map<K, V, KF, VF>(&self, mut key: KF, mut value: VF) -> HashMap<K, V>
    where
        K: Hash + Eq,
        KF: FnMut(&T) -> K,
        VF: FnMut(T) -> V,
    {
        self.to_map_with(|element, map| {
            map.insert(key(&element), value(element));
        })
    }

    /// Builds a map from derived keys and values, combining colliding values
    /// with `merge(existing, incoming)`.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let totals = seq![("a", 1), ("b", 2), ("a", 3)]
    ///     .to_map_merge(|(name, _)| *name, |(_, amount)| amount, |x, y| x + y);
    /// assert_eq!(totals["a"], 4);
    /// assert_eq!(totals["b"], 2);
    /// ```
    pub fn to_map_merge<K, V, KF, VF, MF>(
        &self,
        mut key: KF,
        mut value: VF,
        mut merge: MF,
    ) -> HashMap<K, V>
    where
        K: Hash + Eq,
        KF: FnMut(&T) -> K,
        VF: FnMut(T) -> V,
        MF: FnMut(V, V) -> V,
    {
        self.to_map_with(|element, map| {
            let slot = key(&element);
            let incoming = value(element);
            let merged = match map.remove(&slot) {
                Some(existing) => merge(existing, incoming),
                None => incoming,
            };
            map.insert(slot, merged);
        })
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Renders the elements as `[a, b, c]`.
    ///
    /// ```rust
    /// use lazyseq::{Seq, seq};
    ///
    /// assert_eq!(seq![1, 2, 3].to_array_string(), "[1, 2, 3]");
    /// assert_eq!(Seq::<i32>::empty().to_array_string(), "[]");
    /// ```
    pub fn to_array_string(&self) -> String
    where
        T: Display,
    {
        self.to_join_string_with("[", ", ", "]")
    }

    /// Renders the elements separated by `delimiter`.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// assert_eq!(seq![1, 2, 3].to_join_string(""), "123");
    /// assert_eq!(seq![1, 2, 3].to_join_string(", "), "1, 2, 3");
    /// ```
    pub fn to_join_string(&self, delimiter: &str) -> String
    where
        T: Display,
    {
        self.to_join_string_with("", delimiter, "")
    }

    /// Renders the elements separated by `delimiter`, between `prefix` and
    /// `suffix`.
    pub fn to_join_string_with(&self, prefix: &str, delimiter: &str, suffix: &str) -> String
    where
        T: Display,
    {
        let mut rendered = String::from(prefix);
        let mut first = true;
        self.for_each(|value| {
            if !first {
                rendered.push_str(delimiter);
            }
            first = false;
            rendered.push_str(&value.to_string());
        });
        rendered.push_str(suffix);
        rendered
    }

    // =========================================================================
    // Folds
    // =========================================================================

    /// Left fold: `function(...function(function(initial, e0), e1)..., en)`.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let digits = seq![1, 2, 3].fold_left(0, |acc, d| acc * 10 + d);
    /// assert_eq!(digits, 123);
    /// ```
    pub fn fold_left<A, F>(&self, initial: A, mut function: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        let Ok(folded) = self.try_fold(initial, |accumulator, value| {
            Ok::<A, Infallible>(function(accumulator, value))
        });
        folded
    }

    /// Right fold: `function(e0, function(e1, ...function(en, initial)))`.
    ///
    /// Buffers the whole sequence before combining.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let digits = seq![1, 2, 3].fold_right(0, |d, acc| acc * 10 + d);
    /// assert_eq!(digits, 321);
    /// ```
    pub fn fold_right<A, F>(&self, initial: A, mut function: F) -> A
    where
        F: FnMut(T, A) -> A,
    {
        self.to_list()
            .into_iter()
            .rev()
            .fold(initial, |accumulator, value| function(value, accumulator))
    }

    /// Left fold that stops at the first `Err` and returns it.
    ///
    /// ```rust
    /// use lazyseq::Seq;
    ///
    /// let sum = Seq::naturals().try_fold(0_i64, |acc, n| {
    ///     if n < 5 { Ok(acc + n) } else { Err(acc) }
    /// });
    /// assert_eq!(sum, Err(10));
    /// ```
    pub fn try_fold<A, E, F>(&self, initial: A, mut function: F) -> Result<A, E>
    where
        F: FnMut(A, T) -> Result<A, E>,
    {
        // `None` only between taking the accumulator and storing the next one.
        let mut state = Some(Ok(initial));
        self.consume_until_stop(|value| match state.take() {
            Some(Ok(accumulator)) => {
                let next = function(accumulator, value);
                let flow = if next.is_ok() { CONTINUE } else { STOP };
                state = Some(next);
                flow
            }
            failed => {
                state = failed;
                STOP
            }
        });
        match state {
            Some(result) => result,
            None => unreachable!("fold state is restored after every element"),
        }
    }

    /// Runs `action` on every element until it returns an `Err`.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let mut seen = Vec::new();
    /// let outcome = seq![1, 2, 3, 4].try_for_each(|x| {
    ///     if x == 3 {
    ///         return Err(format!("rejected {x}"));
    ///     }
    ///     seen.push(x);
    ///     Ok(())
    /// });
    /// assert_eq!(outcome, Err("rejected 3".to_string()));
    /// assert_eq!(seen, vec![1, 2]);
    /// ```
    pub fn try_for_each<E, F>(&self, mut action: F) -> Result<(), E>
    where
        F: FnMut(T) -> Result<(), E>,
    {
        let mut failure = None;
        self.consume_until_stop(|value| match action(value) {
            Ok(()) => CONTINUE,
            Err(error) => {
                failure = Some(error);
                STOP
            }
        });
        failure.map_or(Ok(()), Err)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Number of elements.
    pub fn length(&self) -> usize {
        let mut count = 0;
        self.for_each(|_| count += 1);
        count
    }

    /// Returns `true` if the sequence produces nothing.
    ///
    /// Stops at the first element.
    ///
    /// ```rust
    /// use lazyseq::{Seq, seq};
    ///
    /// assert!(Seq::<i32>::empty().is_empty());
    /// assert!(!Seq::naturals().is_empty());
    /// assert!(seq![1, 2].filter(|x| *x > 5).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.head().is_none()
    }

    /// The first element, if any. Stops right after it.
    pub fn head(&self) -> Option<T> {
        self.find_first(|_| true)
    }

    /// The last element, if any.
    ///
    /// ```rust
    /// use lazyseq::{Seq, seq};
    ///
    /// assert_eq!(seq![1, 2, 3].last(), Some(3));
    /// assert_eq!(Seq::<i32>::empty().last(), None);
    /// ```
    pub fn last(&self) -> Option<T> {
        self.fold_left(None, |_, value| Some(value))
    }

    /// The first element that satisfies `predicate`.
    ///
    /// ```rust
    /// use lazyseq::Seq;
    ///
    /// let first_square_over_50 = Seq::naturals().map(|n| n * n).find_first(|sq| *sq > 50);
    /// assert_eq!(first_square_over_50, Some(64));
    /// ```
    pub fn find_first<P>(&self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut found = None;
        self.consume_until_stop(|value| {
            if predicate(&value) {
                found = Some(value);
                STOP
            } else {
                CONTINUE
            }
        });
        found
    }

    /// Returns `true` if any element satisfies `predicate`.
    pub fn any_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.find_first(predicate).is_some()
    }

    /// Returns `true` if every element satisfies `predicate` (vacuously for
    /// an empty sequence).
    pub fn all_match<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.any_match(|value| !predicate(value))
    }

    /// Returns `true` if no element satisfies `predicate`.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// assert!(seq![1, 3, 5].none_match(|x| x % 2 == 0));
    /// assert!(!seq![1, 2, 5].none_match(|x| x % 2 == 0));
    /// ```
    pub fn none_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.any_match(predicate)
    }

    /// The element with the smallest key. The earliest one wins a tie.
    ///
    /// Sorts the whole sequence.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let shortest = seq!["ccc", "a", "bb", "d"].min_by_key(|s| s.len());
    /// assert_eq!(shortest, Some("a"));
    /// ```
    pub fn min_by_key<K, F>(&self, key: F) -> Option<T>
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.sort_by_key(key).head()
    }

    /// The element with the largest key. The earliest one wins a tie.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let longest = seq!["a", "ccc", "bb", "ddd"].max_by_key(|s| s.len());
    /// assert_eq!(longest, Some("ccc"));
    /// ```
    pub fn max_by_key<K, F>(&self, key: F) -> Option<T>
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.sort_by(move |left, right| key(right).cmp(&key(left))).head()
    }
}
