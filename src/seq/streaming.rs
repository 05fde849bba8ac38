//! Stateless streaming combinators.
//!
//! Each combinator returns a new sequence whose producer drives the wrapped
//! one with an adapted visitor. Nothing is buffered; elements flow through
//! one at a time.

use super::{Boundary, CONTINUE, STOP, Seq};

impl<T: 'static> Seq<T> {
    /// Applies `function` to every element.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// assert_eq!(seq![1, 2, 3].map(|x| x * 10).to_list(), vec![10, 20, 30]);
    /// ```
    pub fn map<R, F>(&self, function: F) -> Seq<R>
    where
        R: 'static,
        F: Fn(T) -> R + 'static,
    {
        let upstream = self.clone();
        Seq::new(move |sink| upstream.consume(|value| sink(function(value))))
    }

    /// Applies `mapper` to the elements that satisfy `predicate`, dropping
    /// the others.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let halves = seq![1, 2, 3, 4].map_if(|x| x % 2 == 0, |x| x / 2);
    /// assert_eq!(halves.to_list(), vec![1, 2]);
    /// ```
    pub fn map_if<R, P, F>(&self, predicate: P, mapper: F) -> Seq<R>
    where
        R: 'static,
        P: Fn(&T) -> bool + 'static,
        F: Fn(T) -> R + 'static,
    {
        let upstream = self.clone();
        Seq::new(move |sink| {
            upstream.consume(|value| {
                if predicate(&value) {
                    sink(mapper(value))
                } else {
                    CONTINUE
                }
            })
        })
    }

    /// Maps every element and keeps the present results.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let parsed = seq!["1", "x", "3"].filter_map(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed.to_list(), vec![1, 3]);
    /// ```
    pub fn filter_map<R, F>(&self, function: F) -> Seq<R>
    where
        R: 'static,
        F: Fn(T) -> Option<R> + 'static,
    {
        let upstream = self.clone();
        Seq::new(move |sink| {
            upstream.consume(|value| match function(value) {
                Some(mapped) => sink(mapped),
                None => CONTINUE,
            })
        })
    }

    /// Maps elements until `function` first returns `None`, then stops.
    ///
    /// Terminates an infinite source as soon as the mapping runs out.
    ///
    /// ```rust
    /// use lazyseq::Seq;
    ///
    /// let small = Seq::naturals().map_while(|n| (n < 3).then_some(n * 2));
    /// assert_eq!(small.to_list(), vec![0, 2, 4]);
    /// ```
    pub fn map_while<R, F>(&self, function: F) -> Seq<R>
    where
        R: 'static,
        F: Fn(T) -> Option<R> + 'static,
    {
        let upstream = self.clone();
        Seq::new(move |sink| {
            let mut boundary = Boundary::new();
            let _ = upstream.consume(|value| match function(value) {
                Some(mapped) => boundary.forward(&mut *sink, mapped),
                None => STOP,
            });
            boundary.settle()
        })
    }

    /// Replaces every element by the elements of the sequence `function`
    /// returns for it.
    ///
    /// ```rust
    /// use lazyseq::{Seq, seq};
    ///
    /// let repeated = seq![1, 2, 3].flat_map(|n| Seq::of_iter(std::iter::repeat_n(n, n)));
    /// assert_eq!(repeated.to_list(), vec![1, 2, 2, 3, 3, 3]);
    /// ```
    pub fn flat_map<R, F>(&self, function: F) -> Seq<R>
    where
        R: 'static,
        F: Fn(T) -> Seq<R> + 'static,
    {
        let upstream = self.clone();
        Seq::new(move |sink| upstream.consume(|value| function(value).consume(&mut *sink)))
    }

    /// Keeps the elements that satisfy `predicate`, in order.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let evens = seq![1, 2, 3, 4, 5].filter(|x| x % 2 == 0);
    /// assert_eq!(evens.to_array_string(), "[2, 4]");
    /// ```
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let upstream = self.clone();
        Self::new(move |sink| {
            upstream.consume(|value| if predicate(&value) { sink(value) } else { CONTINUE })
        })
    }

    /// Runs `action` on every element as it passes through.
    ///
    /// ```rust
    /// use lazyseq::seq;
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// let log = Rc::new(RefCell::new(Vec::new()));
    /// let recorder = Rc::clone(&log);
    /// let first_two = seq![1, 2, 3]
    ///     .peek(move |x| recorder.borrow_mut().push(*x))
    ///     .take(2)
    ///     .to_list();
    /// assert_eq!(first_two, vec![1, 2]);
    /// assert_eq!(*log.borrow(), vec![1, 2]);
    /// ```
    pub fn peek<F>(&self, action: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        let upstream = self.clone();
        Self::new(move |sink| {
            upstream.consume(|value| {
                action(&value);
                sink(value)
            })
        })
    }

    /// Emits `value` after the last element.
    pub fn append(&self, value: T) -> Self
    where
        T: Clone,
    {
        let upstream = self.clone();
        Self::new(move |sink| {
            upstream.consume(&mut *sink)?;
            sink(value.clone())
        })
    }

    /// Emits the items of a re-iterable collection after the last element.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let joined = seq![1, 2].append_all(vec![3, 4]).append(5);
    /// assert_eq!(joined.to_list(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn append_all<I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'static,
    {
        self.concat(&Self::of_iter(other))
    }

    /// Emits every element of `other` after the last element of `self`.
    ///
    /// `self` is driven to completion first. If it never ends, `other` is
    /// never reached.
    pub fn concat(&self, other: &Self) -> Self {
        let first = self.clone();
        let second = other.clone();
        Self::new(move |sink| {
            first.consume(&mut *sink)?;
            second.consume(&mut *sink)
        })
    }

    /// Every element except the first.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// assert_eq!(seq![1, 2, 3].tail().to_list(), vec![2, 3]);
    /// ```
    pub fn tail(&self) -> Self {
        self.drop(1)
    }

    /// Pairs each mapped element with its zero-based position.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let indexed = seq!["a", "b"].map_with_index(|s| s.to_uppercase());
    /// assert_eq!(indexed.to_list(), vec![(0, "A".to_string()), (1, "B".to_string())]);
    /// ```
    pub fn map_with_index<R, F>(&self, function: F) -> Seq<(usize, R)>
    where
        R: 'static,
        F: Fn(T) -> R + 'static,
    {
        let upstream = self.clone();
        Seq::new(move |sink| {
            let mut index = 0;
            upstream.consume(|value| {
                let position = index;
                index += 1;
                sink((position, function(value)))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_map_if_keeps_only_matching() {
        let mapped = seq![1, 2, 3, 4, 5].map_if(|x| *x > 2, |x| x * 100);
        assert_eq!(mapped.to_list(), vec![300, 400, 500]);
    }

    #[rstest]
    fn test_map_while_stops_at_first_absent() {
        let mapped = seq![2, 4, 5, 6].map_while(|x| (x % 2 == 0).then_some(x / 2));
        assert_eq!(mapped.to_list(), vec![1, 2]);
    }

    #[rstest]
    fn test_map_while_inner_stop_does_not_leak() {
        let combined = seq![1, 0, 1].map_while(|x| (x > 0).then_some(x)).concat(&seq![9]);
        assert_eq!(combined.to_list(), vec![1, 9]);
    }

    #[rstest]
    fn test_flat_map_respects_downstream_stop() {
        let pairs = Seq::naturals().flat_map(|n| seq![n, n]).take(3);
        assert_eq!(pairs.to_list(), vec![0, 0, 1]);
    }

    #[rstest]
    fn test_concat_stops_inside_first() {
        let combined = seq![1, 2, 3].concat(&seq![4, 5]);
        assert_eq!(combined.take(2).to_list(), vec![1, 2]);
        assert_eq!(combined.take(4).to_list(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_tail_of_empty_is_empty() {
        assert!(Seq::<i32>::empty().tail().is_empty());
    }

    #[rstest]
    fn test_map_with_index_restarts_on_replay() {
        let indexed = seq!['x', 'y'].map_with_index(|c| c);
        assert_eq!(indexed.to_list(), vec![(0, 'x'), (1, 'y')]);
        assert_eq!(indexed.to_list(), vec![(0, 'x'), (1, 'y')]);
    }
}
