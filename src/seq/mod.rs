//! Lazy, replayable, push-style sequences.
//!
//! A [`Seq<T>`] wraps a *producer*: a procedure that, given a visitor, calls
//! the visitor once per element in production order and returns when it has
//! nothing more to give or when the visitor answered [`STOP`].
//!
//! - Construction never runs the producer. Combinators only wrap.
//! - Every `consume` is an independent traversal that starts from the
//!   beginning. Counters, buffers and seen-sets live inside one traversal.
//! - The one exception is a sequence built over a one-shot iterator
//!   ([`Seq::from_iterator`]); replaying it continues from wherever the
//!   iterator was left, which after a full traversal means nothing.
//!
//! # Module Layout
//!
//! - `signal`: [`Stop`], [`Flow`], [`Boundary`]
//! - `source`: constructors and the [`Progression`] generator
//! - `streaming`: `map`, `filter`, `flat_map`, `peek`, `append`, ...
//! - `splice`: [`Splice`], [`Nested`] and `flatten`
//! - `bounded`: `take`, `drop`, `zip`, `more`, ...
//! - `materialize`: `sort`, `distinct`, `reverse`, `zip_with_next`, ...
//! - `terminal`: `to_list`, `to_map`, `fold_left`, `find_first`, ...
//! - `options` / `pairs`: operations on `Seq<Option<T>>`, `Seq<Result<T, E>>`
//!   and `Seq<(A, B)>`
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let doubled = seq![1, 2, 3, 4, 5].flat_map(|v| seq![v, v]);
//! assert_eq!(doubled.to_list(), vec![1, 1, 2, 2, 3, 3, 4, 4, 5, 5]);
//!
//! // A hand-written generator: visitors say when to stop.
//! let powers = Seq::new(|sink| {
//!     let mut value = 1_u64;
//!     loop {
//!         sink(value)?;
//!         value *= 2;
//!     }
//! });
//! assert_eq!(powers.take(5).to_list(), vec![1, 2, 4, 8, 16]);
//! ```

mod bounded;
mod materialize;
mod options;
mod pairs;
mod signal;
mod source;
mod splice;
mod streaming;
mod terminal;

use std::fmt;
use std::rc::Rc;

pub use signal::{Boundary, CONTINUE, Flow, STOP, Stop};
pub use source::Progression;
pub use splice::{Nested, Splice};

/// A struct-based producer.
///
/// Closures are the usual way to write a producer ([`Seq::new`]); implement
/// this trait when the producer has named configuration worth a type of its
/// own, then wrap it with [`Seq::from_producer`].
///
/// Implementations must call `sink` once per element, in order, and return
/// the first `Break` the sink answers without producing anything further.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// struct Countdown(u32);
///
/// impl Producer<u32> for Countdown {
///     fn produce(&self, sink: &mut dyn FnMut(u32) -> Flow) -> Flow {
///         for value in (1..=self.0).rev() {
///             sink(value)?;
///         }
///         CONTINUE
///     }
/// }
///
/// let countdown = Seq::from_producer(Countdown(3));
/// assert_eq!(countdown.to_list(), vec![3, 2, 1]);
/// ```
pub trait Producer<T> {
    /// Feeds every element to `sink`.
    fn produce(&self, sink: &mut dyn FnMut(T) -> Flow) -> Flow;
}

type Body<T> = dyn Fn(&mut dyn FnMut(T) -> Flow) -> Flow;

/// A lazy, replayable sequence of `T`.
///
/// Cloning a `Seq` is cheap and shares the producer.
pub struct Seq<T> {
    body: Rc<Body<T>>,
}

impl<T> Clone for Seq<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            body: Rc::clone(&self.body),
        }
    }
}

impl<T> fmt::Debug for Seq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Seq { .. }")
    }
}

impl<T: 'static> Seq<T> {
    /// Creates a sequence from a producer closure.
    ///
    /// The closure receives the visitor and must return the first `Break` it
    /// answers (use `?`), or [`CONTINUE`] once production is complete. It is
    /// called again, from scratch, on every traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let letters = Seq::new(|sink| {
    ///     for letter in ['a', 'b', 'c'] {
    ///         sink(letter)?;
    ///     }
    ///     CONTINUE
    /// });
    /// assert_eq!(letters.to_join_string(""), "abc");
    /// ```
    #[inline]
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn(&mut dyn FnMut(T) -> Flow) -> Flow + 'static,
    {
        Self {
            body: Rc::new(producer),
        }
    }

    /// Wraps a struct-based [`Producer`].
    #[inline]
    pub fn from_producer<P>(producer: P) -> Self
    where
        P: Producer<T> + 'static,
    {
        Self::new(move |sink| producer.produce(sink))
    }

    /// Drives the sequence, feeding every element to `visitor`.
    ///
    /// Returns `Break(Stop)` if the visitor asked to stop, `Continue(())` if
    /// production ran to its end. An infinite sequence returns only when the
    /// visitor stops it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut seen = Vec::new();
    /// let flow = Seq::naturals().consume(|n| {
    ///     seen.push(n);
    ///     if n == 2 { STOP } else { CONTINUE }
    /// });
    /// assert_eq!(flow, STOP);
    /// assert_eq!(seen, vec![0, 1, 2]);
    /// ```
    #[inline]
    pub fn consume<F>(&self, mut visitor: F) -> Flow
    where
        F: FnMut(T) -> Flow,
    {
        (self.body)(&mut visitor)
    }

    /// Drives the sequence and absorbs the stop request.
    ///
    /// This is the boundary every terminal operation that may end early is
    /// built on: the stop never reaches the caller.
    #[inline]
    pub fn consume_until_stop<F>(&self, visitor: F)
    where
        F: FnMut(T) -> Flow,
    {
        let _ = self.consume(visitor);
    }

    /// Runs `action` on every element.
    ///
    /// Does not return for an infinite sequence.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let mut total = 0;
    /// seq![1, 2, 3].for_each(|x| total += x);
    /// assert_eq!(total, 6);
    /// ```
    #[inline]
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(T),
    {
        self.consume_until_stop(|value| {
            action(value);
            CONTINUE
        });
    }
}

impl<T: 'static> Default for Seq<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone + 'static> From<Vec<T>> for Seq<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::of(elements)
    }
}

impl<T: Clone + 'static> FromIterator<T> for Seq<T> {
    /// Collects the iterator once; the collected elements are replayed.
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::of(iterator)
    }
}
