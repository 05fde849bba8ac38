//! The stop signal and per-combinator stop boundaries.
//!
//! A visitor answers every element with a [`Flow`]: `Continue(())` to keep
//! going, `Break(Stop)` to end the traversal. Producers hand a `Break` back to
//! their caller untouched, usually with `?`, so a stop request travels
//! outward through every layer without any unwinding.
//!
//! Combinators that stop their upstream for their *own* reasons (a `take`
//! whose quota is filled, a `zip` whose partner ran dry) must not report that
//! stop to their caller as if the caller had asked for it. A [`Boundary`]
//! remembers whether the downstream visitor requested the stop; the
//! combinator reports only that.

use std::ops::ControlFlow;

use static_assertions::assert_eq_size;

/// The stop request. Carries nothing and costs nothing to raise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stop;

assert_eq_size!(Stop, ());

/// What a visitor returns for each element.
pub type Flow = ControlFlow<Stop>;

/// Keep producing.
pub const CONTINUE: Flow = ControlFlow::Continue(());

/// Stop producing.
pub const STOP: Flow = ControlFlow::Break(Stop);

/// Tracks whether the downstream visitor asked a combinator to stop.
///
/// # Examples
///
/// ```rust
/// use lazyseq::seq::{Boundary, CONTINUE, STOP};
///
/// let mut boundary = Boundary::new();
/// let mut downstream = |x: i32| if x < 2 { CONTINUE } else { STOP };
///
/// assert_eq!(boundary.forward(&mut downstream, 1), CONTINUE);
/// assert!(!boundary.downstream_stopped());
/// assert_eq!(boundary.forward(&mut downstream, 5), STOP);
/// assert!(boundary.downstream_stopped());
/// assert_eq!(boundary.settle(), STOP);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    downstream: Flow,
}

impl Boundary {
    /// A boundary whose downstream has not stopped.
    #[inline]
    pub const fn new() -> Self {
        Self {
            downstream: CONTINUE,
        }
    }

    /// Hands `value` to `sink` and records a stop request from it.
    #[inline]
    pub fn forward<T>(&mut self, sink: &mut dyn FnMut(T) -> Flow, value: T) -> Flow {
        let flow = sink(value);
        if flow.is_break() {
            self.downstream = flow;
        }
        flow
    }

    /// Returns `true` once the downstream visitor asked to stop.
    #[inline]
    pub const fn downstream_stopped(&self) -> bool {
        matches!(self.downstream, ControlFlow::Break(_))
    }

    /// The flow to report to the caller once the upstream has returned.
    #[inline]
    pub const fn settle(self) -> Flow {
        self.downstream
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Self::new()
    }
}
