//! # lazyseq
//!
//! Push-style lazy sequences for Rust.
//!
//! ## Overview
//!
//! A [`Seq<T>`](seq::Seq) is a replayable generator: a procedure that, given a
//! visitor, feeds the visitor every element it produces, in order. Building a
//! sequence never runs anything. Work happens only when a terminal operation
//! (or [`Seq::consume`](seq::Seq::consume)) drives it, and every drive starts
//! production again from the beginning.
//!
//! - **Sources**: `unit`, `of`, `of_iter`, `from_iterator`,
//!   `arithmetic_progression`, `naturals`, custom closures via `Seq::new`
//! - **Streaming combinators**: `map`, `filter`, `flat_map`, `peek`, `append`,
//!   `flatten`, ...
//! - **Early termination**: `take`, `take_while`, `find_first`, `zip`, `zip_more`
//! - **Materializing combinators**: `sort`, `distinct`, `reverse`, `zip_with_next`
//! - **Terminal operations**: `to_list`, `to_map`, `fold_left`, `to_join_string`, ...
//!
//! Early termination travels back through the visitor's return value
//! ([`Flow`](seq::Flow)), so stopping an infinite producer needs no unwinding.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`More`] and [`Nested`](seq::Nested)
//! - `tracing`: trace events from materializing and stopping combinators
//! - `fxhash` / `ahash`: hasher used by `distinct` and `distinct_by`
//! - `full`: `serde` + `tracing`
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let joined = seq![1, 2, 3, 4, 5, 6]
//!     .drop(3)
//!     .take(2)
//!     .to_join_string(", ");
//! assert_eq!(joined, "4, 5");
//!
//! // Infinite sources are fine as long as something stops them.
//! let squares = Seq::naturals().map(|n| n * n).take(4).to_list();
//! assert_eq!(squares, vec![0, 1, 4, 9]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

#[macro_use]
mod macros;

pub mod more;
pub mod seq;

pub use more::{More, MoreExt, MoreSignal};
pub use seq::{Flow, Seq};

/// Prelude module for convenient imports.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(seq![1, 2, 3].length(), 3);
/// ```
pub mod prelude {
    pub use crate::more::{More, MoreExt, MoreSignal};
    pub use crate::seq::{
        Boundary, CONTINUE, Flow, Nested, Producer, Progression, STOP, Seq, Splice, Stop,
    };
    pub use crate::seq;
}
