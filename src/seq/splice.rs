//! Structural flattening.
//!
//! [`Splice`] is implemented by every container whose items can be spliced
//! into a visitor in place of the container itself: `Vec`, arrays,
//! `VecDeque`, `Option`, nested sequences, and the recursive [`Nested`] tree.
//! [`Seq::flatten`] uses it to replace each emitted container with its items.

use std::collections::VecDeque;

use super::{CONTINUE, Flow, Seq};

/// A container whose items can be fed, in order, to a visitor.
pub trait Splice {
    /// The spliced item type.
    type Item;

    /// Feeds every item to `sink`, stopping at the first `Break`.
    fn splice(self, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow;
}

impl<T> Splice for Vec<T> {
    type Item = T;

    fn splice(self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        for item in self {
            sink(item)?;
        }
        CONTINUE
    }
}

impl<T, const N: usize> Splice for [T; N] {
    type Item = T;

    fn splice(self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        for item in self {
            sink(item)?;
        }
        CONTINUE
    }
}

impl<T> Splice for VecDeque<T> {
    type Item = T;

    fn splice(self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        for item in self {
            sink(item)?;
        }
        CONTINUE
    }
}

impl<T> Splice for Option<T> {
    type Item = T;

    fn splice(self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        match self {
            Some(item) => sink(item),
            None => CONTINUE,
        }
    }
}

impl<T: 'static> Splice for Seq<T> {
    type Item = T;

    fn splice(self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        self.consume(sink)
    }
}

/// A value or an arbitrarily deep list of nested values.
///
/// Splicing a `Nested` visits its leaves depth-first, left to right.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let tree = Nested::Many(vec![
///     Nested::Leaf(1),
///     Nested::Many(vec![Nested::Leaf(2), Nested::Many(vec![Nested::Leaf(3)])]),
///     Nested::Leaf(4),
/// ]);
/// assert_eq!(Seq::unit(tree).flatten().to_list(), vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nested<T> {
    /// A single value.
    Leaf(T),
    /// A list of nested values.
    Many(Vec<Self>),
}

impl<T> Nested<T> {
    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Many(children) => children.iter().map(Self::leaf_count).sum(),
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Leaf(value)
    }
}

impl<T> Splice for Nested<T> {
    type Item = T;

    fn splice(self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        match self {
            Self::Leaf(value) => sink(value),
            Self::Many(children) => {
                for child in children {
                    child.splice(&mut *sink)?;
                }
                CONTINUE
            }
        }
    }
}

impl<S> Seq<S>
where
    S: Splice + 'static,
    S::Item: 'static,
{
    /// Replaces every emitted container with its items.
    ///
    /// ```rust
    /// use lazyseq::{Seq, seq};
    ///
    /// let rows = seq![vec![1, 2], vec![], vec![3]];
    /// assert_eq!(rows.flatten().to_list(), vec![1, 2, 3]);
    ///
    /// let nested = seq![seq![1, 2], seq![3]];
    /// assert_eq!(nested.flatten().to_list(), vec![1, 2, 3]);
    ///
    /// let maybes = seq![Some(1), None, Some(3)];
    /// assert_eq!(maybes.flatten().to_list(), vec![1, 3]);
    /// ```
    pub fn flatten(&self) -> Seq<S::Item> {
        let upstream = self.clone();
        Seq::new(move |sink| upstream.consume(|container| container.splice(&mut *sink)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_flatten_arrays_and_deques() {
        assert_eq!(seq![[1, 2], [3, 4]].flatten().to_list(), vec![1, 2, 3, 4]);

        let deques = seq![VecDeque::from(vec![1]), VecDeque::from(vec![2, 3])];
        assert_eq!(deques.flatten().to_list(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_flatten_stops_inside_container() {
        let rows = seq![vec![1, 2, 3], vec![4, 5]];
        assert_eq!(rows.flatten().take(2).to_list(), vec![1, 2]);
        assert_eq!(rows.flatten().take(4).to_list(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_nested_leaf_count() {
        let tree = Nested::Many(vec![1.into(), Nested::Many(vec![2.into(), 3.into()])]);
        assert_eq!(tree.leaf_count(), 3);
    }

    #[rstest]
    fn test_flatten_nested_stops_mid_tree() {
        let tree = Nested::Many(vec![
            Nested::Many(vec![1.into(), 2.into()]),
            Nested::Many(vec![3.into(), 4.into()]),
        ]);
        assert_eq!(Seq::unit(tree).flatten().take(3).to_list(), vec![1, 2, 3]);
    }
}
