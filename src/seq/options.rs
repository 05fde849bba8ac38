//! Operations on sequences of optional and fallible values.

use std::collections::HashMap;
use std::convert::identity;
use std::hash::Hash;

use super::Seq;

impl<T: 'static> Seq<Option<T>> {
    /// Keeps the present values, unwrapped.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let present = seq![Some(1), None, Some(3), None].filter_some();
    /// assert_eq!(present.to_list(), vec![1, 3]);
    /// ```
    pub fn filter_some(&self) -> Seq<T> {
        self.filter_map(identity)
    }

    /// Builds a map whose key and value functions see each element as an
    /// `Option`, absent ones included. A later element replaces an earlier
    /// one with the same key.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let map = seq![Some("1"), None, Some("2")]
    ///     .to_map_optional(|v| v.map(|s| format!("{s}_i32")), |v| v.unwrap_or("missing"));
    /// assert_eq!(map.len(), 3);
    /// assert_eq!(map[&Some("1_i32".to_string())], "1");
    /// assert_eq!(map[&None], "missing");
    /// ```
    pub fn to_map_optional<K, V, KF, VF>(&self, mut key: KF, value: VF) -> HashMap<K, V>
    where
        K: Hash + Eq,
        KF: FnMut(Option<&T>) -> K,
        VF: FnMut(Option<T>) -> V,
    {
        self.to_map(|element| key(element.as_ref()), value)
    }
}

impl<T: 'static, E: 'static> Seq<Result<T, E>> {
    /// Collects the `Ok` values, or returns the first `Err`.
    ///
    /// Stops the traversal at the first `Err`.
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// let parsed = seq!["1", "2", "3"].map(|s| s.parse::<i32>());
    /// assert_eq!(parsed.try_to_list(), Ok(vec![1, 2, 3]));
    ///
    /// let broken = seq!["1", "x", "3"].map(|s| s.parse::<i32>());
    /// assert!(broken.try_to_list().is_err());
    /// ```
    pub fn try_to_list(&self) -> Result<Vec<T>, E> {
        self.try_fold(Vec::new(), |mut list, element| {
            list.push(element?);
            Ok(list)
        })
    }
}
