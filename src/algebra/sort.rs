//! Stable insertion sort by key.
//!
//! The sort maintains a sorted prefix and inserts each next element
//! immediately before the first prefix entry whose key is strictly greater
//! than its own. Equal keys are walked past, so a later duplicate always
//! lands after an earlier one: the sort is stable. Comparisons are plain
//! total-order tests on the key; keys are computed once per element.
//!
//! Quadratic by design. This library's scope is small sequences, and the
//! uniform walk keeps the algorithm honest: no special cases for sorted or
//! reverse-sorted input.

use crate::sequence::Sequence;

impl<T: Clone> Sequence<T> {
    /// Returns a new sequence sorted ascending by `key`.
    ///
    /// The sort is **stable**: elements whose keys compare equal retain
    /// their original relative order.
    ///
    /// # Complexity
    ///
    /// O(n²) comparisons and moves
    ///
    /// # Examples
    ///
    /// ```rust
    /// use consfold::sequence::Sequence;
    ///
    /// let numbers = Sequence::from_slice(&[2, 3, 5, 4, 1, 5]);
    /// let descending = numbers.sorted_by_key(|x| -x);
    /// assert_eq!(descending, Sequence::from_slice(&[5, 5, 4, 3, 2, 1]));
    /// ```
    #[must_use]
    pub fn sorted_by_key<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        let mut prefix: Vec<(K, T)> = Vec::with_capacity(self.len());
        for element in self {
            let next_key = key(element);
            let position = prefix
                .iter()
                .position(|(existing, _)| *existing > next_key)
                .unwrap_or(prefix.len());
            prefix.insert(position, (next_key, element.clone()));
        }
        prefix.into_iter().map(|(_, element)| element).collect()
    }

    /// Returns a new sequence sorted ascending by the elements' natural
    /// order.
    ///
    /// Equivalent to [`sorted_by_key`](Self::sorted_by_key) with the
    /// identity key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use consfold::sequence::Sequence;
    ///
    /// let numbers = Sequence::from_slice(&[2, 3, 5, 4, 1, 5]);
    /// assert_eq!(numbers.sorted(), Sequence::from_slice(&[1, 2, 3, 4, 5, 5]));
    /// ```
    #[must_use]
    pub fn sorted(&self) -> Self
    where
        T: Ord,
    {
        self.sorted_by_key(Clone::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_sorted_orders_ascending() {
        let sequence = Sequence::from_slice(&[2, 3, 5, 4, 1, 5]);
        assert_eq!(sequence.sorted(), Sequence::from_slice(&[1, 2, 3, 4, 5, 5]));
    }

    #[rstest]
    fn test_sorted_by_key_descending() {
        let sequence = Sequence::from_slice(&[2, 3, 5, 4, 1, 5]);
        let descending = sequence.sorted_by_key(|x| -x);
        assert_eq!(descending, Sequence::from_slice(&[5, 5, 4, 3, 2, 1]));
    }

    #[rstest]
    fn test_sorted_is_stable() {
        // Sort pairs by the first component only; ties keep insertion order.
        let sequence = Sequence::from_slice(&[(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')]);
        let sorted = sequence.sorted_by_key(|(rank, _)| *rank);
        assert_eq!(
            sorted,
            Sequence::from_slice(&[(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')])
        );
    }

    #[rstest]
    fn test_sorted_is_idempotent() {
        let sequence = Sequence::from_slice(&[3, 1, 2, 1]);
        let once = sequence.sorted();
        let twice = once.sorted();
        assert_eq!(once, twice);
    }

    #[rstest]
    fn test_sorted_empty_and_singleton() {
        let empty: Sequence<i32> = Sequence::new();
        assert!(empty.sorted().is_empty());

        let singleton = Sequence::singleton(9);
        assert_eq!(singleton.sorted(), singleton);
    }

    #[rstest]
    fn test_sorted_already_sorted_input() {
        let sequence: Sequence<i32> = (1..=5).collect();
        assert_eq!(sequence.sorted(), sequence);
    }

    #[rstest]
    fn test_sorted_reverse_sorted_input() {
        let sequence = Sequence::from_slice(&[5, 4, 3, 2, 1]);
        assert_eq!(sequence.sorted(), Sequence::from_slice(&[1, 2, 3, 4, 5]));
    }
}
