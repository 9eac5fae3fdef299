//! Aggregate selection: min and max.
//!
//! Both are seedless folds: the first element seeds the comparison and the
//! winner is replaced only on a strict comparison, so ties keep the
//! earlier-seen element.

use crate::error::EmptySequenceError;
use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Returns the element with the greatest key.
    ///
    /// Ties keep the earlier-seen element: the incumbent is only replaced
    /// when a later key is strictly greater.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] if the sequence is empty: there is no
    /// element to seed the comparison.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use consfold::sequence::Sequence;
    ///
    /// let words = Sequence::from_slice(&["fold", "sequence", "map"]);
    /// assert_eq!(words.max_by_key(|word| word.len()), Ok(&"sequence"));
    /// ```
    pub fn max_by_key<K, F>(&self, key: F) -> Result<&T, EmptySequenceError>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        let mut iter = self.iter();
        let first = iter.next().ok_or(EmptySequenceError)?;
        let mut best = first;
        let mut best_key = key(first);

        for element in iter {
            let candidate = key(element);
            if candidate > best_key {
                best = element;
                best_key = candidate;
            }
        }
        Ok(best)
    }

    /// Returns the element with the smallest key.
    ///
    /// Ties keep the earlier-seen element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] if the sequence is empty.
    pub fn min_by_key<K, F>(&self, key: F) -> Result<&T, EmptySequenceError>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        let mut iter = self.iter();
        let first = iter.next().ok_or(EmptySequenceError)?;
        let mut best = first;
        let mut best_key = key(first);

        for element in iter {
            let candidate = key(element);
            if candidate < best_key {
                best = element;
                best_key = candidate;
            }
        }
        Ok(best)
    }

    /// Returns the greatest element by natural order.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use consfold::sequence::Sequence;
    ///
    /// let numbers = Sequence::from_slice(&[2, 5, 3]);
    /// assert_eq!(numbers.max(), Ok(&5));
    /// ```
    pub fn max(&self) -> Result<&T, EmptySequenceError>
    where
        T: Ord + Clone,
    {
        self.max_by_key(Clone::clone)
    }

    /// Returns the smallest element by natural order.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] if the sequence is empty.
    pub fn min(&self) -> Result<&T, EmptySequenceError>
    where
        T: Ord + Clone,
    {
        self.min_by_key(Clone::clone)
    }
}
