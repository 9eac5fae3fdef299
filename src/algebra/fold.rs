//! The fold primitive.
//!
//! [`fold`](Sequence::fold) consumes a sequence left-to-right, threading an
//! accumulator through every element. It is the one primitive the rest of the
//! algebra is derived from: `map`, `filter`, `contains`, the grouping family,
//! and the aggregate selections are all folds with particular accumulators.
//!
//! The fold is written as an explicit loop over the node chain rather than
//! recursion: behaviorally identical to a tail-recursive fold, with stack use
//! that stays constant regardless of sequence length.

use crate::error::EmptySequenceError;
use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Folds the sequence left-to-right into an accumulator.
    ///
    /// Each element is visited exactly once, in original order. Folding an
    /// empty sequence returns `initial` unchanged. The accumulator is
    /// threaded by value: each step consumes the previous accumulator and
    /// produces the next.
    ///
    /// # Arguments
    ///
    /// * `initial` - The initial accumulator value
    /// * `function` - Combines the accumulator with each element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use consfold::sequence::Sequence;
    ///
    /// let numbers: Sequence<i32> = (1..=5).collect();
    /// let sum = numbers.fold(0, |accumulator, x| accumulator + x);
    /// assert_eq!(sum, 15);
    ///
    /// let empty: Sequence<i32> = Sequence::new();
    /// assert_eq!(empty.fold(42, |accumulator, x| accumulator + x), 42);
    /// ```
    #[must_use]
    pub fn fold<A, F>(&self, initial: A, mut function: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        let mut accumulator = initial;
        for element in self {
            accumulator = function(accumulator, element);
        }
        accumulator
    }

    /// Folds the sequence using the first element as the initial accumulator.
    ///
    /// The remaining elements are folded in order onto that seed.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] if the sequence is empty: there is no
    /// element to seed the accumulator with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use consfold::sequence::Sequence;
    ///
    /// let numbers: Sequence<i32> = (1..=5).collect();
    /// let sum = numbers.fold_first(|accumulator, x| accumulator + x);
    /// assert_eq!(sum, Ok(15));
    /// ```
    pub fn fold_first<F>(&self, function: F) -> Result<T, EmptySequenceError>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let mut iter = self.iter();
        let seed = iter.next().ok_or(EmptySequenceError)?.clone();
        Ok(iter.fold(seed, function))
    }

    /// Returns a new sequence with the elements in reverse order.
    ///
    /// This is the canonical non-trivial fold: prepend each element onto an
    /// empty accumulator in a single O(n) pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use consfold::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = (1..=3).collect();
    /// assert_eq!(sequence.reverse(), Sequence::from_slice(&[3, 2, 1]));
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        self.fold(Self::new(), |reversed, element| {
            reversed.cons(element.clone())
        })
    }
}
