//! Classification: group_by, index_by, count_by, and partition.
//!
//! `group_by` folds each element into a buffer keyed by its classification;
//! buffers are `Vec`s so that every append is amortized O(1), and each buffer
//! becomes a [`Sequence`] exactly once at the end. The other three operations
//! are thin layers over that fold.

use std::collections::HashMap;
use std::collections::hash_map;
use std::hash::Hash;

use crate::sequence::Sequence;

/// A mapping from classification key to the ordered sub-sequence of elements
/// that classified to it.
///
/// Produced by [`group_by`](Sequence::group_by). Within each group, elements
/// keep their original relative order. Key iteration order is unspecified.
///
/// # Examples
///
/// ```rust
/// use consfold::sequence::Sequence;
///
/// let numbers: Sequence<i32> = (1..=5).collect();
/// let by_parity = numbers.group_by(|x| x % 2 == 0);
///
/// assert_eq!(by_parity.get(&true), Some(&Sequence::from_slice(&[2, 4])));
/// assert_eq!(by_parity.get(&false), Some(&Sequence::from_slice(&[1, 3, 5])));
/// ```
#[derive(Debug, Clone)]
pub struct GroupMap<K, T> {
    groups: HashMap<K, Sequence<T>>,
}

impl<K: Hash + Eq, T: PartialEq> PartialEq for GroupMap<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<K: Hash + Eq, T: Eq> Eq for GroupMap<K, T> {}

impl<K: Hash + Eq, T> GroupMap<K, T> {
    /// Creates an empty group map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the group classified under `key`, if any element did.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&Sequence<T>> {
        self.groups.get(key)
    }

    /// Returns `true` if some element classified under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.groups.contains_key(key)
    }

    /// Removes and returns the group classified under `key`.
    pub fn remove(&mut self, key: &K) -> Option<Sequence<T>> {
        self.groups.remove(key)
    }

    /// Returns an iterator over the classification keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    /// Returns an iterator over `(key, group)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Sequence<T>)> {
        self.groups.iter()
    }
}

impl<K: Hash + Eq, T> Default for GroupMap<K, T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, T> FromIterator<(K, Sequence<T>)> for GroupMap<K, T> {
    fn from_iter<I: IntoIterator<Item = (K, Sequence<T>)>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}

/// An owning iterator over the `(key, group)` pairs of a [`GroupMap`].
pub struct GroupMapIntoIterator<K, T> {
    inner: hash_map::IntoIter<K, Sequence<T>>,
}

impl<K, T> Iterator for GroupMapIntoIterator<K, T> {
    type Item = (K, Sequence<T>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, T> IntoIterator for GroupMap<K, T> {
    type Item = (K, Sequence<T>);
    type IntoIter = GroupMapIntoIterator<K, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        GroupMapIntoIterator {
            inner: self.groups.into_iter(),
        }
    }
}

impl<'a, K: Hash + Eq, T> IntoIterator for &'a GroupMap<K, T> {
    type Item = (&'a K, &'a Sequence<T>);
    type IntoIter = hash_map::Iter<'a, K, Sequence<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

// =============================================================================
// Classification Operations
// =============================================================================

impl<T: Clone> Sequence<T> {
    /// Groups elements by their classification key.
    ///
    /// A fold: each element is appended to the buffer for its key, and the
    /// buffer is created on the key's first encounter. Elements keep their
    /// original relative order within each group.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use consfold::sequence::Sequence;
    ///
    /// let words = Sequence::from_slice(&["apple", "avocado", "banana"]);
    /// let by_initial = words.group_by(|word| word.chars().next());
    ///
    /// let a_group = by_initial.get(&Some('a')).unwrap();
    /// assert_eq!(*a_group, Sequence::from_slice(&["apple", "avocado"]));
    /// ```
    #[must_use]
    pub fn group_by<K, F>(&self, mut classify: F) -> GroupMap<K, T>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        let buffers = self.fold(
            HashMap::<K, Vec<T>>::new(),
            |mut buffers, element| {
                buffers
                    .entry(classify(element))
                    .or_default()
                    .push(element.clone());
                buffers
            },
        );

        buffers
            .into_iter()
            .map(|(key, elements)| (key, elements.into_iter().collect()))
            .collect()
    }

    /// Indexes elements by their classification key, keeping the **last**
    /// element seen for each key.
    ///
    /// A fold with plain key overwrite: last write wins on collision.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use consfold::sequence::Sequence;
    ///
    /// let numbers: Sequence<i32> = (1..=5).collect();
    /// let by_parity = numbers.index_by(|x| x % 2 == 0);
    ///
    /// assert_eq!(by_parity.get(&true), Some(&4));
    /// assert_eq!(by_parity.get(&false), Some(&5));
    /// ```
    #[must_use]
    pub fn index_by<K, F>(&self, mut classify: F) -> HashMap<K, T>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        self.fold(HashMap::new(), |mut index, element| {
            index.insert(classify(element), element.clone());
            index
        })
    }

    /// Counts elements by their classification key.
    ///
    /// Runs [`group_by`](Self::group_by) and maps each group to its length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use consfold::sequence::Sequence;
    ///
    /// let numbers: Sequence<i32> = (1..=5).collect();
    /// let counts = numbers.count_by(|x| x % 2 == 0);
    ///
    /// assert_eq!(counts.get(&true), Some(&2));
    /// assert_eq!(counts.get(&false), Some(&3));
    /// ```
    #[must_use]
    pub fn count_by<K, F>(&self, classify: F) -> HashMap<K, usize>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        self.group_by(classify)
            .into_iter()
            .map(|(key, group)| (key, group.len()))
            .collect()
    }

    /// Splits the sequence into the elements satisfying the predicate and
    /// the rest, both in original order.
    ///
    /// Runs [`group_by`](Self::group_by) with the predicate as classifier
    /// and reads the `true` and `false` groups. A side no element classified
    /// to is an empty sequence, so a constantly-true or constantly-false
    /// predicate is fine.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use consfold::sequence::Sequence;
    ///
    /// let numbers: Sequence<i32> = (1..=6).collect();
    /// let (even, odd) = numbers.partition(|x| x % 2 == 0);
    /// assert_eq!(even, Sequence::from_slice(&[2, 4, 6]));
    /// assert_eq!(odd, Sequence::from_slice(&[1, 3, 5]));
    /// ```
    #[must_use]
    pub fn partition<P>(&self, predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        let mut groups = self.group_by(predicate);
        let matching = groups.remove(&true).unwrap_or_default();
        let rest = groups.remove(&false).unwrap_or_default();
        (matching, rest)
    }
}
