//! # consfold
//!
//! A fold-derived sequence algebra over persistent singly-linked sequences.
//!
//! ## Overview
//!
//! This library is a small, purely functional collection toolkit built
//! around a single primitive: the left fold. It includes:
//!
//! - **`Sequence<T>`**: an immutable singly-linked sequence with structural
//!   sharing (O(1) `cons`, `head`, `tail`, and `clone`)
//! - **Fold primitive**: [`fold`] and [`fold_first`], from which the rest of
//!   the algebra is derived
//! - **Derived operations**: `map`, `filter`, `reject`, `find`, `contains`,
//!   `every`, `some`, `reverse`
//! - **Stable sorting**: insertion sort by a key function
//! - **Grouping**: `group_by`, `index_by`, `count_by`, `partition`
//! - **Property matching**: `filter_where` and `find_where` over elements
//!   with named properties
//! - **Aggregate selection**: `min`, `max`, and keyed variants
//!
//! Every operation reads its input and returns a new value; nothing is
//! mutated in place, so a sequence can be shared freely between callers.
//!
//! [`fold`]: sequence::Sequence::fold
//! [`fold_first`]: sequence::Sequence::fold_first
//!
//! ## Feature Flags
//!
//! - `arc`: share nodes with `Arc` instead of `Rc`, making `Sequence<T>`
//!   `Send + Sync` for thread-safe elements
//! - `serde`: serialize and deserialize `Sequence<T>` as a plain sequence
//!
//! ## Example
//!
//! ```rust
//! use consfold::prelude::*;
//!
//! let numbers: Sequence<i32> = (1..=5).collect();
//!
//! let sum = numbers.fold(0, |accumulator, x| accumulator + x);
//! assert_eq!(sum, 15);
//!
//! let (even, odd) = numbers.partition(|x| x % 2 == 0);
//! assert_eq!(even, Sequence::from_slice(&[2, 4]));
//! assert_eq!(odd, Sequence::from_slice(&[1, 3, 5]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use consfold::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::{GroupMap, PropertyAccess, PropertySpec};
    pub use crate::error::EmptySequenceError;
    pub use crate::sequence::Sequence;
}

pub mod algebra;
pub mod error;
pub mod sequence;
