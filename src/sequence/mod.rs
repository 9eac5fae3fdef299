//! The persistent sequence carrier type.
//!
//! This module provides [`Sequence`], an immutable singly-linked sequence
//! that uses structural sharing so that every operation returns a new value
//! without copying the parts it shares with its input.
//!
//! # Examples
//!
//! ```rust
//! use consfold::sequence::Sequence;
//!
//! let sequence = Sequence::new().cons(3).cons(2).cons(1);
//! assert_eq!(sequence.head(), Some(&1));
//!
//! // Structural sharing: the original sequence is preserved
//! let extended = sequence.cons(0);
//! assert_eq!(sequence.len(), 3);  // Original unchanged
//! assert_eq!(extended.len(), 4);  // New sequence
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod list;

pub use list::Sequence;
pub use list::SequenceIntoIterator;
pub use list::SequenceIterator;
