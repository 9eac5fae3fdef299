//! The sequence algebra: operations derived from a single fold primitive.
//!
//! Every operation in this module is an inherent method on
//! [`Sequence`](crate::sequence::Sequence), layered leaves-first:
//!
//! - `fold`: the primitive left fold, plus `fold_first` and `reverse`
//! - `transform`: `map`, `filter`, `reject`, `find`, `contains`, `every`,
//!   `some` — all derived from `fold` (or, for the short-circuiting `find`,
//!   from direct traversal)
//! - `sort`: stable insertion sort by key, an independent primitive
//! - `group`: `group_by`, `index_by`, `count_by`, `partition`, and the
//!   [`GroupMap`] they produce
//! - `properties`: conjunctive property matching (`filter_where`,
//!   `find_where`, `pluck`) via the [`PropertyAccess`] seam
//! - `select`: `min`/`max` aggregate selection
//!
//! The operations are pure: each reads its input sequence and returns a new
//! value. Predicates, transforms, and accumulator functions are assumed to be
//! pure as well; nothing enforces that.

mod fold;
mod group;
mod properties;
mod select;
mod sort;
mod transform;

pub use group::GroupMap;
pub use group::GroupMapIntoIterator;
pub use properties::PropertyAccess;
pub use properties::PropertySpec;
