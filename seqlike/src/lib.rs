//! Immutable ordered sequences with interchangeable backends.
//!
//! [`SequenceKind`] is the capability interface. It is implemented by three
//! backends that behave the same way but store their elements differently:
//!
//! - [`ArrayKind`] builds an [`Array`], one contiguous shared slice.
//! - [`ListKind`] builds a [`List`], a persistent singly-linked list.
//! - [`ChunkKind`] builds a [`Chunk`], a tree of shared array pieces.
//!
//! Code written against `SequenceKind` works with any of them:
//!
//! ```rust
//! use seqlike::{ChunkKind, Item, ListKind, SequenceKind};
//!
//! fn first_two<K: SequenceKind>() -> Vec<Item> {
//!     let seq = K::from_iterable([1i64, 2, 3, 4]);
//!     let seq = K::prepend::<i64, &str, Item>(&K::take(&seq, 2), "a");
//!     K::to_vec(&seq)
//! }
//!
//! assert_eq!(first_two::<ListKind>(), first_two::<ChunkKind>());
//! ```
mod array;
mod chunk;
mod item;
mod kind;
mod list;

pub use array::{Array, ArrayKind};
pub use chunk::{Chunk, ChunkKind};
pub use item::{display_items, Item};
pub use kind::{clamp_count, Operation, SequenceKind};
pub use list::{List, ListKind};

pub mod iter {
    pub use crate::chunk::Iter as ChunkIter;
    pub use crate::list::Iter as ListIter;
}
