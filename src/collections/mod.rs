//! Bounded Collections
//!
//! Fixed-capacity building blocks used by the layer stores and the undo
//! history. Every collection allocates its slots once, up front.

mod queue;
mod sorted;
mod stack;

pub use queue::CircularQueue;
pub use sorted::SortedList;
pub use stack::ArrayStack;
