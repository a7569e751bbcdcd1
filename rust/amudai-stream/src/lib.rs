//! Eager, composable stream operations over in-memory sequences.
//!
//! A [`Stream`] owns an ordered list of elements and exposes the familiar
//! aggregate operations: intermediate operations (`filter`, `map`, `flat_map`,
//! `peek`, `sorted`, `limit`, `skip`, `distinct`) that return a new stream, and
//! terminal operations (`count`, `find_first`, `any_match`, `min`, `max`,
//! `reduce`, `collect`, `for_each`, `to_array`) that produce a result.
//!
//! # Evaluation Model
//!
//! Evaluation is eager and single-threaded. Every intermediate operation fully
//! materializes its result before returning, and side-effecting operations such
//! as [`Stream::peek`] run immediately. The parallel / unordered flags
//! ([`ExecutionMode`]) are recorded but never change execution.
//!
//! # Capabilities
//!
//! Operations that need more than an opaque element type are gated by trait
//! bounds: [`Stream::distinct`] requires `Eq + Hash`, [`Stream::sorted_natural`]
//! requires `Ord`. Everything else takes caller-supplied predicates,
//! comparators and mapping functions.
//!
//! # Closing
//!
//! Close handlers registered with [`Stream::on_close`] run in registration order
//! when [`Stream::close`] is called. Every handler runs even if earlier ones
//! fail, and all failures are reported together through
//! [`amudai_common::MultiError`].
//!
//! # Example
//!
//! ```
//! use amudai_stream::Stream;
//!
//! let evens = Stream::of([3, 1, 4, 1, 5, 9, 2, 6])
//!     .filter(|x| x % 2 == 0)
//!     .sorted(|a, b| a.cmp(b))
//!     .to_array();
//! assert_eq!(evens, [2, 4, 6]);
//! ```

pub mod builder;
pub mod close;
pub mod collector;
pub mod config;
pub mod ordering;
pub mod stream;
pub mod transform;

#[cfg(test)]
mod tests;

pub use builder::StreamBuilder;
pub use close::{CloseHandler, CloseHandlers};
pub use collector::{Collector, FnCollector, ToVec};
pub use config::ExecutionMode;
pub use ordering::{ComparatorSort, natural_order, reverse_order};
pub use stream::Stream;
