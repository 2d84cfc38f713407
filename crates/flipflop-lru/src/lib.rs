//! # flipflop-lru
//!
//! Fixed-capacity, approximate LRU cache built from two hash map generations.
//!
//! ## Architecture
//! - **Generations**: two AHash maps, one *active* and one *passive*
//! - **Flip-flop**: when active fills up, passive is cleared and the roles swap
//! - **Promotion**: a hit in passive moves the entry back into active
//!
//! There is no linked list and no per-entry metadata. Eviction happens in
//! bulk, one whole generation at a time, which keeps `put` O(1) and `get`
//! O(1) on average at the cost of exact LRU ordering.
//!
//! The cache is single-threaded. Wrap it in a lock to share it.
//!
//! ```
//! use flipflop_lru::FlipFlopLru;
//!
//! let mut cache = FlipFlopLru::new(2);
//! cache.put(1, "a");
//! cache.put(2, "b");
//! cache.put(3, "c"); // flip-flop: 1 and 2 move to passive
//!
//! assert_eq!(cache.size(), (1, 2));
//! assert_eq!(cache.get(&1), Some(&mut "a"));
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod error;
mod generation;

pub use cache::FlipFlopLru;
pub use config::CacheConfig;
pub use error::{Error, Result};
pub use generation::Side;
