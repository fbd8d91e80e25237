//! Bounded LRU caching for the minuet framework.
//!
//! [`LruCache`] is the single-threaded core: a fixed-capacity map with a
//! strict recency order and O(1) operations. [`SsrCache`] wraps it in a
//! [`parking_lot::Mutex`] for the rendered-HTML cache shared across
//! request handlers.

mod lru;
mod ssr;

pub use lru::LruCache;
pub use ssr::SsrCache;
