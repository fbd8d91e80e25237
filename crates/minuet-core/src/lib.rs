//! Shared string utilities for the minuet framework core.
//!
//! Everything here is a pure function over borrowed string data. The
//! heavier components (router, renderer, JSX transformer) build on these
//! primitives and keep their own state elsewhere.

pub mod strings;

pub use strings::{html_escape, url_decode};
