//! The unified error surface of the core.

use thiserror::Error;

/// Errors crossing the host-runtime boundary.
///
/// Cache misses are not errors; they stay option-shaped on the cache
/// API.
#[derive(Debug, Error)]
pub enum Error {
	/// An argument was missing or of the wrong shape.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// A route file name failed to compile. Routes are dropped rather
	/// than aborting a scan; this surfaces only when a single pattern
	/// is compiled explicitly.
	#[error(transparent)]
	Pattern(#[from] minuet_router::PatternError),

	/// The OS refused to install a file watch.
	#[error(transparent)]
	Watch(#[from] minuet_router::WatchError),

	/// The host component invocation failed; the message is the
	/// host's.
	#[error("render failed: {0}")]
	Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;
