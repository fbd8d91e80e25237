//! Thread-safe cache of rendered page HTML.

use parking_lot::Mutex;

use crate::LruCache;

/// Bounded cache of rendered HTML keyed by request fingerprint.
///
/// Keys are opaque strings chosen by the caller, typically the normalized
/// URL combined with serialized render inputs. Every operation is atomic
/// under a single lock, so the cache is safe to share between arbitrary
/// request handlers. There is no iteration API.
///
/// # Examples
///
/// ```
/// use minuet_cache::SsrCache;
///
/// let cache = SsrCache::new(128);
/// cache.set("/about::{}", "<html>…</html>");
/// assert_eq!(cache.get("/about::{}").as_deref(), Some("<html>…</html>"));
/// assert_eq!(cache.get("/missing"), None);
/// ```
pub struct SsrCache {
	inner: Mutex<LruCache<String, String>>,
}

impl SsrCache {
	/// Create a cache holding at most `capacity` rendered pages.
	pub fn new(capacity: usize) -> Self {
		Self {
			inner: Mutex::new(LruCache::new(capacity)),
		}
	}

	/// Fetch the HTML cached under `key`, marking it recently used.
	pub fn get(&self, key: &str) -> Option<String> {
		self.inner.lock().get(&key.to_string()).cloned()
	}

	/// Store `value` under `key`, evicting the least recently used page
	/// when the cache is full.
	pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
		self.inner.lock().put(key.into(), value.into());
	}

	/// Drop the entry under `key`, if any.
	pub fn remove(&self, key: &str) {
		self.inner.lock().remove(&key.to_string());
	}

	/// Drop every cached page.
	pub fn clear(&self) {
		self.inner.lock().clear();
	}

	/// Number of cached pages.
	pub fn len(&self) -> usize {
		self.inner.lock().len()
	}

	/// True when nothing is cached.
	pub fn is_empty(&self) -> bool {
		self.inner.lock().is_empty()
	}
}
