//! URL → route matching with a bounded memo of recent lookups.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use minuet_cache::LruCache;
use parking_lot::{Mutex, RwLock};

use crate::route::Route;
use crate::scan::scan_pages_dir;

/// Default capacity of the URL → route memo.
pub const DEFAULT_ROUTE_CACHE_CAPACITY: usize = 256;

/// A successful route match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
	/// The page file that handles the URL.
	pub file_path: PathBuf,
	/// Captured parameters. A name bound by an optional catch-all that
	/// captured nothing is absent from the map.
	pub params: HashMap<String, String>,
}

struct MatcherState {
	routes: Vec<Arc<Route>>,
	// Memo of recent lookups. Living inside the RwLock'd state, it is
	// swapped together with the table on rescan, so readers never see a
	// route set paired with another generation's memo.
	cache: Mutex<LruCache<String, Arc<Route>>>,
}

impl MatcherState {
	fn build(pages_dir: &std::path::Path, cache_capacity: usize) -> Self {
		Self {
			routes: scan_pages_dir(pages_dir),
			cache: Mutex::new(LruCache::new(cache_capacity)),
		}
	}
}

/// Matches request URLs against the routes derived from a pages
/// directory.
///
/// The directory is scanned on construction. [`match_url`](Self::match_url)
/// takes a shared lock; [`rescan`](Self::rescan) rebuilds the table and
/// swaps it in under the exclusive lock, so concurrent readers observe
/// either the old or the new table, never a mix.
///
/// # Examples
///
/// ```no_run
/// use minuet_router::RouteMatcher;
///
/// let matcher = RouteMatcher::new("pages");
/// if let Some(m) = matcher.match_url("/users/42") {
///     println!("{} with {:?}", m.file_path.display(), m.params);
/// }
/// ```
pub struct RouteMatcher {
	pages_dir: PathBuf,
	cache_capacity: usize,
	state: RwLock<MatcherState>,
}

impl RouteMatcher {
	/// Scan `pages_dir` and build the route table. A missing directory
	/// produces an empty table rather than an error.
	pub fn new(pages_dir: impl Into<PathBuf>) -> Self {
		Self::with_cache_capacity(pages_dir, DEFAULT_ROUTE_CACHE_CAPACITY)
	}

	/// Like [`new`](Self::new) with an explicit memo capacity.
	pub fn with_cache_capacity(pages_dir: impl Into<PathBuf>, cache_capacity: usize) -> Self {
		let pages_dir = pages_dir.into();
		let state = MatcherState::build(&pages_dir, cache_capacity);
		Self {
			pages_dir,
			cache_capacity,
			state: RwLock::new(state),
		}
	}

	/// The pages directory this matcher scans.
	pub fn pages_dir(&self) -> &std::path::Path {
		&self.pages_dir
	}

	/// Number of routes in the current table.
	pub fn route_count(&self) -> usize {
		self.state.read().routes.len()
	}

	/// Route paths in priority order. Primarily useful for diagnostics.
	pub fn route_paths(&self) -> Vec<String> {
		self.state.read().routes.iter().map(|r| r.path.clone()).collect()
	}

	/// Match `url` against the table, most specific route first.
	///
	/// The URL must already be reduced to its path; query and fragment
	/// handling belong to the caller, as does percent-decoding of the
	/// captured parameter values.
	pub fn match_url(&self, url: &str) -> Option<RouteMatch> {
		let state = self.state.read();

		// Memoized lookup. Static entries revalidate by equality,
		// dynamic ones by re-running their pattern; a stale entry falls
		// through to the table.
		{
			let mut cache = state.cache.lock();
			if let Some(route) = cache.get(&url.to_string()).cloned() {
				if let Some(found) = try_route(&route, url) {
					return Some(found);
				}
				cache.remove(&url.to_string());
			}
		}

		for route in &state.routes {
			if let Some(found) = try_route(route, url) {
				state
					.cache
					.lock()
					.put(url.to_string(), Arc::clone(route));
				return Some(found);
			}
		}

		None
	}

	/// Rebuild the route table from disk and atomically replace table
	/// and memo.
	pub fn rescan(&self) {
		let fresh = MatcherState::build(&self.pages_dir, self.cache_capacity);
		*self.state.write() = fresh;
		tracing::debug!(pages_dir = %self.pages_dir.display(), "route table rebuilt");
	}
}

fn try_route(route: &Route, url: &str) -> Option<RouteMatch> {
	if !route.is_dynamic {
		if route.path == url {
			return Some(RouteMatch {
				file_path: route.file_path.clone(),
				params: HashMap::new(),
			});
		}
		return None;
	}

	let caps = route.regex.captures(url)?;
	let mut params = HashMap::new();
	for (i, name) in route.param_names.iter().enumerate() {
		if let Some(group) = caps.get(i + 1) {
			// First occurrence wins when an author reuses a name.
			params
				.entry(name.clone())
				.or_insert_with(|| group.as_str().to_string());
		}
	}
	Some(RouteMatch {
		file_path: route.file_path.clone(),
		params,
	})
}
