//! The per-request render flow: match, consult the cache, invoke the
//! host, store.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

use minuet_cache::SsrCache;
use minuet_core::url_decode;
use minuet_router::RouteMatcher;

use crate::bridge::ComponentInvoker;
use crate::error::{Error, Result};

/// Engine tuning knobs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
	/// Capacity of the rendered-HTML cache.
	pub cache_capacity: usize,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			cache_capacity: 1024,
		}
	}
}

/// A rendered page, with the route information that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
	pub html: String,
	pub file_path: PathBuf,
	/// Captured route parameters, percent-decoded.
	pub params: HashMap<String, String>,
	/// True when the HTML came out of the cache.
	pub cached: bool,
}

/// Ties the route table, the render cache, and the host invoker into
/// the request flow.
///
/// # Examples
///
/// ```no_run
/// use minuet::{ComponentInvoker, Engine, Result};
///
/// struct Host;
/// impl ComponentInvoker for Host {
///     fn invoke(&self, module_path: &str, props_json: &str) -> Result<String> {
///         // hand off to the embedded runtime…
///         # let _ = (module_path, props_json);
///         Ok("<html></html>".to_string())
///     }
/// }
///
/// let engine = Engine::new("pages", Box::new(Host));
/// let page = engine.render_page("/users/42", "{}")?;
/// # Ok::<(), minuet::Error>(())
/// ```
pub struct Engine {
	matcher: RouteMatcher,
	cache: SsrCache,
	invoker: Box<dyn ComponentInvoker>,
}

impl Engine {
	/// Scan `pages_dir` and stand up an engine with default capacities.
	pub fn new(pages_dir: impl Into<PathBuf>, invoker: Box<dyn ComponentInvoker>) -> Self {
		Self::with_config(pages_dir, invoker, EngineConfig::default())
	}

	pub fn with_config(
		pages_dir: impl Into<PathBuf>,
		invoker: Box<dyn ComponentInvoker>,
		config: EngineConfig,
	) -> Self {
		Self {
			matcher: RouteMatcher::new(pages_dir),
			cache: SsrCache::new(config.cache_capacity),
			invoker,
		}
	}

	/// The route matcher backing this engine.
	pub fn matcher(&self) -> &RouteMatcher {
		&self.matcher
	}

	/// The rendered-HTML cache backing this engine.
	pub fn cache(&self) -> &SsrCache {
		&self.cache
	}

	/// Render the page for `url`, consulting the cache first.
	///
	/// Returns `Ok(None)` when no route matches. `props_json` must be a
	/// JSON value (empty input normalizes to `{}`); anything else is an
	/// [`Error::InvalidArgument`]. Host failures propagate and are
	/// never cached.
	pub fn render_page(&self, url: &str, props_json: &str) -> Result<Option<RenderedPage>> {
		let props = normalize_props(props_json)?;

		let Some(matched) = self.matcher.match_url(url) else {
			return Ok(None);
		};
		let params: HashMap<String, String> = matched
			.params
			.into_iter()
			.map(|(name, value)| (name, url_decode(&value)))
			.collect();

		let key = fingerprint(url, &props);
		if let Some(html) = self.cache.get(&key) {
			tracing::debug!(url, "render cache hit");
			return Ok(Some(RenderedPage {
				html,
				file_path: matched.file_path,
				params,
				cached: true,
			}));
		}

		let module_path = matched.file_path.to_string_lossy();
		let started = Instant::now();
		let html = self.invoker.invoke(&module_path, &props)?;
		tracing::debug!(url, elapsed_ms = started.elapsed().as_millis() as u64, "rendered page");

		self.cache.set(key, html.clone());
		Ok(Some(RenderedPage {
			html,
			file_path: matched.file_path,
			params,
			cached: false,
		}))
	}

	/// Drop every cached render and rebuild the route table. Wired to
	/// the file watcher by the runtime.
	pub fn invalidate(&self) {
		self.cache.clear();
		self.matcher.rescan();
	}
}

fn normalize_props(props_json: &str) -> Result<String> {
	let trimmed = props_json.trim();
	if trimmed.is_empty() {
		return Ok("{}".to_string());
	}
	serde_json::from_str::<serde_json::Value>(trimmed)
		.map_err(|err| Error::InvalidArgument(format!("props must be valid JSON: {}", err)))?;
	Ok(trimmed.to_string())
}

// Cache key: the normalized URL combined with the serialized render
// inputs.
fn fingerprint(url: &str, props: &str) -> String {
	format!("{}::{}", url, props)
}
