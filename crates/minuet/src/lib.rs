//! Native core of a minimal server-side-rendered web framework with
//! file-system page routing.
//!
//! The host runtime calls into this crate on every request:
//!
//! - [`RouteMatcher`] indexes a pages directory and matches URLs
//!   against the derived patterns, most specific first.
//! - [`jsx_to_module`] rewrites markup in page sources into plain
//!   `React.createElement(…)` calls at load time.
//! - [`markdown_to_html`] and [`render_template`] assist page
//!   rendering.
//! - [`SsrCache`] keeps rendered HTML keyed by request fingerprint.
//! - [`FileWatcher`] reports source changes so caches and routes can be
//!   invalidated.
//! - [`Engine`] ties the pieces into the match → cache → render flow,
//!   calling back into the host through [`ComponentInvoker`].
//!
//! Everything is synchronous; the watcher's observer is the only
//! background thread.

mod bridge;
mod engine;
mod error;

pub use bridge::{build_render_script, ComponentInvoker, JsxModuleLoader, ModuleLoader};
pub use engine::{Engine, EngineConfig, RenderedPage};
pub use error::{Error, Result};

pub use minuet_cache::{LruCache, SsrCache};
pub use minuet_core::{html_escape, url_decode};
pub use minuet_jsx::jsx_to_module;
pub use minuet_render::{markdown_to_html, render_template};
pub use minuet_router::{
	FileWatcher, PatternError, Route, RouteMatch, RouteMatcher, RouteSegment, SegmentKind,
	WatchError, WatcherConfig,
};
