//! File-system page routing for minuet.
//!
//! Pages are plain files under a pages directory; their names compile
//! into route patterns:
//!
//! | File | Route | Matches |
//! |------|-------|---------|
//! | `index.jsx` | `/` | exactly `/` |
//! | `users/[id].jsx` | `/users/[id]` | one component, captured as `id` |
//! | `docs/[...path].jsx` | `/docs/[...path]` | one or more components |
//! | `shop/[[...seg]].jsx` | `/shop/[[...seg]]` | zero or more components |
//!
//! Matching tries routes most specific first and memoizes recent
//! lookups. [`FileWatcher`] reports file changes so the runtime can
//! trigger a [`RouteMatcher::rescan`] and drop stale render caches.

mod matcher;
mod pattern;
mod route;
mod scan;
mod watch;

pub use matcher::{RouteMatch, RouteMatcher, DEFAULT_ROUTE_CACHE_CAPACITY};
pub use pattern::PatternError;
pub use route::{Route, RouteSegment, SegmentKind};
pub use watch::{ChangeSink, FileWatcher, WatchError, WatcherConfig};
