//! Pages-directory scanning and route table construction.

use std::path::Path;
use std::sync::Arc;

use walkdir::WalkDir;

use crate::pattern::compile_route_pattern;
use crate::route::{Route, SegmentKind};

const PAGE_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

// "/users/[id].jsx" relative to the pages dir becomes "/users/[id]":
// extension dropped, separators normalized, "/index" stripped, leading
// slash added, trailing slash removed on non-root routes.
fn route_for_relative_path(rel: &Path) -> String {
	let no_ext = rel.with_extension("");
	let mut route = no_ext
		.components()
		.map(|c| c.as_os_str().to_string_lossy())
		.collect::<Vec<_>>()
		.join("/");

	if route == "index" {
		route.clear();
	} else if route.ends_with("/index") {
		route.truncate(route.len() - "/index".len());
	}

	let mut route = format!("/{}", route);
	if route.len() > 1 && route.ends_with('/') {
		route.pop();
	}
	route
}

fn build_route(route: String, file_path: &Path) -> Option<Arc<Route>> {
	let compiled = match compile_route_pattern(&route) {
		Ok(compiled) => compiled,
		Err(err) => {
			tracing::warn!(route = %route, file = %file_path.display(), error = %err, "dropping malformed route");
			return None;
		}
	};
	Some(Arc::new(Route {
		is_dynamic: !compiled.param_names.is_empty(),
		path: route,
		file_path: file_path.to_path_buf(),
		segments: compiled.segments,
		param_names: compiled.param_names,
		regex: compiled.regex,
	}))
}

/// Enumerate page files under `pages_dir` and build the sorted route
/// table. Malformed routes are dropped and logged; a missing directory
/// yields an empty table.
pub(crate) fn scan_pages_dir(pages_dir: &Path) -> Vec<Arc<Route>> {
	let mut routes: Vec<Arc<Route>> = Vec::new();

	for entry in WalkDir::new(pages_dir).into_iter().filter_map(|e| e.ok()) {
		if !entry.file_type().is_file() {
			continue;
		}
		let path = entry.path();
		let has_page_ext = path
			.extension()
			.and_then(|e| e.to_str())
			.map(|e| PAGE_EXTENSIONS.contains(&e))
			.unwrap_or(false);
		if !has_page_ext {
			continue;
		}
		let Ok(rel) = path.strip_prefix(pages_dir) else {
			continue;
		};
		let route = route_for_relative_path(rel);
		if let Some(route) = build_route(route, path) {
			routes.push(route);
		}
	}

	sort_routes(&mut routes);
	routes
}

// Most specific first: per-segment kind rank descending, static text
// ascending on rank ties, then fewer segments, then path order.
fn sort_routes(routes: &mut [Arc<Route>]) {
	routes.sort_by(|a, b| {
		for (sa, sb) in a.segments.iter().zip(b.segments.iter()) {
			let (ra, rb) = (sa.kind.rank(), sb.kind.rank());
			if ra != rb {
				return rb.cmp(&ra);
			}
			if sa.kind == SegmentKind::Static
				&& sb.kind == SegmentKind::Static
				&& sa.text != sb.text
			{
				return sa.text.cmp(&sb.text);
			}
		}
		a.segments
			.len()
			.cmp(&b.segments.len())
			.then_with(|| a.path.cmp(&b.path))
	});
}
