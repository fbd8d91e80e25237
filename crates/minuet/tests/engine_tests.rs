// End-to-end render flow with a scripted host invoker.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use minuet::{ComponentInvoker, Engine, EngineConfig, Error, Result};
use rstest::rstest;
use tempfile::TempDir;

struct CountingInvoker {
	calls: Arc<AtomicUsize>,
}

impl ComponentInvoker for CountingInvoker {
	fn invoke(&self, module_path: &str, props_json: &str) -> Result<String> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		Ok(format!("<html>{}|{}</html>", module_path, props_json))
	}
}

struct FailingInvoker;

impl ComponentInvoker for FailingInvoker {
	fn invoke(&self, _module_path: &str, _props_json: &str) -> Result<String> {
		Err(Error::Render("component threw".to_string()))
	}
}

fn write_page(root: &Path, rel: &str) {
	let path = root.join(rel);
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).expect("create page dir");
	}
	fs::write(&path, "module.exports = () => null;\n").expect("write page");
}

fn engine_with_counter(files: &[&str]) -> (TempDir, Engine, Arc<AtomicUsize>) {
	let dir = TempDir::new().expect("temp pages dir");
	for file in files {
		write_page(dir.path(), file);
	}
	let calls = Arc::new(AtomicUsize::new(0));
	let invoker = CountingInvoker {
		calls: Arc::clone(&calls),
	};
	let engine = Engine::new(dir.path(), Box::new(invoker));
	(dir, engine, calls)
}

#[test]
fn test_miss_renders_and_second_request_hits_cache() {
	let (_dir, engine, calls) = engine_with_counter(&["index.jsx"]);

	let first = engine
		.render_page("/", "{}")
		.expect("render ok")
		.expect("route matched");
	assert!(!first.cached);
	assert!(first.html.starts_with("<html>"));
	assert_eq!(calls.load(Ordering::SeqCst), 1);

	let second = engine
		.render_page("/", "{}")
		.expect("render ok")
		.expect("route matched");
	assert!(second.cached);
	assert_eq!(second.html, first.html);
	assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_distinct_props_render_separately() {
	let (_dir, engine, calls) = engine_with_counter(&["index.jsx"]);

	engine.render_page("/", "{\"a\":1}").expect("ok");
	engine.render_page("/", "{\"a\":2}").expect("ok");
	assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_unmatched_url_is_none_without_invoking() {
	let (_dir, engine, calls) = engine_with_counter(&["index.jsx"]);

	let result = engine.render_page("/missing", "{}").expect("no error");
	assert!(result.is_none());
	assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_params_are_percent_decoded() {
	let (_dir, engine, _calls) = engine_with_counter(&["users/[id].jsx"]);

	let page = engine
		.render_page("/users/a%20b", "{}")
		.expect("render ok")
		.expect("route matched");
	assert_eq!(page.params.get("id").map(String::as_str), Some("a b"));
}

#[test]
fn test_empty_props_normalize_to_object() {
	let (_dir, engine, _calls) = engine_with_counter(&["index.jsx"]);

	let page = engine
		.render_page("/", "")
		.expect("render ok")
		.expect("route matched");
	assert!(page.html.contains("|{}<"));
}

#[rstest]
#[case("not json")]
#[case("{\"open\":")]
#[case("[1,")]
fn test_malformed_props_are_invalid_argument(#[case] props: &str) {
	let (_dir, engine, calls) = engine_with_counter(&["index.jsx"]);

	let err = engine.render_page("/", props).unwrap_err();
	assert!(matches!(err, Error::InvalidArgument(_)));
	assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_failed_render_propagates_and_is_not_cached() {
	let dir = TempDir::new().expect("temp pages dir");
	write_page(dir.path(), "index.jsx");
	let engine = Engine::new(dir.path(), Box::new(FailingInvoker));

	let err = engine.render_page("/", "{}").unwrap_err();
	assert!(matches!(err, Error::Render(_)));
	assert!(err.to_string().contains("component threw"));
	assert!(engine.cache().is_empty());
}

#[test]
fn test_invalidate_clears_cache_and_rescans() {
	let (dir, engine, calls) = engine_with_counter(&["index.jsx"]);

	engine.render_page("/", "{}").expect("ok");
	assert_eq!(engine.cache().len(), 1);

	write_page(dir.path(), "fresh.jsx");
	engine.invalidate();

	assert!(engine.cache().is_empty());
	let fresh = engine
		.render_page("/fresh", "{}")
		.expect("render ok")
		.expect("new page routable");
	assert!(!fresh.cached);

	// The old URL re-renders after invalidation.
	engine.render_page("/", "{}").expect("ok");
	assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_cache_capacity_bounds_rendered_pages() {
	let dir = TempDir::new().expect("temp pages dir");
	write_page(dir.path(), "[slug].jsx");
	let calls = Arc::new(AtomicUsize::new(0));
	let engine = Engine::with_config(
		dir.path(),
		Box::new(CountingInvoker {
			calls: Arc::clone(&calls),
		}),
		EngineConfig { cache_capacity: 2 },
	);

	engine.render_page("/a", "{}").expect("ok");
	engine.render_page("/b", "{}").expect("ok");
	engine.render_page("/c", "{}").expect("ok"); // evicts /a
	assert_eq!(calls.load(Ordering::SeqCst), 3);

	engine.render_page("/b", "{}").expect("ok"); // still cached
	assert_eq!(calls.load(Ordering::SeqCst), 3);

	engine.render_page("/a", "{}").expect("ok"); // re-rendered
	assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn test_parallel_requests_share_the_engine() {
	let (_dir, engine, calls) = engine_with_counter(&["users/[id].jsx"]);
	let engine = Arc::new(engine);

	let mut handles = Vec::new();
	for t in 0..4 {
		let engine = Arc::clone(&engine);
		handles.push(std::thread::spawn(move || {
			for i in 0..50 {
				let url = format!("/users/{}", (t * 50) + i);
				let page = engine
					.render_page(&url, "{}")
					.expect("render ok")
					.expect("route matched");
				assert!(page.html.contains("[id].jsx"));
			}
		}));
	}
	for handle in handles {
		handle.join().expect("request thread panicked");
	}
	assert_eq!(calls.load(Ordering::SeqCst), 200);
}
