// File watcher behavior against a real directory.

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use minuet_router::{FileWatcher, WatcherConfig};
use tempfile::TempDir;

fn fast_config() -> WatcherConfig {
	WatcherConfig {
		coalesce_interval: Duration::from_millis(50),
		recursive: true,
	}
}

#[test]
fn test_watcher_reports_modified_file() {
	let dir = TempDir::new().expect("temp dir");
	let target = dir.path().join("page.jsx");
	fs::write(&target, "before").expect("seed file");

	let (tx, rx) = mpsc::channel::<Vec<PathBuf>>();
	let mut watcher = FileWatcher::new(fast_config());
	watcher
		.start(
			dir.path(),
			Box::new(move |paths| {
				let _ = tx.send(paths);
			}),
		)
		.expect("watch installed");

	// Give the OS watch a moment to arm before mutating.
	std::thread::sleep(Duration::from_millis(100));
	fs::write(&target, "after").expect("modify file");

	let batch = rx
		.recv_timeout(Duration::from_secs(5))
		.expect("change reported within the window");
	assert!(batch.iter().any(|p| p.ends_with("page.jsx")));

	watcher.stop();
}

#[test]
fn test_watcher_coalesces_duplicate_events() {
	let dir = TempDir::new().expect("temp dir");
	let target = dir.path().join("page.jsx");
	fs::write(&target, "v0").expect("seed file");

	let (tx, rx) = mpsc::channel::<Vec<PathBuf>>();
	let mut watcher = FileWatcher::new(WatcherConfig {
		coalesce_interval: Duration::from_millis(300),
		recursive: true,
	});
	watcher
		.start(
			dir.path(),
			Box::new(move |paths| {
				let _ = tx.send(paths);
			}),
		)
		.expect("watch installed");

	std::thread::sleep(Duration::from_millis(100));
	for i in 0..5 {
		fs::write(&target, format!("v{}", i)).expect("modify file");
	}

	let batch = rx
		.recv_timeout(Duration::from_secs(5))
		.expect("batch delivered");
	let hits = batch.iter().filter(|p| p.ends_with("page.jsx")).count();
	assert_eq!(hits, 1, "duplicate events collapse into one path");

	watcher.stop();
}

#[test]
fn test_stop_joins_and_silences_the_observer() {
	let dir = TempDir::new().expect("temp dir");
	let (tx, rx) = mpsc::channel::<Vec<PathBuf>>();

	let mut watcher = FileWatcher::new(fast_config());
	watcher
		.start(
			dir.path(),
			Box::new(move |paths| {
				let _ = tx.send(paths);
			}),
		)
		.expect("watch installed");
	assert!(watcher.is_running());

	watcher.stop();
	assert!(!watcher.is_running());

	// Mutations after stop are not reported.
	fs::write(dir.path().join("late.jsx"), "x").expect("write file");
	assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());

	// Stopping again is a no-op.
	watcher.stop();
}

#[test]
fn test_restart_replaces_previous_observer() {
	let first_dir = TempDir::new().expect("temp dir");
	let second_dir = TempDir::new().expect("temp dir");

	let (tx, rx) = mpsc::channel::<Vec<PathBuf>>();
	let tx_first = tx.clone();

	let mut watcher = FileWatcher::new(fast_config());
	watcher
		.start(
			first_dir.path(),
			Box::new(move |paths| {
				let _ = tx_first.send(paths);
			}),
		)
		.expect("first watch installed");

	// Starting again implicitly stops the first observer.
	watcher
		.start(
			second_dir.path(),
			Box::new(move |paths| {
				let _ = tx.send(paths);
			}),
		)
		.expect("second watch installed");

	std::thread::sleep(Duration::from_millis(100));
	fs::write(second_dir.path().join("b.jsx"), "x").expect("write file");

	let batch = rx
		.recv_timeout(Duration::from_secs(5))
		.expect("second watch reports");
	assert!(batch.iter().any(|p| p.ends_with("b.jsx")));

	watcher.stop();
}

#[test]
fn test_start_on_missing_root_fails() {
	let dir = TempDir::new().expect("temp dir");
	let missing = dir.path().join("nope");

	let mut watcher = FileWatcher::new(fast_config());
	let result = watcher.start(&missing, Box::new(|_| {}));
	assert!(result.is_err());
	assert!(!watcher.is_running());
}
