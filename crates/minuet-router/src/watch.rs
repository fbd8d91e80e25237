//! File-system change watching.
//!
//! An OS-native recursive watch (via `notify`) feeds a single observer
//! thread that coalesces raw events into deduplicated batches of paths
//! and hands them to the sink. The sink runs on the observer thread.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use thiserror::Error;

/// The OS refused to install the watch.
#[derive(Debug, Error)]
pub enum WatchError {
	#[error("failed to install file watch: {0}")]
	Install(#[from] notify::Error),
}

/// Watcher tuning knobs.
#[derive(Debug, Clone)]
pub struct WatcherConfig {
	/// How long raw events accumulate before a batch is flushed to the
	/// sink.
	pub coalesce_interval: Duration,
	/// Watch subdirectories too.
	pub recursive: bool,
}

impl Default for WatcherConfig {
	fn default() -> Self {
		Self {
			coalesce_interval: Duration::from_millis(500),
			recursive: true,
		}
	}
}

/// Callback receiving each coalesced batch of changed paths.
pub type ChangeSink = Box<dyn FnMut(Vec<PathBuf>) + Send>;

struct Observer {
	// Held so the OS watch stays alive; dropping it also closes the
	// event channel and unblocks the thread.
	_watcher: RecommendedWatcher,
	stop: Arc<AtomicBool>,
	thread: JoinHandle<()>,
}

/// Watches a directory tree and reports changed files in coalesced
/// batches.
///
/// `start` on a running watcher stops the previous observer first.
/// `stop` blocks until the observer thread has exited and is always
/// safe to call.
///
/// # Examples
///
/// ```no_run
/// use minuet_router::{FileWatcher, WatcherConfig};
///
/// let mut watcher = FileWatcher::new(WatcherConfig::default());
/// watcher
///     .start("pages".as_ref(), Box::new(|paths| {
///         for path in paths {
///             println!("changed: {}", path.display());
///         }
///     }))
///     .expect("watch installed");
/// // …
/// watcher.stop();
/// ```
pub struct FileWatcher {
	config: WatcherConfig,
	observer: Option<Observer>,
}

impl FileWatcher {
	pub fn new(config: WatcherConfig) -> Self {
		Self {
			config,
			observer: None,
		}
	}

	/// Begin watching `root`, delivering batches to `sink`.
	pub fn start(&mut self, root: &Path, mut sink: ChangeSink) -> Result<(), WatchError> {
		self.stop();

		let (tx, rx) = mpsc::channel::<PathBuf>();
		let mut watcher =
			notify::recommended_watcher(move |res: Result<Event, notify::Error>| match res {
				Ok(event) => {
					if matches!(
						event.kind,
						EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
					) {
						for path in event.paths {
							let _ = tx.send(path);
						}
					}
				}
				Err(err) => {
					tracing::warn!(error = %err, "file watch event error");
				}
			})?;

		let mode = if self.config.recursive {
			RecursiveMode::Recursive
		} else {
			RecursiveMode::NonRecursive
		};
		watcher.watch(root, mode)?;

		let stop = Arc::new(AtomicBool::new(false));
		let interval = self.config.coalesce_interval;
		let thread_stop = Arc::clone(&stop);
		let thread = std::thread::spawn(move || {
			let mut disconnected = false;
			while !disconnected && !thread_stop.load(Ordering::Relaxed) {
				let deadline = Instant::now() + interval;
				let mut seen: HashSet<PathBuf> = HashSet::new();
				let mut batch: Vec<PathBuf> = Vec::new();

				loop {
					let now = Instant::now();
					if now >= deadline {
						break;
					}
					match rx.recv_timeout(deadline - now) {
						Ok(path) => {
							if seen.insert(path.clone()) {
								batch.push(path);
							}
						}
						Err(RecvTimeoutError::Timeout) => break,
						Err(RecvTimeoutError::Disconnected) => {
							disconnected = true;
							break;
						}
					}
				}

				if !batch.is_empty() && !thread_stop.load(Ordering::Relaxed) {
					sink(batch);
				}
			}
		});

		self.observer = Some(Observer {
			_watcher: watcher,
			stop,
			thread,
		});
		Ok(())
	}

	/// True while an observer thread is running.
	pub fn is_running(&self) -> bool {
		self.observer.is_some()
	}

	/// Stop watching and join the observer thread.
	pub fn stop(&mut self) {
		if let Some(observer) = self.observer.take() {
			observer.stop.store(true, Ordering::Relaxed);
			// Dropping the watch closes the event channel, which wakes
			// the observer even mid-interval.
			drop(observer._watcher);
			if observer.thread.join().is_err() {
				tracing::warn!("watch observer thread panicked");
			}
		}
	}
}

impl Drop for FileWatcher {
	fn drop(&mut self) {
		self.stop();
	}
}
