use std::ops::Deref;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use ride_club_catalog::Catalog;

use super::commands::{SuggestionCommand, Suggestions};
use super::search;

/// Background thread that answers search queries, keeping only the newest.
///
/// Queued queries are coalesced so that only the most recent one runs, and a
/// result is discarded if a newer query arrived while it was being computed.
/// Timing (debounce, throttling) stays with the caller.
pub struct SuggestionWorker {
	command_tx: Sender<SuggestionCommand>,
	result_rx: Receiver<Suggestions>,
	latest_query_id: Arc<AtomicU64>,
	next_id: u64,
	handle: Option<JoinHandle<()>>,
}

impl SuggestionWorker {
	/// Launch the worker over `catalog`, either `&'static Catalog` or `Arc<Catalog>`.
	pub fn spawn<C>(catalog: C) -> Self
	where
		C: Deref<Target = Catalog> + Send + 'static,
	{
		let (command_tx, command_rx) = mpsc::channel();
		let (result_tx, result_rx) = mpsc::channel();
		let latest_query_id = Arc::new(AtomicU64::new(0));
		let thread_latest = Arc::clone(&latest_query_id);

		let handle = thread::Builder::new()
			.name("ride-club-suggestions".into())
			.spawn(move || worker_loop(catalog, command_rx, result_tx, thread_latest))
			.ok();
		if handle.is_none() {
			tracing::error!("failed to spawn suggestion worker thread");
		}

		Self {
			command_tx,
			result_rx,
			latest_query_id,
			next_id: 0,
			handle,
		}
	}

	/// Queue `query` and return the id its suggestions will carry.
	pub fn submit(&mut self, query: impl Into<String>) -> u64 {
		self.next_id += 1;
		let id = self.next_id;
		self.latest_query_id.store(id, Ordering::Release);
		let command = SuggestionCommand::Query {
			id,
			query: query.into(),
		};
		if self.command_tx.send(command).is_err() {
			tracing::warn!(id, "suggestion worker is not running");
		}
		id
	}

	/// Id of the most recently submitted query, `0` before the first submit.
	#[must_use]
	pub fn latest_id(&self) -> u64 {
		self.latest_query_id.load(Ordering::Acquire)
	}

	/// Block until the next result arrives. `None` once the worker has stopped.
	pub fn recv(&self) -> Option<Suggestions> {
		self.result_rx.recv().ok()
	}

	/// Wait up to `timeout` for the next result.
	pub fn recv_timeout(&self, timeout: Duration) -> Option<Suggestions> {
		self.result_rx.recv_timeout(timeout).ok()
	}

	pub fn try_recv(&self) -> Option<Suggestions> {
		self.result_rx.try_recv().ok()
	}

	/// Stop the worker and wait for its thread to exit.
	pub fn shutdown(self) {
		drop(self);
	}
}

impl Drop for SuggestionWorker {
	fn drop(&mut self) {
		let _ = self.command_tx.send(SuggestionCommand::Shutdown);
		if let Some(handle) = self.handle.take()
			&& handle.join().is_err()
		{
			tracing::error!("suggestion worker panicked");
		}
	}
}

fn worker_loop<C>(
	catalog: C,
	command_rx: Receiver<SuggestionCommand>,
	result_tx: Sender<Suggestions>,
	latest_query_id: Arc<AtomicU64>,
) where
	C: Deref<Target = Catalog>,
{
	while let Ok(command) = command_rx.recv() {
		let Some((id, query)) = coalesce(command, &command_rx) else {
			break;
		};
		if is_stale(id, &latest_query_id) {
			continue;
		}

		let locations = search(&catalog, &query).into_iter().cloned().collect();

		if is_stale(id, &latest_query_id) {
			tracing::trace!(id, "dropping superseded suggestions");
			continue;
		}
		if result_tx.send(Suggestions { id, query, locations }).is_err() {
			break;
		}
	}
	tracing::debug!("suggestion worker stopped");
}

/// Collapse every queued command into the newest query. `None` means shut down.
fn coalesce(
	first: SuggestionCommand,
	command_rx: &Receiver<SuggestionCommand>,
) -> Option<(u64, String)> {
	let mut pending = match first {
		SuggestionCommand::Query { id, query } => (id, query),
		SuggestionCommand::Shutdown => return None,
	};
	loop {
		match command_rx.try_recv() {
			Ok(SuggestionCommand::Query { id, query }) => {
				tracing::trace!(skipped = pending.0, id, "coalescing queued query");
				pending = (id, query);
			}
			Ok(SuggestionCommand::Shutdown) => return None,
			Err(_) => return Some(pending),
		}
	}
}

fn is_stale(id: u64, latest_query_id: &AtomicU64) -> bool {
	id < latest_query_id.load(Ordering::Acquire)
}
