use ride_club_catalog::Location;

/// Requests understood by the suggestion worker.
#[derive(Debug)]
pub(crate) enum SuggestionCommand {
	/// Run a search for the provided query.
	Query {
		/// Identifier that lets the caller correlate responses with the originating query.
		id: u64,
		/// Raw user input; normalization happens on the worker.
		query: String,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Ranked suggestions emitted back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
	/// Identifier returned by [`SuggestionWorker::submit`](super::SuggestionWorker::submit).
	pub id: u64,
	/// The query exactly as submitted.
	pub query: String,
	pub locations: Vec<Location>,
}
