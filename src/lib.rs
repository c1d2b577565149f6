//! Location search for the Ride Club ridesharing clients.
//!
//! The root module re-exports the catalog types and the search entry points so
//! embedders can look up origins and destinations without digging through the
//! module hierarchy.

pub mod api;
pub mod app_dirs;
pub mod logging;
pub mod search;

pub use ride_club_catalog::{Catalog, CatalogError, Category, Location};

pub use crate::search::{
	LocationSearch, MAX_RESULTS, SearchQuery, SuggestionWorker, Suggestions, search,
};
