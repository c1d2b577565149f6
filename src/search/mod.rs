//! Ranked substring search over a location catalog.
//!
//! [`search`] is a pure function: it reads the catalog, never changes it, and
//! returns at most [`MAX_RESULTS`] locations. Callers that need to drop stale
//! queries while the user types can use [`SuggestionWorker`].

mod collation;
mod commands;
mod query;
pub mod ranking;
mod worker;

use ride_club_catalog::{Catalog, Category, Location};

pub use collation::{CollationKey, compare_names};
pub use commands::Suggestions;
pub use query::SearchQuery;
pub use worker::SuggestionWorker;

use ranking::{Candidate, compare_candidates, matches};

/// Upper bound on the number of suggestions returned for a query.
pub const MAX_RESULTS: usize = 8;

/// Return the best matches for `query`, most relevant first.
///
/// A location matches when the trimmed, lower-cased query occurs in its name,
/// region or category tag. Matches whose name starts with the query come first,
/// then cities, then the rest by name. Blank queries return nothing without
/// scanning the catalog.
#[must_use]
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Location> {
	let Some(query) = SearchQuery::parse(query) else {
		return Vec::new();
	};
	search_parsed(catalog, &query)
}

pub(crate) fn search_parsed<'a>(catalog: &'a Catalog, query: &SearchQuery) -> Vec<&'a Location> {
	let mut candidates: Vec<Candidate<'a>> = catalog
		.iter()
		.filter(|location| matches(location, query))
		.map(|location| Candidate::new(location, query))
		.collect();
	let total = candidates.len();

	candidates.sort_by(compare_candidates);
	candidates.truncate(MAX_RESULTS);

	tracing::trace!(%query, total, returned = candidates.len(), "location search");
	candidates
		.into_iter()
		.map(|candidate| candidate.location)
		.collect()
}

/// Read-only view over a catalog offering search and grouped listings.
#[derive(Debug, Clone, Copy)]
pub struct LocationSearch<'a> {
	catalog: &'a Catalog,
}

impl<'a> LocationSearch<'a> {
	#[must_use]
	pub fn new(catalog: &'a Catalog) -> Self {
		Self { catalog }
	}

	#[must_use]
	pub fn catalog(&self) -> &'a Catalog {
		self.catalog
	}

	#[must_use]
	pub fn search(&self, query: &str) -> Vec<&'a Location> {
		search(self.catalog, query)
	}

	/// Every location in `category`, in catalog order.
	#[must_use]
	pub fn by_category(&self, category: Category) -> Vec<&'a Location> {
		self.catalog.by_category(category)
	}

	/// Every location in `region`, in catalog order.
	#[must_use]
	pub fn by_region(&self, region: &str) -> Vec<&'a Location> {
		self.catalog.by_region(region)
	}
}

impl LocationSearch<'static> {
	/// Search over the built-in catalog.
	#[must_use]
	pub fn builtin() -> Self {
		Self::new(Catalog::builtin())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn catalog() -> Catalog {
		Catalog::from_locations(vec![
			Location::new("stornoway", "Stornoway", "QC", Category::City),
			Location::new("yyz", "Toronto Pearson", "ON", Category::Airport),
			Location::new("toronto", "Toronto", "ON", Category::City),
			Location::new("uoft", "University of Toronto", "ON", Category::University),
			Location::new("edmonton", "Edmonton", "AB", Category::City),
			Location::new("moncton", "Moncton", "NB", Category::City),
		])
		.expect("valid catalog")
	}

	fn ids<'a>(locations: &[&'a Location]) -> Vec<&'a str> {
		locations.iter().map(|location| location.id.as_str()).collect()
	}

	#[test]
	fn blank_queries_return_nothing() {
		let catalog = catalog();
		assert!(search(&catalog, "").is_empty());
		assert!(search(&catalog, "   ").is_empty());
	}

	#[test]
	fn unmatched_queries_return_nothing() {
		assert!(search(&catalog(), "zzzzz").is_empty());
	}

	#[test]
	fn ranks_prefix_then_city_then_name() {
		let catalog = catalog();
		assert_eq!(
			ids(&search(&catalog, "tor")),
			vec!["toronto", "yyz", "stornoway", "uoft"]
		);
	}

	#[test]
	fn region_and_category_fields_match() {
		let catalog = catalog();
		assert_eq!(ids(&search(&catalog, "ab")), vec!["edmonton"]);
		assert_eq!(ids(&search(&catalog, "airport")), vec!["yyz"]);
	}

	#[test]
	fn query_is_trimmed_and_case_folded() {
		let catalog = catalog();
		assert_eq!(search(&catalog, "  TOR "), search(&catalog, "tor"));
	}

	#[test]
	fn results_are_capped() {
		let locations = (0..20)
			.map(|n| Location::new(format!("id-{n}"), format!("Place {n:02}"), "ON", Category::City))
			.collect();
		let catalog = Catalog::from_locations(locations).expect("valid catalog");
		let results = search(&catalog, "place");
		assert_eq!(results.len(), MAX_RESULTS);
		assert_eq!(results[0].name, "Place 00");
		assert_eq!(results[MAX_RESULTS - 1].name, "Place 07");
	}

	#[test]
	fn equal_names_keep_catalog_order() {
		let catalog = Catalog::from_locations(vec![
			Location::new("london-on", "London", "ON", Category::City),
			Location::new("london-uk", "London", "UK", Category::City),
		])
		.expect("valid catalog");
		assert_eq!(ids(&search(&catalog, "london")), vec!["london-on", "london-uk"]);
	}

	#[test]
	fn location_search_delegates_to_catalog() {
		let catalog = catalog();
		let view = LocationSearch::new(&catalog);
		assert_eq!(ids(&view.by_region("ON")), vec!["yyz", "toronto", "uoft"]);
		assert_eq!(ids(&view.by_category(Category::Airport)), vec!["yyz"]);
		assert_eq!(view.search("edm").len(), 1);
	}
}
