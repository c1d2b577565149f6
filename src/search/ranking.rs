use std::cmp::Ordering;

use ride_club_catalog::Location;

use super::collation::{CollationKey, compare_names};
use super::query::SearchQuery;

/// Whether the query occurs in the location's name, region or category tag.
#[must_use]
pub fn matches(location: &Location, query: &SearchQuery) -> bool {
	let needle = query.as_str();
	location.name.to_lowercase().contains(needle)
		|| location.region.to_lowercase().contains(needle)
		|| location.category.as_str().contains(needle)
}

/// Whether the location's name starts with the query.
#[must_use]
pub fn is_prefix_match(location: &Location, query: &SearchQuery) -> bool {
	location.name.to_lowercase().starts_with(query.as_str())
}

#[must_use]
pub fn is_city(location: &Location) -> bool {
	location.is_city()
}

/// A matching location with its ranking facts computed once.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
	pub location: &'a Location,
	pub prefix: bool,
	pub city: bool,
	collation: CollationKey,
}

impl<'a> Candidate<'a> {
	#[must_use]
	pub fn new(location: &'a Location, query: &SearchQuery) -> Self {
		Self {
			location,
			prefix: is_prefix_match(location, query),
			city: is_city(location),
			collation: CollationKey::new(&location.name),
		}
	}
}

/// Prefix matches first, then cities, then names in reading order.
#[must_use]
pub fn compare_candidates(left: &Candidate<'_>, right: &Candidate<'_>) -> Ordering {
	right
		.prefix
		.cmp(&left.prefix)
		.then_with(|| right.city.cmp(&left.city))
		.then_with(|| left.collation.cmp(&right.collation))
}

/// Same ordering as [`compare_candidates`] for callers holding plain locations.
#[must_use]
pub fn compare_locations(query: &SearchQuery, left: &Location, right: &Location) -> Ordering {
	is_prefix_match(right, query)
		.cmp(&is_prefix_match(left, query))
		.then_with(|| is_city(right).cmp(&is_city(left)))
		.then_with(|| compare_names(&left.name, &right.name))
}

#[cfg(test)]
mod tests {
	use ride_club_catalog::Category;

	use super::*;

	fn query(raw: &str) -> SearchQuery {
		SearchQuery::parse(raw).expect("usable query")
	}

	#[test]
	fn matches_any_of_name_region_or_category() {
		let location = Location::new("yul", "Montréal-Trudeau", "QC", Category::Airport);
		assert!(matches(&location, &query("trudeau")));
		assert!(matches(&location, &query("qc")));
		assert!(matches(&location, &query("airp")));
		assert!(!matches(&location, &query("city")));
	}

	#[test]
	fn prefix_is_checked_on_name_only() {
		let location = Location::new("sfu", "Simon Fraser University", "BC", Category::University);
		assert!(is_prefix_match(&location, &query("simon")));
		assert!(!is_prefix_match(&location, &query("fraser")));
		assert!(!is_prefix_match(&location, &query("bc")));
	}

	#[test]
	fn prefix_match_beats_city() {
		let q = query("tor");
		let airport = Location::new("a", "Toronto Pearson", "ON", Category::Airport);
		let city = Location::new("b", "Stornoway", "QC", Category::City);
		assert_eq!(compare_locations(&q, &airport, &city), Ordering::Less);
	}

	#[test]
	fn city_beats_other_categories_at_equal_prefix_rank() {
		let q = query("ott");
		let mall = Location::new("a", "Ottawa Mall", "ON", Category::Mall);
		let city = Location::new("b", "Ottawa", "ON", Category::City);
		assert_eq!(compare_locations(&q, &city, &mall), Ordering::Less);
		assert_eq!(
			compare_candidates(&Candidate::new(&mall, &q), &Candidate::new(&city, &q)),
			Ordering::Greater
		);
	}

	#[test]
	fn names_break_remaining_ties() {
		let q = query("on");
		let edmonton = Location::new("a", "Edmonton", "AB", Category::City);
		let moncton = Location::new("b", "Moncton", "NB", Category::City);
		assert_eq!(compare_locations(&q, &edmonton, &moncton), Ordering::Less);
	}

	#[test]
	fn candidate_and_location_comparators_agree() {
		let q = query("l");
		let places = [
			Location::new("1", "Lévis", "QC", Category::City),
			Location::new("2", "Laval", "QC", Category::City),
			Location::new("3", "Carrefour Laval", "QC", Category::Mall),
			Location::new("4", "Université Laval", "QC", Category::University),
		];
		for left in &places {
			for right in &places {
				assert_eq!(
					compare_candidates(&Candidate::new(left, &q), &Candidate::new(right, &q)),
					compare_locations(&q, left, right),
					"{} vs {}",
					left.name,
					right.name
				);
			}
		}
	}
}
