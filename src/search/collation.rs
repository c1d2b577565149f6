//! Locale-aware ordering of display names.
//!
//! Names compare in three levels: base letters first (accents and case
//! ignored), then accents (unaccented before accented), then case (lower
//! before upper). Exact byte order only separates names that are identical
//! under all three.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Precomputed sort key for a single name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
	base: String,
	accents: String,
	case: Vec<bool>,
	raw: String,
}

impl CollationKey {
	#[must_use]
	pub fn new(name: &str) -> Self {
		let base = name
			.nfd()
			.filter(|c| !is_combining_mark(*c))
			.flat_map(char::to_lowercase)
			.collect();
		let accents = name.nfd().flat_map(char::to_lowercase).collect();
		let case = name
			.nfd()
			.filter(|c| !is_combining_mark(*c))
			.map(char::is_uppercase)
			.collect();

		Self {
			base,
			accents,
			case,
			raw: name.to_string(),
		}
	}
}

/// Compare two names the way a reader expects them listed.
#[must_use]
pub fn compare_names(left: &str, right: &str) -> Ordering {
	CollationKey::new(left).cmp(&CollationKey::new(right))
}
