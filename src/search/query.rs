use std::fmt;

/// A query ready for matching: trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
	normalized: String,
}

impl SearchQuery {
	/// Normalize raw input. Returns `None` when nothing usable is left after trimming.
	#[must_use]
	pub fn parse(raw: &str) -> Option<Self> {
		let trimmed = raw.trim();
		if trimmed.is_empty() {
			return None;
		}
		Some(Self {
			normalized: trimmed.to_lowercase(),
		})
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.normalized
	}
}

impl fmt::Display for SearchQuery {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.normalized)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_input_has_no_query() {
		assert!(SearchQuery::parse("").is_none());
		assert!(SearchQuery::parse("   ").is_none());
		assert!(SearchQuery::parse("\t\n").is_none());
	}

	#[test]
	fn input_is_trimmed_and_lower_cased() {
		let query = SearchQuery::parse("  ToR ").expect("usable query");
		assert_eq!(query.as_str(), "tor");
	}

	#[test]
	fn accented_input_is_lower_cased() {
		let query = SearchQuery::parse("MONTRÉAL").expect("usable query");
		assert_eq!(query.as_str(), "montréal");
	}
}
