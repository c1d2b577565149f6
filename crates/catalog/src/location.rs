use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::CatalogError;

/// Kind of place a [`Location`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
	City,
	Airport,
	Transit,
	Mall,
	University,
}

impl Category {
	/// Every category, in the order list views group them.
	pub const ALL: [Category; 5] = [
		Category::City,
		Category::Airport,
		Category::Transit,
		Category::Mall,
		Category::University,
	];

	/// The lower-case tag stored in catalog documents and matched by search.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Category::City => "city",
			Category::Airport => "airport",
			Category::Transit => "transit",
			Category::Mall => "mall",
			Category::University => "university",
		}
	}

	/// Human readable label for headings.
	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Category::City => "City",
			Category::Airport => "Airport",
			Category::Transit => "Transit station",
			Category::Mall => "Shopping mall",
			Category::University => "University",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Category {
	type Err = CatalogError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_lowercase().as_str() {
			"city" => Ok(Category::City),
			"airport" => Ok(Category::Airport),
			"transit" | "station" => Ok(Category::Transit),
			"mall" | "shopping" => Ok(Category::Mall),
			"university" | "campus" => Ok(Category::University),
			_ => Err(CatalogError::UnknownCategory {
				value: value.to_string(),
			}),
		}
	}
}

impl Serialize for Category {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for Category {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		raw.parse().map_err(serde::de::Error::custom)
	}
}

/// A named place riders can choose as an origin or destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
	/// Stable identifier, unique within a catalog.
	pub id: String,
	/// Display name. May contain accented characters.
	pub name: String,
	/// Province or territory code, e.g. `ON`.
	pub region: String,
	pub category: Category,
}

impl Location {
	#[must_use]
	pub fn new(
		id: impl Into<String>,
		name: impl Into<String>,
		region: impl Into<String>,
		category: Category,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			region: region.into(),
			category,
		}
	}

	/// Whether this location is a city rather than a specific venue.
	#[must_use]
	pub fn is_city(&self) -> bool {
		self.category == Category::City
	}
}
