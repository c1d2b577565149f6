use std::sync::OnceLock;

use crate::Catalog;

const BUILTIN_CATALOG: &str = include_str!("../data/locations.toml");

impl Catalog {
	/// The catalog compiled into this crate, parsed on first use.
	pub fn builtin() -> &'static Catalog {
		static BUILTIN: OnceLock<Catalog> = OnceLock::new();
		BUILTIN.get_or_init(|| {
			let catalog = Catalog::from_toml_str(BUILTIN_CATALOG)
				.unwrap_or_else(|error| panic!("failed to load built-in catalog: {error}"));
			tracing::debug!(locations = catalog.len(), "loaded built-in catalog");
			catalog
		})
	}
}
