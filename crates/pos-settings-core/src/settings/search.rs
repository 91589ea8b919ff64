//! Substring search over key, label, and description

use super::catalog::SettingsCatalog;
use super::types::{SettingDefinition, fold_case};

impl SettingsCatalog {
	/// Definitions whose key, label, or description contains `query`,
	/// ignoring case, in registration order.
	///
	/// An empty or whitespace-only query matches everything.
	pub fn search(&self, query: &str) -> Vec<&SettingDefinition> {
		if query.trim().is_empty() {
			return self.all().collect();
		}

		let needle = fold_case(query);
		self.all().filter(|def| def.matches_folded(&needle)).collect()
	}
}


// vim: ts=4
