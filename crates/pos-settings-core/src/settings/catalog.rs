//! Settings catalog
//!
//! `SettingsCatalog` is the mutable form used while definitions are being
//! registered. Once bootstrap is over it is frozen into a `FrozenCatalog`,
//! which can be shared across threads and no longer accepts registrations.

use indexmap::IndexMap;
use std::ops::Deref;

use super::types::SettingDefinition;
use crate::prelude::*;

/// Mapping from key to definition, in registration order
#[derive(Debug, Clone, Default)]
pub struct SettingsCatalog {
	definitions: IndexMap<String, SettingDefinition>,
}

impl SettingsCatalog {
	/// Create an empty catalog
	pub fn new() -> Self {
		Self { definitions: IndexMap::new() }
	}

	/// Create a catalog pre-seeded with `definitions`, registered in order
	pub fn with_definitions(
		definitions: impl IntoIterator<Item = SettingDefinition>,
	) -> PsResult<Self> {
		let mut catalog = Self::new();
		for def in definitions {
			catalog.register(def)?;
		}
		Ok(catalog)
	}

	/// Create a catalog seeded with the built-in definitions
	pub fn builtin() -> PsResult<Self> {
		Self::with_definitions(crate::builtin_settings::definitions()?)
	}

	/// Register a new setting definition
	///
	/// Registering a key twice is an error, even if both definitions are equal.
	pub fn register(&mut self, def: SettingDefinition) -> PsResult<()> {
		if self.definitions.contains_key(def.key()) {
			return Err(Error::DuplicateKey(def.key().to_string()));
		}

		debug!("Registering setting: {} ({})", def.key(), def.kind());
		self.definitions.insert(def.key().to_string(), def);
		Ok(())
	}

	/// Remove every registration
	pub fn clear(&mut self) {
		self.definitions.clear();
	}

	/// Freeze the catalog (make it immutable)
	pub fn freeze(self) -> FrozenCatalog {
		info!("Freezing settings catalog with {} definitions", self.definitions.len());
		FrozenCatalog { catalog: self }
	}

	/// Get a setting definition by key
	pub fn get(&self, key: &str) -> Option<&SettingDefinition> {
		self.definitions.get(key)
	}

	pub fn has(&self, key: &str) -> bool {
		self.definitions.contains_key(key)
	}

	/// Every registered definition, in registration order
	pub fn all(&self) -> impl Iterator<Item = &SettingDefinition> {
		self.definitions.values()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.definitions.keys().map(String::as_str)
	}

	/// Definitions belonging to a UI group, in registration order
	pub fn by_group(&self, group: SettingGroup) -> impl Iterator<Item = &SettingDefinition> {
		self.all().filter(move |def| def.group() == group)
	}

	/// Definitions whose key starts with `prefix`
	pub fn by_prefix<'a>(
		&'a self,
		prefix: &'a str,
	) -> impl Iterator<Item = &'a SettingDefinition> + 'a {
		self.all().filter(move |def| def.key().starts_with(prefix))
	}

	/// Get number of registered settings
	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	/// Check if catalog is empty
	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

impl<'a> IntoIterator for &'a SettingsCatalog {
	type Item = &'a SettingDefinition;
	type IntoIter = indexmap::map::Values<'a, String, SettingDefinition>;

	fn into_iter(self) -> Self::IntoIter {
		self.definitions.values()
	}
}

/// Immutable catalog, shared read-only after bootstrap
///
/// Dereferences to `SettingsCatalog` for every read operation; mutation is
/// not reachable through it.
#[derive(Debug, Clone)]
pub struct FrozenCatalog {
	catalog: SettingsCatalog,
}

impl Deref for FrozenCatalog {
	type Target = SettingsCatalog;

	fn deref(&self) -> &SettingsCatalog {
		&self.catalog
	}
}

impl<'a> IntoIterator for &'a FrozenCatalog {
	type Item = &'a SettingDefinition;
	type IntoIter = indexmap::map::Values<'a, String, SettingDefinition>;

	fn into_iter(self) -> Self::IntoIter {
		self.catalog.definitions.values()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn def(key: &str, group: SettingGroup) -> SettingDefinition {
		match SettingDefinition::builder(key).label(key).group(group).default(true).build() {
			Ok(def) => def,
			Err(err) => panic!("invalid test definition: {}", err),
		}
	}

	#[test]
	fn test_register_and_get() {
		let mut catalog = SettingsCatalog::new();
		assert!(catalog.is_empty());
		assert!(catalog.register(def("a.one", SettingGroup::Personal)).is_ok());

		assert!(catalog.has("a.one"));
		assert_eq!(catalog.get("a.one").map(SettingDefinition::key), Some("a.one"));
		assert!(catalog.get("a.two").is_none());
		assert!(!catalog.has("a.two"));
	}

	#[test]
	fn test_duplicate_register_fails_and_keeps_first() {
		let mut catalog = SettingsCatalog::new();
		assert!(catalog.register(def("a.one", SettingGroup::Personal)).is_ok());

		let res = catalog.register(def("a.one", SettingGroup::Hardware));
		assert!(matches!(res, Err(Error::DuplicateKey(ref k)) if k == "a.one"));
		assert_eq!(catalog.len(), 1);
		assert_eq!(catalog.get("a.one").map(SettingDefinition::group), Some(SettingGroup::Personal));
	}

	#[test]
	fn test_all_keeps_registration_order_and_restarts() {
		let keys = ["z.last", "a.first", "m.middle"];
		let catalog =
			SettingsCatalog::with_definitions(keys.iter().map(|k| def(k, SettingGroup::Personal)));
		let Ok(catalog) = catalog else {
			panic!("seeding failed");
		};

		let first: Vec<&str> = catalog.all().map(SettingDefinition::key).collect();
		let second: Vec<&str> = catalog.all().map(SettingDefinition::key).collect();
		assert_eq!(first, keys);
		assert_eq!(first, second);
		assert_eq!(catalog.keys().collect::<Vec<_>>(), keys);
	}

	#[test]
	fn test_with_definitions_rejects_duplicates() {
		let res = SettingsCatalog::with_definitions([
			def("a.one", SettingGroup::Personal),
			def("a.one", SettingGroup::Personal),
		]);
		assert!(matches!(res, Err(Error::DuplicateKey(_))));
	}

	#[test]
	fn test_clear() {
		let mut catalog = SettingsCatalog::new();
		assert!(catalog.register(def("a.one", SettingGroup::Personal)).is_ok());
		catalog.clear();
		assert!(catalog.is_empty());
		assert!(catalog.register(def("a.one", SettingGroup::Personal)).is_ok());
	}

	#[test]
	fn test_by_group_and_prefix() {
		let catalog = SettingsCatalog::with_definitions([
			def("tax.rounding", SettingGroup::StoresTax),
			def("ui.language", SettingGroup::Personal),
			def("tax.inclusive", SettingGroup::StoresTax),
		]);
		let Ok(catalog) = catalog else {
			panic!("seeding failed");
		};

		let tax: Vec<&str> =
			catalog.by_group(SettingGroup::StoresTax).map(SettingDefinition::key).collect();
		assert_eq!(tax, ["tax.rounding", "tax.inclusive"]);
		assert_eq!(catalog.by_prefix("ui.").count(), 1);
		assert_eq!(catalog.by_prefix("").count(), 3);
	}

	#[test]
	fn test_frozen_catalog_reads() {
		let mut catalog = SettingsCatalog::new();
		assert!(catalog.register(def("a.one", SettingGroup::Personal)).is_ok());
		let frozen = catalog.freeze();

		assert!(frozen.has("a.one"));
		assert_eq!(frozen.len(), 1);
		assert_eq!((&frozen).into_iter().count(), 1);
	}

	#[test]
	fn test_frozen_catalog_is_shareable() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<FrozenCatalog>();
	}
}

// vim: ts=4
