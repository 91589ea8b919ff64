//! End-to-end scenarios against the built-in catalog

#![allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]

use pos_settings_core::prelude::*;
use std::io::Write;
use std::sync::Arc;

fn builtin() -> SettingsCatalog {
	SettingsCatalog::builtin().expect("built-in catalog")
}

#[test]
fn test_language_follows_user_over_store() {
	let catalog = builtin();

	let store_only = Candidates::new().with_store("fr");
	let resolved = catalog.resolve("ui.language", &store_only).unwrap();
	assert_eq!(resolved, ResolvedSetting { value: "fr".into(), scope: Scope::Store });

	let with_user = store_only.with_user("es");
	let resolved = catalog.resolve("ui.language", &with_user).unwrap();
	assert_eq!(resolved, ResolvedSetting { value: "es".into(), scope: Scope::User });
}

#[test]
fn test_tax_rounding_store_policy_wins() {
	let catalog = builtin();

	let candidates = Candidates::new().with_store("bankers").with_user("half-up");
	let resolved = catalog.resolve("tax.rounding", &candidates).unwrap();
	assert_eq!(resolved, ResolvedSetting { value: "bankers".into(), scope: Scope::Store });
}

#[test]
fn test_tax_rounding_cannot_be_set_per_user() {
	let catalog = builtin();

	let res = catalog.validate_set("tax.rounding", &"half-up".into(), Scope::User);
	match res {
		Err(err @ Error::ScopeNotAllowed { .. }) => assert!(err.is_rejection()),
		other => panic!("expected ScopeNotAllowed, got {:?}", other),
	}
	assert!(catalog.validate_set("tax.rounding", &"bankers".into(), Scope::Store).is_ok());
}

#[test]
fn test_every_builtin_resolves_to_its_default() {
	let catalog = builtin();

	for def in catalog.all() {
		let resolved = catalog.resolve(def.key(), &Candidates::new()).unwrap();
		assert_eq!(resolved.scope, Scope::Default);
		assert_eq!(&resolved.value, def.default_value());
	}
}

#[test]
fn test_search_finds_tax_settings() {
	let catalog = builtin();

	let keys: Vec<&str> = catalog.search("TAX").iter().map(|d| d.key()).collect();
	assert!(keys.contains(&"tax.rounding"));
	assert!(keys.contains(&"tax.prices_include_tax"));
	assert_eq!(catalog.search("").len(), catalog.all().count());
}

#[test]
fn test_frozen_catalog_shared_across_threads() {
	let catalog = Arc::new(builtin().freeze());

	let handles: Vec<_> = (0..4)
		.map(|i| {
			let catalog = catalog.clone();
			std::thread::spawn(move || {
				let candidates = Candidates::new().with_store(i64::from(i));
				catalog.resolve("inventory.low_stock_threshold", &candidates).unwrap()
			})
		})
		.collect();

	for (i, handle) in handles.into_iter().enumerate() {
		let resolved = handle.join().expect("thread panicked");
		assert_eq!(resolved.as_int(), Some(i as i64));
	}
}

#[test]
fn test_config_file_extends_builtins() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(
		file,
		"cache_size: 32\ndefinitions:\n  - key: sell.quick_keys\n    label: Quick keys\n    kind: preference\n    group: sell-general\n    default: true\n    allowed_scopes: [user]"
	)
	.unwrap();

	let config = pos_settings_core::SettingsConfig::load(file.path()).unwrap();
	let catalog = config.build_catalog().unwrap();

	let def = catalog.get("sell.quick_keys").unwrap();
	assert_eq!(def.kind(), SettingKind::Preference);
	assert!(catalog.validate_set("sell.quick_keys", &false.into(), Scope::Store).is_err());
	assert!(catalog.validate_set("sell.quick_keys", &false.into(), Scope::User).is_ok());
	assert_eq!(config.service_opts().cache_size, 32);
}

// vim: ts=4
