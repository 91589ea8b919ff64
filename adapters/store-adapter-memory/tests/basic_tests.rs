//! Memory store basic tests
//!
//! Tests reads, writes, removal, and scope isolation

#![allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]

use pos_settings_store_memory::MemoryStore;
use pos_settings_types::error::Error;
use pos_settings_types::store_adapter::SettingsStore;
use pos_settings_types::types::{ScopeTarget, StoreId, UserId};
use pos_settings_types::value::SettingValue;

const STORE: ScopeTarget = ScopeTarget::Store(StoreId(1));
const OTHER_STORE: ScopeTarget = ScopeTarget::Store(StoreId(2));
const USER: ScopeTarget = ScopeTarget::User(UserId(1));

#[tokio::test]
async fn test_read_missing_returns_none() {
	let store = MemoryStore::new();

	let value = store.read_setting(STORE, "tax.rounding").await.unwrap();
	assert_eq!(value, None);
	assert!(store.is_empty());
}

#[tokio::test]
async fn test_write_then_read() {
	let store = MemoryStore::new();

	store
		.update_setting(STORE, "tax.rounding", Some(SettingValue::from("bankers")))
		.await
		.expect("Should write");

	let value = store.read_setting(STORE, "tax.rounding").await.unwrap();
	assert_eq!(value, Some(SettingValue::from("bankers")));
	assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_overwrite_keeps_single_value() {
	let store = MemoryStore::new();

	store.update_setting(USER, "ui.language", Some("fr".into())).await.unwrap();
	store.update_setting(USER, "ui.language", Some("es".into())).await.unwrap();

	assert_eq!(store.read_setting(USER, "ui.language").await.unwrap(), Some("es".into()));
	assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_targets_are_isolated() {
	// Same key, same numeric id, different scope
	let store = MemoryStore::new();

	store.update_setting(STORE, "ui.language", Some("fr".into())).await.unwrap();

	assert_eq!(store.read_setting(USER, "ui.language").await.unwrap(), None);
	assert_eq!(store.read_setting(OTHER_STORE, "ui.language").await.unwrap(), None);
}

#[tokio::test]
async fn test_remove() {
	let store = MemoryStore::new();

	store.update_setting(STORE, "tax.rounding", Some("bankers".into())).await.unwrap();
	store.update_setting(STORE, "tax.rounding", None).await.unwrap();

	assert_eq!(store.read_setting(STORE, "tax.rounding").await.unwrap(), None);
	assert!(store.is_empty());
}

#[tokio::test]
async fn test_remove_missing_is_ok() {
	let store = MemoryStore::new();

	let result = store.update_setting(STORE, "tax.rounding", None).await;
	assert!(result.is_ok());
}

#[tokio::test]
async fn test_list_settings() {
	let store = MemoryStore::with_values([
		(STORE, "tax.rounding".to_string(), SettingValue::from("bankers")),
		(STORE, "payments.tips_enabled".to_string(), SettingValue::from(true)),
		(USER, "ui.language".to_string(), SettingValue::from("es")),
	]);

	let listed = store.list_settings(STORE).await.unwrap();
	assert_eq!(listed.len(), 2);
	assert_eq!(listed.get("payments.tips_enabled"), Some(&SettingValue::Bool(true)));

	assert!(store.list_settings(OTHER_STORE).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_read_only_rejects_writes() {
	let store = MemoryStore::with_values([(STORE, "k".to_string(), SettingValue::Int(1))]);
	store.set_read_only(true);

	let result = store.update_setting(STORE, "k", Some(SettingValue::Int(2))).await;
	assert!(matches!(result, Err(Error::StoreError(_))));
	assert_eq!(store.read_setting(STORE, "k").await.unwrap(), Some(SettingValue::Int(1)));

	store.set_read_only(false);
	assert!(store.update_setting(STORE, "k", None).await.is_ok());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writers() {
	let store = std::sync::Arc::new(MemoryStore::new());

	let mut handles = Vec::new();
	for i in 0..16_u32 {
		let store = store.clone();
		handles.push(tokio::spawn(async move {
			let target = ScopeTarget::User(UserId(i));
			store.update_setting(target, "ui.language", Some("de".into())).await
		}));
	}
	for handle in handles {
		handle.await.expect("task panicked").expect("write failed");
	}

	assert_eq!(store.len(), 16);
}

// vim: ts=4
