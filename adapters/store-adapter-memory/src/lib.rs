//! In-memory settings store
//!
//! Keeps raw per-scope values in a map. Useful for tests, demos, and embedders
//! that load settings from elsewhere at startup and never persist changes.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

use pos_settings_types::prelude::{Error, PsResult, ScopeTarget, SettingValue};
use pos_settings_types::store_adapter::SettingsStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
	values: RwLock<HashMap<ScopeTarget, HashMap<String, SettingValue>>>,
	read_only: AtomicBool,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a store pre-filled with `values`
	pub fn with_values(
		values: impl IntoIterator<Item = (ScopeTarget, String, SettingValue)>,
	) -> Self {
		let store = Self::new();
		{
			let mut map = store.values.write();
			for (target, key, value) in values {
				map.entry(target).or_default().insert(key, value);
			}
		}
		store
	}

	/// Reject every write with a store error while set
	pub fn set_read_only(&self, read_only: bool) {
		self.read_only.store(read_only, Ordering::Relaxed);
	}

	/// Number of stored values across all targets
	pub fn len(&self) -> usize {
		self.values.read().values().map(HashMap::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

#[async_trait]
impl SettingsStore for MemoryStore {
	async fn read_setting(
		&self,
		target: ScopeTarget,
		key: &str,
	) -> PsResult<Option<SettingValue>> {
		Ok(self.values.read().get(&target).and_then(|m| m.get(key)).cloned())
	}

	async fn update_setting(
		&self,
		target: ScopeTarget,
		key: &str,
		value: Option<SettingValue>,
	) -> PsResult<()> {
		if self.read_only.load(Ordering::Relaxed) {
			return Err(Error::StoreError("store is read-only".into()));
		}

		let mut values = self.values.write();
		match value {
			Some(value) => {
				debug!("memory store: set {} at {}", key, target);
				values.entry(target).or_default().insert(key.to_string(), value);
			}
			None => {
				debug!("memory store: remove {} at {}", key, target);
				if let Some(m) = values.get_mut(&target) {
					m.remove(key);
					if m.is_empty() {
						values.remove(&target);
					}
				}
			}
		}
		Ok(())
	}

	async fn list_settings(&self, target: ScopeTarget) -> PsResult<HashMap<String, SettingValue>> {
		Ok(self.values.read().get(&target).cloned().unwrap_or_default())
	}
}

// vim: ts=4
