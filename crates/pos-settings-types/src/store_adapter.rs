//! Storage adapter trait
//!
//! The settings engine never persists values itself. Per-scope raw values live
//! behind this trait, which embedders implement for their storage backend.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::error::PsResult;
use crate::types::ScopeTarget;
use crate::value::SettingValue;

#[async_trait]
pub trait SettingsStore: Debug + Send + Sync {
	/// Read the raw value stored for `key` at `target`, if any
	async fn read_setting(&self, target: ScopeTarget, key: &str)
	-> PsResult<Option<SettingValue>>;

	/// Store a value for `key` at `target`. `None` removes it.
	async fn update_setting(
		&self,
		target: ScopeTarget,
		key: &str,
		value: Option<SettingValue>,
	) -> PsResult<()>;

	/// List every raw value stored at `target`
	async fn list_settings(&self, target: ScopeTarget) -> PsResult<HashMap<String, SettingValue>>;
}

// vim: ts=4
