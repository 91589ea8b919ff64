//! Inputs and outputs of scope resolution

use serde::{Deserialize, Serialize};

use crate::types::Scope;
use crate::value::SettingValue;

/// Raw values supplied by the caller for a single key, at most one per scope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidates {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub store: Option<SettingValue>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user: Option<SettingValue>,
}

impl Candidates {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_store(mut self, value: impl Into<SettingValue>) -> Self {
		self.store = Some(value.into());
		self
	}

	pub fn with_user(mut self, value: impl Into<SettingValue>) -> Self {
		self.user = Some(value.into());
		self
	}

	/// Candidate at the given scope. `Default` never has a candidate: the
	/// default value belongs to the definition.
	pub fn get(&self, scope: Scope) -> Option<&SettingValue> {
		match scope {
			Scope::Store => self.store.as_ref(),
			Scope::User => self.user.as_ref(),
			Scope::Default => None,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.store.is_none() && self.user.is_none()
	}
}

/// Effective value of a setting and the scope that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSetting {
	pub value: SettingValue,
	pub scope: Scope,
}

impl ResolvedSetting {
	pub fn as_str(&self) -> Option<&str> {
		self.value.as_str()
	}

	pub fn as_int(&self) -> Option<i64> {
		self.value.as_int()
	}

	pub fn as_bool(&self) -> Option<bool> {
		self.value.as_bool()
	}

	pub fn as_json(&self) -> Option<&serde_json::Value> {
		self.value.as_json()
	}

	pub fn is_default(&self) -> bool {
		self.scope == Scope::Default
	}
}

/// Before/after pair for one key, for callers that keep an audit trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingChange {
	pub key: String,
	pub before: ResolvedSetting,
	pub after: ResolvedSetting,
}

impl SettingChange {
	/// Whether the effective value or its source scope changed
	pub fn is_effective(&self) -> bool {
		self.before != self.after
	}
}


// vim: ts=4
