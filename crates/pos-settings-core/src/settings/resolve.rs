//! Scope resolution
//!
//! Picks the effective value of a key from the candidates supplied by the
//! caller. The order in which scopes are consulted depends on the kind of the
//! setting:
//!
//! - **Policy**: store -> user -> default
//! - **Preference**: user -> store -> default
//!
//! Candidates are taken as given. A candidate at a scope the definition does
//! not allow writing to is still consulted; keeping such values out of storage
//! is the job of `validate_set`.

use super::catalog::SettingsCatalog;
use super::types::SettingDefinition;
use crate::prelude::*;

/// Resolve `candidates` against a single definition. Never fails.
pub fn resolve_definition(def: &SettingDefinition, candidates: &Candidates) -> ResolvedSetting {
	def.kind()
		.precedence()
		.into_iter()
		.find_map(|scope| {
			candidates.get(scope).map(|value| ResolvedSetting { value: value.clone(), scope })
		})
		.unwrap_or_else(|| ResolvedSetting {
			value: def.default_value().clone(),
			scope: Scope::Default,
		})
}

impl SettingsCatalog {
	/// Compute the effective value of `key` and the scope that produced it
	pub fn resolve(&self, key: &str, candidates: &Candidates) -> PsResult<ResolvedSetting> {
		let def = self.get(key).ok_or_else(|| Error::UnknownKey(key.to_string()))?;
		Ok(resolve_definition(def, candidates))
	}

	/// Resolve `key` before and after a change in its candidates
	pub fn resolve_change(
		&self,
		key: &str,
		before: &Candidates,
		after: &Candidates,
	) -> PsResult<SettingChange> {
		let def = self.get(key).ok_or_else(|| Error::UnknownKey(key.to_string()))?;
		Ok(SettingChange {
			key: key.to_string(),
			before: resolve_definition(def, before),
			after: resolve_definition(def, after),
		})
	}
}


// vim: ts=4
