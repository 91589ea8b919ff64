//! Write validation

use super::catalog::SettingsCatalog;
use crate::prelude::*;

impl SettingsCatalog {
	/// Check that `value` may be written for `key` at `scope`
	///
	/// This is a gate, not a hint: callers must not hand the value to storage
	/// unless it returns `Ok`. The shape of `value` is not checked.
	pub fn validate_set(&self, key: &str, value: &SettingValue, scope: Scope) -> PsResult<()> {
		let def = self.get(key).ok_or_else(|| Error::UnknownKey(key.to_string()))?;

		if !def.allows(scope) {
			debug!(
				"Rejected {} write for setting '{}' at {} scope (allowed: {:?})",
				value.type_name(),
				key,
				scope,
				def.allowed_scopes()
			);
			return Err(Error::ScopeNotAllowed { key: key.to_string(), scope });
		}

		Ok(())
	}
}


// vim: ts=4
