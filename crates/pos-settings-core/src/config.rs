//! Catalog and service configuration
//!
//! ```yaml
//! builtin: true
//! cache_size: 256
//! definitions:
//!   - key: sell.quick_keys
//!     label: Quick keys
//!     kind: preference
//!     group: sell-general
//!     default: true
//!     allowed_scopes: [user, store]
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::prelude::*;
use crate::settings::SettingsServiceOpts;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsConfig {
	/// Seed the catalog with the built-in definitions
	#[serde(default = "default_builtin")]
	pub builtin: bool,
	/// Capacity of the service's resolved-value cache
	#[serde(default = "default_cache_size")]
	pub cache_size: usize,
	/// Extra definitions, registered after the built-ins
	#[serde(default)]
	pub definitions: Vec<SettingDefinition>,
}

fn default_builtin() -> bool {
	true
}

fn default_cache_size() -> usize {
	SettingsServiceOpts::default().cache_size
}

impl Default for SettingsConfig {
	fn default() -> Self {
		Self { builtin: default_builtin(), cache_size: default_cache_size(), definitions: Vec::new() }
	}
}

impl SettingsConfig {
	pub fn from_yaml_str(yaml: &str) -> PsResult<Self> {
		Ok(serde_yaml::from_str(yaml)?)
	}

	/// Load configuration from a YAML file
	pub fn load(path: impl AsRef<Path>) -> PsResult<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path)
			.inspect_err(|err| warn!("Cannot read settings config {}: {}", path.display(), err))?;
		let config = Self::from_yaml_str(&content)?;
		debug!(
			"Loaded settings config from {} ({} extra definitions)",
			path.display(),
			config.definitions.len()
		);
		Ok(config)
	}

	/// Build the catalog this configuration describes
	pub fn build_catalog(&self) -> PsResult<SettingsCatalog> {
		let mut catalog = SettingsCatalog::new();
		if self.builtin {
			crate::builtin_settings::register_settings(&mut catalog)?;
		}
		for def in &self.definitions {
			catalog.register(def.clone())?;
		}
		Ok(catalog)
	}

	pub fn service_opts(&self) -> SettingsServiceOpts {
		SettingsServiceOpts { cache_size: self.cache_size }
	}
}


// vim: ts=4
