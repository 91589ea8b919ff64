//! Settings registry and scope resolution engine for point-of-sale back
//! offices.
//!
//! The engine declares which configuration keys exist, which scopes may hold a
//! value for each key, and which scope wins when several do. It never stores
//! values itself: callers pass per-scope candidates in, or plug a
//! `SettingsStore` into the `SettingsService`.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod builtin_settings;
pub mod config;
pub mod prelude;
pub mod settings;

pub use config::SettingsConfig;
pub use pos_settings_types::{error, resolution, store_adapter, types, value};
pub use settings::{
	FrozenCatalog, SettingDefinition, SettingsCatalog, SettingsContext, SettingsService,
	SettingsServiceOpts,
};

// vim: ts=4
