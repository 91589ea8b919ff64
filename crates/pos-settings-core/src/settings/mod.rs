//! Settings registry and scope resolution
//!
//! # Architecture
//!
//! - **Types** (`types.rs`): setting definitions and their builder
//! - **Catalog** (`catalog.rs`): registration, lookup, freezing
//! - **Resolve** (`resolve.rs`): kind-dependent scope precedence
//! - **Validate** (`validate.rs`): pre-write scope gate
//! - **Search** (`search.rs`): substring filter for discovery UIs
//! - **Service** (`service.rs`): caching front end over a `SettingsStore`
//!
//! # Kind vs Scope
//!
//! Every value lives at a scope (store, user, or the built-in default). When
//! more than one scope holds a value, the kind of the setting decides:
//! - **Policy**: the store value wins, a manager's choice binds every cashier
//! - **Preference**: the user value wins, store values only act as defaults

pub mod catalog;
pub mod resolve;
pub mod search;
pub mod service;
pub mod types;
pub mod validate;

pub use catalog::{FrozenCatalog, SettingsCatalog};
pub use resolve::resolve_definition;
pub use service::{SettingsCache, SettingsContext, SettingsService, SettingsServiceOpts};
pub use types::{SettingDefinition, SettingDefinitionBuilder};

// vim: ts=4
