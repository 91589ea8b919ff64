pub use pos_settings_types::prelude::*;

pub use crate::settings::{FrozenCatalog, SettingDefinition, SettingsCatalog};

// vim: ts=4
