pub use crate::error::{Error, PsResult};
pub use crate::resolution::{Candidates, ResolvedSetting, SettingChange};
pub use crate::types::{Scope, ScopeTarget, SettingGroup, SettingKind, StoreId, UserId};
pub use crate::value::SettingValue;

pub use tracing::{debug, error, info, warn};

// vim: ts=4
