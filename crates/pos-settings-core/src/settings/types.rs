//! Setting definitions
//!
//! A definition describes one configurable key: how it is shown, which scopes
//! may hold a value for it, and which scope wins when several do.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Setting definition - immutable metadata for one key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDefinition")]
pub struct SettingDefinition {
	key: String,
	label: String,
	description: String,
	kind: SettingKind,
	group: SettingGroup,
	default: SettingValue,
	allowed_scopes: Vec<Scope>,
}

impl SettingDefinition {
	/// Create a builder for constructing a SettingDefinition
	pub fn builder(key: impl Into<String>) -> SettingDefinitionBuilder {
		SettingDefinitionBuilder::new(key)
	}

	/// Dot-separated key (e.g., "tax.rounding")
	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn description(&self) -> &str {
		&self.description
	}

	pub fn kind(&self) -> SettingKind {
		self.kind
	}

	pub fn group(&self) -> SettingGroup {
		self.group
	}

	/// Value used when no scope holds one
	pub fn default_value(&self) -> &SettingValue {
		&self.default
	}

	/// Scopes a value may be written to. Always contains `Scope::Default`.
	pub fn allowed_scopes(&self) -> &[Scope] {
		&self.allowed_scopes
	}

	pub fn allows(&self, scope: Scope) -> bool {
		self.allowed_scopes.contains(&scope)
	}

	/// Case-insensitive substring match on key, label, and description.
	/// `needle` must already be folded with `fold_case`.
	pub(crate) fn matches_folded(&self, needle: &str) -> bool {
		fold_case(&self.key).contains(needle)
			|| fold_case(&self.label).contains(needle)
			|| fold_case(&self.description).contains(needle)
	}
}

/// Lowercase one char at a time. Unlike `str::to_lowercase` this ignores
/// context (final sigma), so a folded substring is a substring of the fold.
pub(crate) fn fold_case(s: &str) -> String {
	s.chars().flat_map(char::to_lowercase).collect()
}

/// Builder for SettingDefinition with fluent API
#[derive(Debug)]
pub struct SettingDefinitionBuilder {
	key: String,
	label: Option<String>,
	description: String,
	kind: SettingKind,
	group: SettingGroup,
	default: Option<SettingValue>,
	allowed_scopes: Option<Vec<Scope>>,
}

impl SettingDefinitionBuilder {
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: None,
			description: String::new(),
			kind: SettingKind::Policy, // Store-enforced unless stated otherwise
			group: SettingGroup::Personal,
			default: None,
			allowed_scopes: None,
		}
	}

	/// Set the display label (required)
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	/// Set the kind (defaults to Policy)
	pub fn kind(mut self, kind: SettingKind) -> Self {
		self.kind = kind;
		self
	}

	pub fn group(mut self, group: SettingGroup) -> Self {
		self.group = group;
		self
	}

	/// Set the default value (required)
	pub fn default(mut self, value: impl Into<SettingValue>) -> Self {
		self.default = Some(value.into());
		self
	}

	/// Set the writable scopes (defaults to store). `Scope::Default` is
	/// added if missing.
	pub fn allowed_scopes(mut self, scopes: impl IntoIterator<Item = Scope>) -> Self {
		self.allowed_scopes = Some(scopes.into_iter().collect());
		self
	}

	/// Build the SettingDefinition
	pub fn build(self) -> PsResult<SettingDefinition> {
		if self.key.is_empty() || self.key.chars().any(char::is_whitespace) {
			return Err(Error::ConfigError(format!("Invalid setting key '{}'", self.key)));
		}

		let label = self
			.label
			.ok_or_else(|| Error::ConfigError(format!("Setting '{}' has no label", self.key)))?;
		let default = self.default.ok_or_else(|| {
			Error::ConfigError(format!("Setting '{}' has no default value", self.key))
		})?;

		let mut allowed_scopes = self.allowed_scopes.unwrap_or_else(|| vec![Scope::Store]);
		allowed_scopes.push(Scope::Default);
		allowed_scopes.sort();
		allowed_scopes.dedup();

		Ok(SettingDefinition {
			key: self.key,
			label,
			description: self.description,
			kind: self.kind,
			group: self.group,
			default,
			allowed_scopes,
		})
	}
}

/// Serialized form of a definition, checked by the builder on the way in
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDefinition {
	key: String,
	label: String,
	#[serde(default)]
	description: String,
	#[serde(default = "default_kind")]
	kind: SettingKind,
	#[serde(default = "default_group")]
	group: SettingGroup,
	default: SettingValue,
	#[serde(default)]
	allowed_scopes: Option<Vec<Scope>>,
}

fn default_kind() -> SettingKind {
	SettingKind::Policy
}

fn default_group() -> SettingGroup {
	SettingGroup::Personal
}

impl TryFrom<RawDefinition> for SettingDefinition {
	type Error = Error;

	fn try_from(raw: RawDefinition) -> PsResult<Self> {
		let mut builder = SettingDefinition::builder(raw.key)
			.label(raw.label)
			.description(raw.description)
			.kind(raw.kind)
			.group(raw.group)
			.default(raw.default);
		if let Some(scopes) = raw.allowed_scopes {
			builder = builder.allowed_scopes(scopes);
		}
		builder.build()
	}
}


// vim: ts=4
