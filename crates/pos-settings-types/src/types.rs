//! Scope, kind, and group enumerations plus identifier newtypes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Administrative level at which a setting value is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scope {
	/// Location-wide value
	#[serde(rename = "store")]
	Store,
	/// Value chosen by an individual user
	#[serde(rename = "user")]
	User,
	/// Built-in fallback carried by the definition
	#[serde(rename = "default")]
	Default,
}

impl Scope {
	pub const ALL: [Scope; 3] = [Scope::Store, Scope::User, Scope::Default];

	pub fn as_str(&self) -> &'static str {
		match self {
			Scope::Store => "store",
			Scope::User => "user",
			Scope::Default => "default",
		}
	}
}

impl fmt::Display for Scope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Scope {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"store" => Ok(Scope::Store),
			"user" => Ok(Scope::User),
			"default" => Ok(Scope::Default),
			_ => Err(Error::ConfigError(format!("unknown scope: {}", s))),
		}
	}
}

/// Semantic kind of a setting, which decides scope precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingKind {
	/// Operator-imposed constraint: the store value wins over the user's
	#[serde(rename = "policy")]
	Policy,
	/// Personal choice: the user value wins over the store's
	#[serde(rename = "preference")]
	Preference,
}

impl SettingKind {
	/// Scopes in the order they are consulted during resolution
	pub fn precedence(&self) -> [Scope; 3] {
		match self {
			SettingKind::Policy => [Scope::Store, Scope::User, Scope::Default],
			SettingKind::Preference => [Scope::User, Scope::Store, Scope::Default],
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			SettingKind::Policy => "policy",
			SettingKind::Preference => "preference",
		}
	}
}

impl fmt::Display for SettingKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// UI grouping tag. Has no effect on resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingGroup {
	Personal,
	StoresGeneral,
	StoresTax,
	SellGeneral,
	SellPayments,
	SellReceipts,
	Inventory,
	Customers,
	Hardware,
	Integrations,
}

impl SettingGroup {
	pub const ALL: [SettingGroup; 10] = [
		SettingGroup::Personal,
		SettingGroup::StoresGeneral,
		SettingGroup::StoresTax,
		SettingGroup::SellGeneral,
		SettingGroup::SellPayments,
		SettingGroup::SellReceipts,
		SettingGroup::Inventory,
		SettingGroup::Customers,
		SettingGroup::Hardware,
		SettingGroup::Integrations,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			SettingGroup::Personal => "personal",
			SettingGroup::StoresGeneral => "stores-general",
			SettingGroup::StoresTax => "stores-tax",
			SettingGroup::SellGeneral => "sell-general",
			SettingGroup::SellPayments => "sell-payments",
			SettingGroup::SellReceipts => "sell-receipts",
			SettingGroup::Inventory => "inventory",
			SettingGroup::Customers => "customers",
			SettingGroup::Hardware => "hardware",
			SettingGroup::Integrations => "integrations",
		}
	}
}

impl fmt::Display for SettingGroup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StoreId(pub u32);

impl fmt::Display for StoreId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl fmt::Display for UserId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Concrete storage slot for a scoped value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", content = "id", rename_all = "lowercase")]
pub enum ScopeTarget {
	Store(StoreId),
	User(UserId),
}

impl ScopeTarget {
	pub fn scope(&self) -> Scope {
		match self {
			ScopeTarget::Store(_) => Scope::Store,
			ScopeTarget::User(_) => Scope::User,
		}
	}
}

impl fmt::Display for ScopeTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ScopeTarget::Store(id) => write!(f, "store:{}", id),
			ScopeTarget::User(id) => write!(f, "user:{}", id),
		}
	}
}


// vim: ts=4
