//! Setting values

use serde::{Deserialize, Serialize};

/// Setting value types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)] // No type tag - the shape is whatever the application stored
pub enum SettingValue {
	Bool(bool), // Must be before Int to avoid bool -> int coercion
	Int(i64),
	String(String),
	Json(serde_json::Value),
}

impl SettingValue {
	/// Get the type name for error messages
	pub fn type_name(&self) -> &'static str {
		match self {
			SettingValue::String(_) => "string",
			SettingValue::Int(_) => "int",
			SettingValue::Bool(_) => "bool",
			SettingValue::Json(_) => "json",
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			SettingValue::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			SettingValue::Int(i) => Some(*i),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			SettingValue::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_json(&self) -> Option<&serde_json::Value> {
		match self {
			SettingValue::Json(j) => Some(j),
			_ => None,
		}
	}
}

impl From<bool> for SettingValue {
	fn from(b: bool) -> Self {
		SettingValue::Bool(b)
	}
}

impl From<i64> for SettingValue {
	fn from(i: i64) -> Self {
		SettingValue::Int(i)
	}
}

impl From<&str> for SettingValue {
	fn from(s: &str) -> Self {
		SettingValue::String(s.to_string())
	}
}

impl From<String> for SettingValue {
	fn from(s: String) -> Self {
		SettingValue::String(s)
	}
}

impl From<serde_json::Value> for SettingValue {
	fn from(v: serde_json::Value) -> Self {
		SettingValue::Json(v)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_untagged_deserialize_picks_bool_before_int() {
		let v: SettingValue = serde_json::from_str("true").unwrap_or(SettingValue::Int(0));
		assert_eq!(v, SettingValue::Bool(true));
	}

	#[test]
	fn test_untagged_deserialize_object_falls_back_to_json() {
		let v: SettingValue =
			serde_json::from_str(r#"{"cash":5}"#).unwrap_or(SettingValue::Bool(false));
		assert_eq!(v.type_name(), "json");
		assert_eq!(v.as_json().and_then(|j| j.get("cash")).and_then(|c| c.as_i64()), Some(5));
	}

	#[test]
	fn test_accessors_reject_other_types() {
		let v = SettingValue::from(3_i64);
		assert_eq!(v.as_int(), Some(3));
		assert_eq!(v.as_bool(), None);
		assert_eq!(v.as_str(), None);
	}
}

// vim: ts=4
