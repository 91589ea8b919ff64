//! Error type for the settings engine

use std::fmt;

use crate::types::Scope;

pub type PsResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// A definition with this key is already registered
	DuplicateKey(String),
	/// No definition is registered under this key
	UnknownKey(String),
	/// The definition does not accept values at this scope
	ScopeNotAllowed { key: String, scope: Scope },
	/// Invalid definition or configuration
	ConfigError(String),

	// service level
	ScopeNotWritable(Scope),
	MissingUser,
	TypeMismatch { key: String, expected: &'static str, actual: &'static str },
	StoreError(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	/// True for the rejections a caller is expected to render to the user,
	/// as opposed to defects in the catalog or its callers.
	pub fn is_rejection(&self) -> bool {
		matches!(self, Error::ScopeNotAllowed { .. } | Error::ScopeNotWritable(_) | Error::MissingUser)
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::DuplicateKey(key) => write!(f, "setting '{}' is already registered", key),
			Error::UnknownKey(key) => write!(f, "unknown setting: {}", key),
			Error::ScopeNotAllowed { key, scope } => {
				write!(f, "setting '{}' cannot be changed at {} scope", key, scope)
			}
			Error::ConfigError(msg) => write!(f, "config error: {}", msg),
			Error::ScopeNotWritable(scope) => write!(f, "{} scope is not writable", scope),
			Error::MissingUser => write!(f, "user scope requires a user in context"),
			Error::TypeMismatch { key, expected, actual } => {
				write!(f, "setting '{}' is not {}, got {}", key, expected, actual)
			}
			Error::StoreError(msg) => write!(f, "store error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::ConfigError(err.to_string())
	}
}

impl From<serde_yaml::Error> for Error {
	fn from(err: serde_yaml::Error) -> Self {
		Self::ConfigError(err.to_string())
	}
}


// vim: ts=4
