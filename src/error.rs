//! Crate-level error types shared by the registry, builders, and config loader.

// self
use crate::{_prelude::*, client::ClientFamily};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A provider instance carried a malformed enum-like field.
	#[error(transparent)]
	Build(#[from] BuildError),
	/// Configuration snapshot could not be decoded.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Fatal per-instance construction failures.
///
/// A malformed but present enum-like value indicates a configuration authoring
/// error, so the whole [`build`](crate::registry::ClientRegistry::build) call
/// fails instead of returning a half-provisioned client set. Merely absent
/// optional fields never raise these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum BuildError {
	/// CAS protocol label did not match the fixed protocol enumeration.
	#[error("Unrecognized CAS protocol `{value}`.")]
	CasProtocol {
		/// The offending protocol label.
		value: String,
	},
	/// Profile-retrieval verb did not match any supported HTTP verb.
	#[error("Unrecognized profile verb `{value}`.")]
	ProfileVerb {
		/// The offending verb label.
		value: String,
	},
	/// Preferred signing algorithm did not match the JWS enumeration.
	#[error("Unrecognized JWS algorithm `{value}`.")]
	JwsAlgorithm {
		/// The offending algorithm label.
		value: String,
	},
	/// Google scope did not match the fixed scope enumeration.
	#[error("Unrecognized Google scope `{value}`.")]
	GoogleScope {
		/// The offending scope label.
		value: String,
	},
}
impl BuildError {
	/// Protocol family that owns the offending field.
	pub fn family(&self) -> ClientFamily {
		match self {
			BuildError::CasProtocol { .. } => ClientFamily::Cas,
			BuildError::ProfileVerb { .. } => ClientFamily::OAuth2,
			BuildError::JwsAlgorithm { .. } => ClientFamily::Oidc,
			BuildError::GoogleScope { .. } => ClientFamily::NamedOAuth2,
		}
	}

	/// Configuration field the offending value was read from.
	pub fn field(&self) -> &'static str {
		match self {
			BuildError::CasProtocol { .. } => "protocol",
			BuildError::ProfileVerb { .. } => "profile_verb",
			BuildError::JwsAlgorithm { .. } => "preferred_jws_algorithm",
			BuildError::GoogleScope { .. } => "scope",
		}
	}
}

/// Configuration snapshot decoding failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Snapshot JSON could not be deserialized; the message carries the path of
	/// the malformed field.
	#[error("Configuration snapshot is malformed at `{}`.", .0.path())]
	Parse(#[from] serde_path_to_error::Error<serde_json::Error>),
}
