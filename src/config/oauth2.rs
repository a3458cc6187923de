// self
use crate::{
	_prelude::*,
	config::{FieldValidator, is_not_blank},
};

/// One named-provider OAuth 2.0 instance.
///
/// The shape is shared across the whole named-provider roster; `scope` and
/// `fields` are honored only by providers with the matching capability and
/// ignored elsewhere.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedOAuth2Config {
	/// OAuth application identifier.
	pub id: String,
	/// OAuth application secret.
	pub secret: String,
	/// Optional explicit display name.
	pub client_name: Option<String>,
	/// Optional scope override.
	pub scope: Option<String>,
	/// Optional profile field list override.
	pub fields: Option<String>,
}
impl FieldValidator for NamedOAuth2Config {
	fn is_configured(&self) -> bool {
		is_not_blank(&self.id) && is_not_blank(&self.secret)
	}
}

/// One generic OAuth 2.0 provider instance with explicit endpoint wiring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuth2Config {
	/// OAuth application identifier.
	pub id: String,
	/// OAuth application secret.
	pub secret: String,
	/// Optional explicit display name.
	pub client_name: Option<String>,
	/// Authorization endpoint URL.
	pub auth_url: String,
	/// Token endpoint URL.
	pub token_url: String,
	/// Profile endpoint URL.
	pub profile_url: String,
	/// Node path the profile payload is extracted from.
	pub profile_path: String,
	/// Profile attribute mapping forwarded to the execution layer.
	pub profile_attrs: BTreeMap<String, String>,
	/// Custom request parameters forwarded to the execution layer.
	pub custom_params: BTreeMap<String, String>,
	/// HTTP verb label for profile retrieval, parsed case-insensitively
	/// against [`HttpVerb`](crate::client::HttpVerb) at build time.
	pub profile_verb: String,
}
impl Default for OAuth2Config {
	fn default() -> Self {
		Self {
			id: String::new(),
			secret: String::new(),
			client_name: None,
			auth_url: String::new(),
			token_url: String::new(),
			profile_url: String::new(),
			profile_path: String::new(),
			profile_attrs: BTreeMap::new(),
			custom_params: BTreeMap::new(),
			profile_verb: "GET".into(),
		}
	}
}
impl FieldValidator for OAuth2Config {
	fn is_configured(&self) -> bool {
		is_not_blank(&self.id) && is_not_blank(&self.secret)
	}
}
