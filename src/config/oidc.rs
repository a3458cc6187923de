// self
use crate::{
	_prelude::*,
	config::{FieldValidator, is_not_blank},
};

/// One OpenID Connect provider instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OidcConfig {
	/// OIDC client identifier.
	pub id: String,
	/// OIDC client secret.
	pub secret: String,
	/// Optional explicit display name.
	pub client_name: Option<String>,
	/// Concrete variant label (`google`, `azure`, `keycloak`, `generic`),
	/// compared case-insensitively; unrecognized or absent labels route to the
	/// generic variant.
	#[serde(rename = "type")]
	pub variant: String,
	/// Optional scope override.
	pub scope: Option<String>,
	/// Whether a nonce is sent with authentication requests.
	pub use_nonce: bool,
	/// Preferred token signing algorithm label, parsed case-insensitively
	/// against [`JwsAlgorithm`](crate::client::JwsAlgorithm) at build time.
	pub preferred_jws_algorithm: Option<String>,
	/// Maximum clock skew tolerated while validating tokens, in seconds.
	pub max_clock_skew_secs: i64,
	/// Discovery document URI.
	pub discovery_uri: String,
	/// Custom request parameters forwarded to the execution layer.
	pub custom_params: BTreeMap<String, String>,
}
impl Default for OidcConfig {
	fn default() -> Self {
		Self {
			id: String::new(),
			secret: String::new(),
			client_name: None,
			variant: String::new(),
			scope: None,
			use_nonce: false,
			preferred_jws_algorithm: None,
			max_clock_skew_secs: 5,
			discovery_uri: String::new(),
			custom_params: BTreeMap::new(),
		}
	}
}
impl FieldValidator for OidcConfig {
	fn is_configured(&self) -> bool {
		is_not_blank(&self.id) && is_not_blank(&self.secret)
	}
}
