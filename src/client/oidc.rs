// self
use crate::{
	_prelude::*,
	client::{ClientDescriptor, ClientFamily, ClientProvision, instantiable},
	config::{OidcConfig, filled},
	error::BuildError,
	registry::resolve_name,
};

/// Concrete OpenID Connect client variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OidcVariant {
	/// Google-flavored OIDC.
	Google,
	/// Azure AD-flavored OIDC.
	Azure,
	/// Keycloak-flavored OIDC.
	Keycloak,
	#[default]
	/// Plain OIDC against any conformant provider.
	Generic,
}
impl OidcVariant {
	/// Canonical client name for unnamed instances of the variant.
	pub const fn default_name(self) -> &'static str {
		match self {
			OidcVariant::Google => "GoogleOidcClient",
			OidcVariant::Azure => "AzureAdClient",
			OidcVariant::Keycloak => "KeycloakOidcClient",
			OidcVariant::Generic => "OidcClient",
		}
	}

	/// Routes a configured type label to a variant.
	///
	/// Unrecognized or absent labels fall back to [`OidcVariant::Generic`];
	/// the label is a routing hint, not a closed vocabulary.
	pub fn from_label(label: &str) -> Self {
		match label.to_ascii_uppercase().as_str() {
			"GOOGLE" => OidcVariant::Google,
			"AZURE" => OidcVariant::Azure,
			"KEYCLOAK" => OidcVariant::Keycloak,
			_ => OidcVariant::Generic,
		}
	}
}
impl Display for OidcVariant {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.default_name())
	}
}

/// JWS signing algorithms accepted for the preferred-algorithm override
/// (RFC 7518 `alg` values).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JwsAlgorithm {
	/// HMAC with SHA-256.
	Hs256,
	/// HMAC with SHA-384.
	Hs384,
	/// HMAC with SHA-512.
	Hs512,
	/// RSASSA-PKCS1-v1_5 with SHA-256.
	Rs256,
	/// RSASSA-PKCS1-v1_5 with SHA-384.
	Rs384,
	/// RSASSA-PKCS1-v1_5 with SHA-512.
	Rs512,
	/// ECDSA with P-256 and SHA-256.
	Es256,
	/// ECDSA with P-384 and SHA-384.
	Es384,
	/// ECDSA with P-521 and SHA-512.
	Es512,
	/// RSASSA-PSS with SHA-256.
	Ps256,
	/// RSASSA-PSS with SHA-384.
	Ps384,
	/// RSASSA-PSS with SHA-512.
	Ps512,
}
impl JwsAlgorithm {
	/// Returns the canonical RFC 7518 label.
	pub const fn as_str(self) -> &'static str {
		match self {
			JwsAlgorithm::Hs256 => "HS256",
			JwsAlgorithm::Hs384 => "HS384",
			JwsAlgorithm::Hs512 => "HS512",
			JwsAlgorithm::Rs256 => "RS256",
			JwsAlgorithm::Rs384 => "RS384",
			JwsAlgorithm::Rs512 => "RS512",
			JwsAlgorithm::Es256 => "ES256",
			JwsAlgorithm::Es384 => "ES384",
			JwsAlgorithm::Es512 => "ES512",
			JwsAlgorithm::Ps256 => "PS256",
			JwsAlgorithm::Ps384 => "PS384",
			JwsAlgorithm::Ps512 => "PS512",
		}
	}
}
impl Display for JwsAlgorithm {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for JwsAlgorithm {
	type Err = BuildError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"HS256" => Ok(JwsAlgorithm::Hs256),
			"HS384" => Ok(JwsAlgorithm::Hs384),
			"HS512" => Ok(JwsAlgorithm::Hs512),
			"RS256" => Ok(JwsAlgorithm::Rs256),
			"RS384" => Ok(JwsAlgorithm::Rs384),
			"RS512" => Ok(JwsAlgorithm::Rs512),
			"ES256" => Ok(JwsAlgorithm::Es256),
			"ES384" => Ok(JwsAlgorithm::Es384),
			"ES512" => Ok(JwsAlgorithm::Es512),
			"PS256" => Ok(JwsAlgorithm::Ps256),
			"PS384" => Ok(JwsAlgorithm::Ps384),
			"PS512" => Ok(JwsAlgorithm::Ps512),
			_ => Err(BuildError::JwsAlgorithm { value: s.to_owned() }),
		}
	}
}

/// OpenID Connect client payload shared by every variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OidcClient {
	/// Concrete variant the descriptor is tagged as.
	pub variant: OidcVariant,
	/// OIDC client identifier.
	pub client_id: String,
	/// OIDC client secret.
	pub secret: String,
	/// Scope override; `None` keeps the protocol library default.
	pub scope: Option<String>,
	/// Whether a nonce is sent with authentication requests.
	pub use_nonce: bool,
	/// Preferred token signing algorithm, when overridden.
	pub preferred_jws_algorithm: Option<JwsAlgorithm>,
	/// Maximum clock skew tolerated while validating tokens.
	pub max_clock_skew: Duration,
	/// Discovery document URI.
	pub discovery_uri: String,
	/// Custom request parameters.
	pub custom_params: BTreeMap<String, String>,
}

/// Builds descriptors for every instantiable OIDC config block.
pub fn build_oidc_clients(configs: &[OidcConfig]) -> Result<Vec<ClientDescriptor>, BuildError> {
	configs
		.iter()
		.filter(instantiable(ClientFamily::Oidc))
		.enumerate()
		.map(|(ordinal, config)| {
			let provision = ClientProvision::Oidc(OidcClient {
				variant: OidcVariant::from_label(&config.variant),
				client_id: config.id.clone(),
				secret: config.secret.clone(),
				scope: filled(&config.scope),
				use_nonce: config.use_nonce,
				preferred_jws_algorithm: filled(&config.preferred_jws_algorithm)
					.map(|label| label.parse())
					.transpose()?,
				max_clock_skew: Duration::seconds(config.max_clock_skew_secs),
				discovery_uri: config.discovery_uri.clone(),
				custom_params: config.custom_params.clone(),
			});
			let name =
				resolve_name(provision.default_name(), config.client_name.as_deref(), ordinal);

			Ok(ClientDescriptor::new(name, provision))
		})
		.collect()
}
