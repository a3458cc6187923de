//! Configuration snapshot consumed by the client registry.
//!
//! Blocks are produced by an external configuration binder and are read-only
//! here: the registry checks presence and blankness of required fields, never
//! type correctness. Blank provider slots are expected and deserialize to
//! skippable empties.

/// CAS-protocol provider configuration.
pub mod cas;
/// Named-provider and generic OAuth 2.0 provider configuration.
pub mod oauth2;
/// OIDC provider configuration.
pub mod oidc;
/// SAML 2.0 provider configuration.
pub mod saml2;

pub use cas::*;
pub use oauth2::*;
pub use oidc::*;
pub use saml2::*;

// self
use crate::{_prelude::*, client::NamedProvider, error::ConfigError};

/// Pure per-family predicate deciding whether a provider-instance block
/// carries the minimum required fields to be instantiable.
pub trait FieldValidator {
	/// Returns true when every required field is present and non-blank.
	///
	/// Blocks failing the check produce no descriptor and no error; they are
	/// silently skipped by the registry.
	fn is_configured(&self) -> bool;
}

/// Immutable configuration snapshot, one collection per protocol family.
///
/// Every field defaults to empty so partially-populated snapshots bind
/// cleanly; ordering within each collection is preserved and drives ordinal
/// naming.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegatedAuthConfig {
	/// CAS-protocol proxy provider instances.
	pub cas: Vec<CasConfig>,
	/// Facebook provider instances.
	pub facebook: Vec<NamedOAuth2Config>,
	/// Twitter provider instances.
	pub twitter: Vec<NamedOAuth2Config>,
	/// Dropbox provider instances.
	pub dropbox: Vec<NamedOAuth2Config>,
	/// Foursquare provider instances.
	pub foursquare: Vec<NamedOAuth2Config>,
	/// GitHub provider instances.
	pub github: Vec<NamedOAuth2Config>,
	/// Google provider instances.
	pub google: Vec<NamedOAuth2Config>,
	/// Windows Live provider instances.
	pub windows_live: Vec<NamedOAuth2Config>,
	/// Yahoo provider instances.
	pub yahoo: Vec<NamedOAuth2Config>,
	/// LinkedIn provider instances.
	pub linked_in: Vec<NamedOAuth2Config>,
	/// PayPal provider instances.
	pub paypal: Vec<NamedOAuth2Config>,
	/// WordPress provider instances.
	pub wordpress: Vec<NamedOAuth2Config>,
	/// Bitbucket provider instances.
	pub bitbucket: Vec<NamedOAuth2Config>,
	/// ORCID provider instances.
	pub orcid: Vec<NamedOAuth2Config>,
	/// OpenID Connect provider instances.
	pub oidc: Vec<OidcConfig>,
	/// Generic OAuth 2.0 provider instances with explicit endpoint wiring.
	pub oauth2: Vec<OAuth2Config>,
	/// SAML 2.0 provider instances.
	pub saml2: Vec<Saml2Config>,
}
impl DelegatedAuthConfig {
	/// Decodes a snapshot from JSON, reporting the path of any malformed field.
	pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
		let mut deserializer = serde_json::Deserializer::from_str(raw);

		Ok(serde_path_to_error::deserialize(&mut deserializer)?)
	}

	/// Configuration blocks bound for one named OAuth 2.0 provider.
	pub fn named_provider(&self, provider: NamedProvider) -> &[NamedOAuth2Config] {
		match provider {
			NamedProvider::Facebook => &self.facebook,
			NamedProvider::Twitter => &self.twitter,
			NamedProvider::Dropbox => &self.dropbox,
			NamedProvider::Foursquare => &self.foursquare,
			NamedProvider::Github => &self.github,
			NamedProvider::Google => &self.google,
			NamedProvider::WindowsLive => &self.windows_live,
			NamedProvider::Yahoo => &self.yahoo,
			NamedProvider::LinkedIn => &self.linked_in,
			NamedProvider::Paypal => &self.paypal,
			NamedProvider::WordPress => &self.wordpress,
			NamedProvider::Bitbucket => &self.bitbucket,
			NamedProvider::Orcid => &self.orcid,
		}
	}
}

/// True when the value contains at least one non-whitespace character.
pub(crate) fn is_not_blank(value: &str) -> bool {
	!value.trim().is_empty()
}

/// Clones an optional override only when it is present and non-blank.
///
/// Blank overrides collapse to `None` so builders never replace a protocol
/// library default with an empty value.
pub(crate) fn filled(value: &Option<String>) -> Option<String> {
	value.as_deref().filter(|view| is_not_blank(view)).map(str::to_owned)
}
