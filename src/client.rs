//! Client descriptor data model and per-family builders.
//!
//! Each protocol family converts its validated config blocks into immutable
//! [`ClientDescriptor`] values; the enum-like configuration fields (protocol
//! variant, HTTP verb, signing algorithm, typed scope) are closed enums with
//! explicit parse functions, so a malformed label is a typed build failure
//! rather than a silent fallback.

/// CAS-protocol payloads and builder.
pub mod cas;
/// Named-provider and generic OAuth 2.0 payloads and builders.
pub mod oauth2;
/// OIDC payloads, variant dispatch, and builder.
pub mod oidc;
/// SAML 2.0 payloads and builder.
pub mod saml2;

pub use cas::*;
pub use oauth2::*;
pub use oidc::*;
pub use saml2::*;

// self
use crate::{_prelude::*, config::FieldValidator};

/// Protocol families a delegated client can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientFamily {
	/// CAS-protocol proxy providers.
	Cas,
	/// Concrete, well-known OAuth 2.0 providers.
	NamedOAuth2,
	/// Generic OAuth 2.0 providers with explicit endpoint wiring.
	OAuth2,
	/// OpenID Connect providers.
	Oidc,
	/// SAML 2.0 providers.
	Saml2,
}
impl ClientFamily {
	/// Returns a stable label suitable for logs and error payloads.
	pub const fn as_str(self) -> &'static str {
		match self {
			ClientFamily::Cas => "cas",
			ClientFamily::NamedOAuth2 => "named_oauth2",
			ClientFamily::OAuth2 => "oauth2",
			ClientFamily::Oidc => "oidc",
			ClientFamily::Saml2 => "saml2",
		}
	}
}
impl Display for ClientFamily {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Family-specific configuration payload carried by a descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientProvision {
	/// CAS-protocol client payload.
	Cas(CasClient),
	/// Named-provider OAuth 2.0 client payload.
	NamedOAuth2(NamedOAuth2Client),
	/// Generic OAuth 2.0 client payload.
	OAuth2(OAuth2Client),
	/// OpenID Connect client payload.
	Oidc(OidcClient),
	/// SAML 2.0 client payload.
	Saml2(Saml2Client),
}
impl ClientProvision {
	/// Protocol family of the payload.
	pub fn family(&self) -> ClientFamily {
		match self {
			ClientProvision::Cas(_) => ClientFamily::Cas,
			ClientProvision::NamedOAuth2(_) => ClientFamily::NamedOAuth2,
			ClientProvision::OAuth2(_) => ClientFamily::OAuth2,
			ClientProvision::Oidc(_) => ClientFamily::Oidc,
			ClientProvision::Saml2(_) => ClientFamily::Saml2,
		}
	}

	/// Canonical client name used when no explicit name is configured.
	pub fn default_name(&self) -> &'static str {
		match self {
			ClientProvision::Cas(_) => CasClient::DEFAULT_NAME,
			ClientProvision::NamedOAuth2(client) => client.provider.default_name(),
			ClientProvision::OAuth2(_) => OAuth2Client::DEFAULT_NAME,
			ClientProvision::Oidc(client) => client.variant.default_name(),
			ClientProvision::Saml2(_) => Saml2Client::DEFAULT_NAME,
		}
	}
}

/// Fully-populated runtime representation of one configured provider
/// instance.
///
/// Descriptors are immutable once constructed; the registry owns them until
/// its collection is returned, at which point ownership transfers to the
/// caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDescriptor {
	name: String,
	provision: ClientProvision,
}
impl ClientDescriptor {
	pub(crate) fn new(name: String, provision: ClientProvision) -> Self {
		Self { name, provision }
	}

	/// Resolved display/lookup name, unique within the family.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Protocol family of the descriptor.
	pub fn family(&self) -> ClientFamily {
		self.provision.family()
	}

	/// Family-specific payload consumed by the protocol-execution layer.
	pub fn provision(&self) -> &ClientProvision {
		&self.provision
	}
}

/// Filter predicate over config blocks that traces skipped provider slots.
pub(crate) fn instantiable<C>(family: ClientFamily) -> impl Fn(&&C) -> bool
where
	C: FieldValidator,
{
	move |config| {
		let configured = config.is_configured();

		#[cfg(feature = "tracing")]
		if !configured {
			tracing::trace!(family = %family, "Skipping provider instance with blank required fields.");
		}
		#[cfg(not(feature = "tracing"))]
		let _ = family;

		configured
	}
}
