// self
use crate::{
	_prelude::*,
	client::{ClientDescriptor, ClientFamily, ClientProvision, instantiable},
	config::CasConfig,
	error::BuildError,
	registry::resolve_name,
};

/// CAS protocol variants spoken against an external CAS server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CasProtocol {
	/// CAS protocol 1.0.
	Cas10,
	/// CAS protocol 2.0.
	Cas20,
	/// CAS protocol 3.0.
	Cas30,
	/// SAML 1.1 ticket validation over the CAS endpoints.
	Saml,
}
impl CasProtocol {
	/// Returns the canonical protocol label.
	pub const fn as_str(self) -> &'static str {
		match self {
			CasProtocol::Cas10 => "CAS10",
			CasProtocol::Cas20 => "CAS20",
			CasProtocol::Cas30 => "CAS30",
			CasProtocol::Saml => "SAML",
		}
	}
}
impl Display for CasProtocol {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for CasProtocol {
	type Err = BuildError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"CAS10" => Ok(CasProtocol::Cas10),
			"CAS20" => Ok(CasProtocol::Cas20),
			"CAS30" => Ok(CasProtocol::Cas30),
			"SAML" => Ok(CasProtocol::Saml),
			_ => Err(BuildError::CasProtocol { value: s.to_owned() }),
		}
	}
}

/// CAS-protocol proxy client payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasClient {
	/// Login URL of the external CAS server.
	pub login_url: String,
	/// Protocol variant spoken against the server.
	pub protocol: CasProtocol,
}
impl CasClient {
	/// Canonical client name for unnamed instances.
	pub const DEFAULT_NAME: &'static str = "CasClient";
}

/// Builds descriptors for every instantiable CAS config block.
pub fn build_cas_clients(configs: &[CasConfig]) -> Result<Vec<ClientDescriptor>, BuildError> {
	configs
		.iter()
		.filter(instantiable(ClientFamily::Cas))
		.enumerate()
		.map(|(ordinal, config)| {
			let provision = ClientProvision::Cas(CasClient {
				login_url: config.login_url.clone(),
				protocol: config.protocol.parse()?,
			});
			let name =
				resolve_name(provision.default_name(), config.client_name.as_deref(), ordinal);

			Ok(ClientDescriptor::new(name, provision))
		})
		.collect()
}
