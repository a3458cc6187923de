// self
use crate::{
	_prelude::*,
	config::{FieldValidator, is_not_blank},
};

/// One CAS-protocol proxy provider instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CasConfig {
	/// Login URL of the external CAS server.
	pub login_url: String,
	/// Protocol variant label, parsed against
	/// [`CasProtocol`](crate::client::CasProtocol) at build time.
	pub protocol: String,
	/// Optional explicit display name.
	pub client_name: Option<String>,
}
impl Default for CasConfig {
	fn default() -> Self {
		Self { login_url: String::new(), protocol: "CAS30".into(), client_name: None }
	}
}
impl FieldValidator for CasConfig {
	fn is_configured(&self) -> bool {
		is_not_blank(&self.login_url)
	}
}
