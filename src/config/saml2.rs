// self
use crate::{
	_prelude::*,
	config::{FieldValidator, is_not_blank},
};

/// One SAML 2.0 service-provider instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Saml2Config {
	/// Path to the signing/decryption keystore.
	pub keystore_path: String,
	/// Keystore password.
	pub keystore_password: String,
	/// Private key password.
	pub private_key_password: String,
	/// Optional keystore alias.
	pub keystore_alias: Option<String>,
	/// Path to the identity-provider metadata document.
	pub identity_provider_metadata_path: String,
	/// Maximum accepted age of an upstream authentication, in seconds.
	pub maximum_authentication_lifetime_secs: i64,
	/// Service-provider entity id.
	pub service_provider_entity_id: String,
	/// Path the service-provider metadata is generated at.
	pub service_provider_metadata_path: String,
	/// Destination binding URN for authentication requests.
	pub destination_binding: String,
	/// Whether the identity provider is asked to re-authenticate.
	pub force_auth: bool,
	/// Whether passive authentication is requested.
	pub passive: bool,
	/// Whether assertions must be signed by the identity provider.
	pub wants_assertions_signed: bool,
	/// Attribute-consuming-service index forwarded in requests.
	pub attribute_consuming_service_index: i32,
	/// Optional authentication-context class reference URN.
	pub authn_context_class_ref: Option<String>,
	/// Comparison type for the class reference; upper-cased and applied only
	/// when a class reference is supplied.
	pub authn_context_comparison_type: String,
	/// Optional name-id policy format URN.
	pub name_id_policy_format: Option<String>,
	/// Optional explicit display name.
	pub client_name: Option<String>,
}
impl Default for Saml2Config {
	fn default() -> Self {
		Self {
			keystore_path: String::new(),
			keystore_password: String::new(),
			private_key_password: String::new(),
			keystore_alias: None,
			identity_provider_metadata_path: String::new(),
			maximum_authentication_lifetime_secs: 3_600,
			service_provider_entity_id: String::new(),
			service_provider_metadata_path: String::new(),
			destination_binding: "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-Redirect".into(),
			force_auth: false,
			passive: false,
			wants_assertions_signed: false,
			attribute_consuming_service_index: 0,
			authn_context_class_ref: None,
			authn_context_comparison_type: "exact".into(),
			name_id_policy_format: None,
			client_name: None,
		}
	}
}
impl FieldValidator for Saml2Config {
	fn is_configured(&self) -> bool {
		is_not_blank(&self.keystore_path)
			&& is_not_blank(&self.identity_provider_metadata_path)
			&& is_not_blank(&self.service_provider_entity_id)
			&& is_not_blank(&self.service_provider_metadata_path)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn complete() -> Saml2Config {
		Saml2Config {
			keystore_path: "/etc/sso/keystore.jks".into(),
			identity_provider_metadata_path: "/etc/sso/idp-metadata.xml".into(),
			service_provider_entity_id: "https://sso.example.org/sp".into(),
			service_provider_metadata_path: "/etc/sso/sp-metadata.xml".into(),
			..Saml2Config::default()
		}
	}

	#[test]
	fn requires_all_four_paths() {
		assert!(complete().is_configured());

		for strip in [
			|config: &mut Saml2Config| config.keystore_path.clear(),
			|config: &mut Saml2Config| config.identity_provider_metadata_path.clear(),
			|config: &mut Saml2Config| config.service_provider_entity_id.clear(),
			|config: &mut Saml2Config| config.service_provider_metadata_path.clear(),
		] {
			let mut config = complete();

			strip(&mut config);

			assert!(!config.is_configured(), "Any blank required field must fail the check.");
		}
	}
}
