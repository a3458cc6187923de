// self
use crate::{
	_prelude::*,
	client::{ClientDescriptor, ClientFamily, ClientProvision, instantiable},
	config::{Saml2Config, filled},
	error::BuildError,
	registry::resolve_name,
};

/// Requested authentication-context class reference and its comparison rule.
///
/// The pair is only present when a class reference is configured; the
/// comparison type is upper-cased on construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthnContext {
	/// Class reference URN forwarded to the identity provider.
	pub class_ref: String,
	/// Comparison type (`EXACT`, `MINIMUM`, `MAXIMUM`, `BETTER`).
	pub comparison_type: String,
}

/// SAML 2.0 service-provider client payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Saml2Client {
	/// Path to the signing/decryption keystore.
	pub keystore_path: String,
	/// Keystore password.
	pub keystore_password: String,
	/// Private key password.
	pub private_key_password: String,
	/// Keystore alias, when overridden.
	pub keystore_alias: Option<String>,
	/// Path to the identity-provider metadata document.
	pub identity_provider_metadata_path: String,
	/// Maximum accepted age of an upstream authentication.
	pub maximum_authentication_lifetime: Duration,
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
	/// Authentication-context request, when a class reference is configured.
	pub authn_context: Option<AuthnContext>,
	/// Name-id policy format URN, when overridden.
	pub name_id_policy_format: Option<String>,
}
impl Saml2Client {
	/// Canonical client name for unnamed instances.
	pub const DEFAULT_NAME: &'static str = "Saml2Client";
}

/// Builds descriptors for every instantiable SAML 2.0 config block.
pub fn build_saml2_clients(configs: &[Saml2Config]) -> Result<Vec<ClientDescriptor>, BuildError> {
	configs
		.iter()
		.filter(instantiable(ClientFamily::Saml2))
		.enumerate()
		.map(|(ordinal, config)| {
			let provision = ClientProvision::Saml2(Saml2Client {
				keystore_path: config.keystore_path.clone(),
				keystore_password: config.keystore_password.clone(),
				private_key_password: config.private_key_password.clone(),
				keystore_alias: filled(&config.keystore_alias),
				identity_provider_metadata_path: config.identity_provider_metadata_path.clone(),
				maximum_authentication_lifetime: Duration::seconds(
					config.maximum_authentication_lifetime_secs,
				),
				service_provider_entity_id: config.service_provider_entity_id.clone(),
				service_provider_metadata_path: config.service_provider_metadata_path.clone(),
				destination_binding: config.destination_binding.clone(),
				force_auth: config.force_auth,
				passive: config.passive,
				wants_assertions_signed: config.wants_assertions_signed,
				attribute_consuming_service_index: config.attribute_consuming_service_index,
				authn_context: filled(&config.authn_context_class_ref).map(|class_ref| {
					AuthnContext {
						class_ref,
						comparison_type: config.authn_context_comparison_type.to_uppercase(),
					}
				}),
				name_id_policy_format: filled(&config.name_id_policy_format),
			});
			let name =
				resolve_name(provision.default_name(), config.client_name.as_deref(), ordinal);

			Ok(ClientDescriptor::new(name, provision))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn config() -> Saml2Config {
		Saml2Config {
			keystore_path: "/etc/sso/keystore.jks".into(),
			keystore_password: "changeit".into(),
			private_key_password: "changeit".into(),
			identity_provider_metadata_path: "/etc/sso/idp-metadata.xml".into(),
			service_provider_entity_id: "https://sso.example.org/sp".into(),
			service_provider_metadata_path: "/etc/sso/sp-metadata.xml".into(),
			..Saml2Config::default()
		}
	}

	#[test]
	fn missing_sp_metadata_path_yields_no_descriptor() {
		let mut incomplete = config();

		incomplete.service_provider_metadata_path.clear();

		let clients = build_saml2_clients(&[incomplete])
			.expect("Skipped instances should never raise an error.");

		assert!(clients.is_empty());
	}

	#[test]
	fn authn_context_is_set_only_with_a_class_ref() {
		let mut with_ref = config();

		with_ref.authn_context_class_ref =
			Some("urn:oasis:names:tc:SAML:2.0:ac:classes:PasswordProtectedTransport".into());
		with_ref.authn_context_comparison_type = "minimum".into();

		let clients = build_saml2_clients(&[config(), with_ref])
			.expect("Both SAML instances should build successfully.");
		let ClientProvision::Saml2(bare) = clients[0].provision() else {
			panic!("First descriptor should carry a SAML payload.");
		};
		let ClientProvision::Saml2(contextual) = clients[1].provision() else {
			panic!("Second descriptor should carry a SAML payload.");
		};

		assert_eq!(bare.authn_context, None);

		let context = contextual
			.authn_context
			.as_ref()
			.expect("Configured class reference should populate the context.");

		assert_eq!(context.comparison_type, "MINIMUM");
	}

	#[test]
	fn second_unnamed_instance_is_suffixed() {
		let clients = build_saml2_clients(&[config(), config()])
			.expect("Both SAML instances should build successfully.");

		assert_eq!(
			clients.iter().map(ClientDescriptor::name).collect::<Vec<_>>(),
			vec!["Saml2Client", "Saml2Client1"]
		);
	}

	#[test]
	fn defaults_flow_into_the_payload() {
		let clients =
			build_saml2_clients(&[config()]).expect("SAML instance should build successfully.");
		let ClientProvision::Saml2(client) = clients[0].provision() else {
			panic!("Descriptor should carry a SAML payload.");
		};

		assert_eq!(client.maximum_authentication_lifetime, Duration::seconds(3_600));
		assert_eq!(
			client.destination_binding,
			"urn:oasis:names:tc:SAML:2.0:bindings:HTTP-Redirect"
		);
		assert!(!client.wants_assertions_signed);
	}
}
