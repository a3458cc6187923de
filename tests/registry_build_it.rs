// self
use delegated_auth::{
	client::{ClientFamily, ClientProvision, HttpVerb, OidcVariant},
	config::{CasConfig, DelegatedAuthConfig, NamedOAuth2Config, OAuth2Config, Saml2Config},
	error::{BuildError, Error},
	registry::ClientRegistry,
};

fn named_config(client_name: Option<&str>) -> NamedOAuth2Config {
	NamedOAuth2Config {
		id: "app-id".into(),
		secret: "app-secret".into(),
		client_name: client_name.map(str::to_owned),
		..NamedOAuth2Config::default()
	}
}

fn saml_config() -> Saml2Config {
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
fn single_unnamed_cas_client_keeps_the_default_name() {
	let snapshot = DelegatedAuthConfig {
		cas: vec![CasConfig {
			login_url: "https://idp.example.org/cas".into(),
			..CasConfig::default()
		}],
		..DelegatedAuthConfig::default()
	};
	let clients = ClientRegistry::new(snapshot)
		.build()
		.expect("Single CAS snapshot should build successfully.");

	assert_eq!(clients.len(), 1);

	let descriptor = clients.iter().next().expect("One CAS descriptor should be present.");

	assert_eq!(descriptor.family(), ClientFamily::Cas);
	assert_eq!(descriptor.name(), "CasClient");
}

#[test]
fn two_unnamed_instances_of_one_named_provider_get_distinct_names() {
	let snapshot = DelegatedAuthConfig {
		github: vec![named_config(None), named_config(None)],
		..DelegatedAuthConfig::default()
	};
	let clients = ClientRegistry::new(snapshot)
		.build()
		.expect("Two GitHub instances should build successfully.");

	assert_eq!(
		clients.iter().map(|descriptor| descriptor.name()).collect::<Vec<_>>(),
		vec!["GithubClient", "GithubClient1"]
	);
}

#[test]
fn oidc_azure_type_routes_to_the_azure_variant() {
	let snapshot = DelegatedAuthConfig::from_json_str(
		r#"{"oidc": [{"id": "client-id", "secret": "client-secret", "type": "azure"}]}"#,
	)
	.expect("OIDC snapshot should decode successfully.");
	let clients = ClientRegistry::new(snapshot)
		.build()
		.expect("Azure OIDC snapshot should build successfully.");
	let descriptor = clients
		.get(ClientFamily::Oidc, "AzureAdClient")
		.expect("The Azure-variant descriptor should be present under its default name.");
	let ClientProvision::Oidc(client) = descriptor.provision() else {
		panic!("Descriptor should carry an OIDC payload.");
	};

	assert_eq!(client.variant, OidcVariant::Azure);
}

#[test]
fn saml_instance_missing_sp_metadata_path_is_skipped() {
	let mut incomplete = saml_config();

	incomplete.service_provider_metadata_path.clear();

	let snapshot =
		DelegatedAuthConfig { saml2: vec![incomplete], ..DelegatedAuthConfig::default() };
	let clients = ClientRegistry::new(snapshot)
		.build()
		.expect("Skipped SAML instances should never raise an error.");

	assert!(clients.is_empty());
}

#[test]
fn generic_profile_verb_parses_or_fails_the_build() {
	let config = OAuth2Config {
		id: "generic-id".into(),
		secret: "generic-secret".into(),
		profile_verb: "post".into(),
		..OAuth2Config::default()
	};
	let snapshot = DelegatedAuthConfig {
		oauth2: vec![config.clone()],
		..DelegatedAuthConfig::default()
	};
	let clients = ClientRegistry::new(snapshot)
		.build()
		.expect("Lower-cased POST verb should build successfully.");
	let descriptor = clients
		.get(ClientFamily::OAuth2, "GenericOAuth2Client")
		.expect("Generic descriptor should be present under its default name.");
	let ClientProvision::OAuth2(client) = descriptor.provision() else {
		panic!("Descriptor should carry a generic OAuth 2.0 payload.");
	};

	assert_eq!(client.profile_verb, HttpVerb::Post);

	let broken = OAuth2Config { profile_verb: "bogus".into(), ..config };
	let snapshot =
		DelegatedAuthConfig { oauth2: vec![broken], ..DelegatedAuthConfig::default() };
	let err = ClientRegistry::new(snapshot)
		.build()
		.expect_err("Malformed verb must fail the whole build.");

	let Error::Build(build_err) = err else {
		panic!("Malformed verb should surface as a build error.");
	};

	assert_eq!(build_err, BuildError::ProfileVerb { value: "bogus".into() });
	assert_eq!(build_err.family(), ClientFamily::OAuth2);
	assert_eq!(build_err.field(), "profile_verb");
}

#[test]
fn explicit_names_are_used_verbatim_even_for_the_first_instance() {
	let snapshot = DelegatedAuthConfig {
		facebook: vec![named_config(Some("Corporate Login")), named_config(None)],
		..DelegatedAuthConfig::default()
	};
	let clients = ClientRegistry::new(snapshot)
		.build()
		.expect("Facebook snapshot should build successfully.");

	assert_eq!(
		clients.iter().map(|descriptor| descriptor.name()).collect::<Vec<_>>(),
		vec!["Corporate Login", "FacebookClient1"]
	);
}

#[test]
fn families_are_emitted_in_fixed_priority_order() {
	let snapshot = DelegatedAuthConfig::from_json_str(
		r#"{
			"saml2": [{
				"keystore_path": "/etc/sso/keystore.jks",
				"identity_provider_metadata_path": "/etc/sso/idp-metadata.xml",
				"service_provider_entity_id": "https://sso.example.org/sp",
				"service_provider_metadata_path": "/etc/sso/sp-metadata.xml"
			}],
			"oauth2": [{"id": "generic-id", "secret": "generic-secret"}],
			"oidc": [{"id": "client-id", "secret": "client-secret", "type": "keycloak"}],
			"github": [{"id": "app-id", "secret": "app-secret"}],
			"facebook": [{"id": "app-id", "secret": "app-secret"}],
			"cas": [{"login_url": "https://idp.example.org/cas"}]
		}"#,
	)
	.expect("Mixed snapshot should decode successfully.");
	let clients = ClientRegistry::new(snapshot)
		.build()
		.expect("Mixed snapshot should build successfully.");

	assert_eq!(
		clients.iter().map(|descriptor| descriptor.name()).collect::<Vec<_>>(),
		vec![
			"CasClient",
			"FacebookClient",
			"GithubClient",
			"KeycloakOidcClient",
			"GenericOAuth2Client",
			"Saml2Client",
		],
		"Output order must follow the fixed family priority, not the snapshot's key order."
	);
}

#[test]
fn identical_snapshots_build_identical_collections() {
	let snapshot = DelegatedAuthConfig {
		cas: vec![CasConfig {
			login_url: "https://idp.example.org/cas".into(),
			..CasConfig::default()
		}],
		github: vec![named_config(None), named_config(Some("Work"))],
		saml2: vec![saml_config()],
		..DelegatedAuthConfig::default()
	};
	let registry = ClientRegistry::new(snapshot);
	let first = registry.build().expect("First build should succeed.");
	let second = registry.build().expect("Second build should succeed.");

	assert_eq!(first, second, "Repeated builds over one snapshot must be idempotent.");
}

#[test]
fn blank_provider_slots_produce_no_descriptors() {
	let snapshot = DelegatedAuthConfig {
		cas: vec![CasConfig::default()],
		github: vec![NamedOAuth2Config { id: "app-id".into(), ..NamedOAuth2Config::default() }],
		oauth2: vec![OAuth2Config::default()],
		..DelegatedAuthConfig::default()
	};
	let clients = ClientRegistry::new(snapshot)
		.build()
		.expect("Blank slots should be skipped without error.");

	assert!(clients.is_empty());
}
