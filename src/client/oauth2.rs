// self
use crate::{
	_prelude::*,
	client::{ClientDescriptor, ClientFamily, ClientProvision, instantiable},
	config::{NamedOAuth2Config, OAuth2Config, filled},
	error::BuildError,
	registry::resolve_name,
};

/// Fixed enumeration of supported named OAuth 2.0 providers, in registry
/// processing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedProvider {
	/// Facebook login.
	Facebook,
	/// Twitter login.
	Twitter,
	/// Dropbox login.
	Dropbox,
	/// Foursquare login.
	Foursquare,
	/// GitHub login.
	Github,
	/// Google login.
	Google,
	/// Windows Live login.
	WindowsLive,
	/// Yahoo login.
	Yahoo,
	/// LinkedIn login.
	LinkedIn,
	/// PayPal login.
	Paypal,
	/// WordPress login.
	WordPress,
	/// Bitbucket login.
	Bitbucket,
	/// ORCID login.
	Orcid,
}
impl NamedProvider {
	/// Every supported provider, in registry processing order.
	pub const ALL: [NamedProvider; 13] = [
		NamedProvider::Facebook,
		NamedProvider::Twitter,
		NamedProvider::Dropbox,
		NamedProvider::Foursquare,
		NamedProvider::Github,
		NamedProvider::Google,
		NamedProvider::WindowsLive,
		NamedProvider::Yahoo,
		NamedProvider::LinkedIn,
		NamedProvider::Paypal,
		NamedProvider::WordPress,
		NamedProvider::Bitbucket,
		NamedProvider::Orcid,
	];

	/// Canonical client name for unnamed instances of the provider.
	pub const fn default_name(self) -> &'static str {
		match self {
			NamedProvider::Facebook => "FacebookClient",
			NamedProvider::Twitter => "TwitterClient",
			NamedProvider::Dropbox => "DropboxClient",
			NamedProvider::Foursquare => "FoursquareClient",
			NamedProvider::Github => "GithubClient",
			NamedProvider::Google => "GoogleClient",
			NamedProvider::WindowsLive => "WindowsLiveClient",
			NamedProvider::Yahoo => "YahooClient",
			NamedProvider::LinkedIn => "LinkedInClient",
			NamedProvider::Paypal => "PaypalClient",
			NamedProvider::WordPress => "WordPressClient",
			NamedProvider::Bitbucket => "BitbucketClient",
			NamedProvider::Orcid => "OrcidClient",
		}
	}

	// Facebook and LinkedIn accept free-form scope + profile field overrides;
	// Google takes a typed scope and every other provider keeps the protocol
	// library defaults.
	const fn supports_profile_overrides(self) -> bool {
		matches!(self, NamedProvider::Facebook | NamedProvider::LinkedIn)
	}
}
impl Display for NamedProvider {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.default_name())
	}
}

/// Typed Google scope presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoogleScope {
	/// Email address only.
	Email,
	/// Basic profile only.
	Profile,
	/// Email address and basic profile.
	EmailAndProfile,
}
impl GoogleScope {
	/// Returns the canonical scope label.
	pub const fn as_str(self) -> &'static str {
		match self {
			GoogleScope::Email => "EMAIL",
			GoogleScope::Profile => "PROFILE",
			GoogleScope::EmailAndProfile => "EMAIL_AND_PROFILE",
		}
	}
}
impl Display for GoogleScope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for GoogleScope {
	type Err = BuildError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"EMAIL" => Ok(GoogleScope::Email),
			"PROFILE" => Ok(GoogleScope::Profile),
			"EMAIL_AND_PROFILE" => Ok(GoogleScope::EmailAndProfile),
			_ => Err(BuildError::GoogleScope { value: s.to_owned() }),
		}
	}
}

/// HTTP verbs accepted for generic OAuth 2.0 profile retrieval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpVerb {
	/// HTTP GET.
	Get,
	/// HTTP POST.
	Post,
	/// HTTP PUT.
	Put,
	/// HTTP DELETE.
	Delete,
	/// HTTP HEAD.
	Head,
	/// HTTP OPTIONS.
	Options,
	/// HTTP PATCH.
	Patch,
}
impl HttpVerb {
	/// Returns the canonical verb label.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpVerb::Get => "GET",
			HttpVerb::Post => "POST",
			HttpVerb::Put => "PUT",
			HttpVerb::Delete => "DELETE",
			HttpVerb::Head => "HEAD",
			HttpVerb::Options => "OPTIONS",
			HttpVerb::Patch => "PATCH",
		}
	}
}
impl Display for HttpVerb {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for HttpVerb {
	type Err = BuildError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		// Upper-normalize before lookup so configured verbs bind case-insensitively.
		match s.to_ascii_uppercase().as_str() {
			"GET" => Ok(HttpVerb::Get),
			"POST" => Ok(HttpVerb::Post),
			"PUT" => Ok(HttpVerb::Put),
			"DELETE" => Ok(HttpVerb::Delete),
			"HEAD" => Ok(HttpVerb::Head),
			"OPTIONS" => Ok(HttpVerb::Options),
			"PATCH" => Ok(HttpVerb::Patch),
			_ => Err(BuildError::ProfileVerb { value: s.to_owned() }),
		}
	}
}

/// Named-provider OAuth 2.0 client payload.
///
/// `None` overrides mean "keep the protocol library's built-in default"; the
/// builder never replaces a default with an empty value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedOAuth2Client {
	/// Provider the client authenticates against.
	pub provider: NamedProvider,
	/// OAuth application identifier.
	pub key: String,
	/// OAuth application secret.
	pub secret: String,
	/// Free-form scope override (Facebook, LinkedIn).
	pub scope: Option<String>,
	/// Profile field list override (Facebook, LinkedIn).
	pub fields: Option<String>,
	/// Typed scope override (Google).
	pub google_scope: Option<GoogleScope>,
}

/// Generic OAuth 2.0 client payload with explicit endpoint wiring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuth2Client {
	/// OAuth application identifier.
	pub key: String,
	/// OAuth application secret.
	pub secret: String,
	/// Authorization endpoint URL.
	pub auth_url: String,
	/// Token endpoint URL.
	pub token_url: String,
	/// Profile endpoint URL.
	pub profile_url: String,
	/// Node path the profile payload is extracted from.
	pub profile_path: String,
	/// Profile attribute mapping.
	pub profile_attrs: BTreeMap<String, String>,
	/// Custom request parameters.
	pub custom_params: BTreeMap<String, String>,
	/// HTTP verb used for profile retrieval.
	pub profile_verb: HttpVerb,
}
impl OAuth2Client {
	/// Canonical client name for unnamed instances.
	pub const DEFAULT_NAME: &'static str = "GenericOAuth2Client";
}

/// Builds descriptors for every instantiable config block of one named
/// provider.
pub fn build_named_clients(
	provider: NamedProvider,
	configs: &[NamedOAuth2Config],
) -> Result<Vec<ClientDescriptor>, BuildError> {
	configs
		.iter()
		.filter(instantiable(ClientFamily::NamedOAuth2))
		.enumerate()
		.map(|(ordinal, config)| {
			let provision = ClientProvision::NamedOAuth2(named_client(provider, config)?);
			let name =
				resolve_name(provision.default_name(), config.client_name.as_deref(), ordinal);

			Ok(ClientDescriptor::new(name, provision))
		})
		.collect()
}

fn named_client(
	provider: NamedProvider,
	config: &NamedOAuth2Config,
) -> Result<NamedOAuth2Client, BuildError> {
	let mut client = NamedOAuth2Client {
		provider,
		key: config.id.clone(),
		secret: config.secret.clone(),
		scope: None,
		fields: None,
		google_scope: None,
	};

	if provider == NamedProvider::Google {
		client.google_scope = filled(&config.scope).map(|label| label.parse()).transpose()?;
	} else if provider.supports_profile_overrides() {
		client.scope = filled(&config.scope);
		client.fields = filled(&config.fields);
	}

	Ok(client)
}

/// Builds descriptors for every instantiable generic OAuth 2.0 config block.
pub fn build_generic_clients(configs: &[OAuth2Config]) -> Result<Vec<ClientDescriptor>, BuildError> {
	configs
		.iter()
		.filter(instantiable(ClientFamily::OAuth2))
		.enumerate()
		.map(|(ordinal, config)| {
			let provision = ClientProvision::OAuth2(OAuth2Client {
				key: config.id.clone(),
				secret: config.secret.clone(),
				auth_url: config.auth_url.clone(),
				token_url: config.token_url.clone(),
				profile_url: config.profile_url.clone(),
				profile_path: config.profile_path.clone(),
				profile_attrs: config.profile_attrs.clone(),
				custom_params: config.custom_params.clone(),
				profile_verb: config.profile_verb.parse()?,
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

	fn named_config() -> NamedOAuth2Config {
		NamedOAuth2Config {
			id: "app-id".into(),
			secret: "app-secret".into(),
			..NamedOAuth2Config::default()
		}
	}

	#[test]
	fn verb_parses_case_insensitively() {
		assert_eq!("post".parse::<HttpVerb>(), Ok(HttpVerb::Post));
		assert_eq!("Get".parse::<HttpVerb>(), Ok(HttpVerb::Get));
		assert_eq!(
			"bogus".parse::<HttpVerb>(),
			Err(BuildError::ProfileVerb { value: "bogus".into() })
		);
	}

	#[test]
	fn two_unnamed_instances_never_collide() {
		let clients =
			build_named_clients(NamedProvider::Github, &[named_config(), named_config()])
				.expect("Both GitHub instances should build successfully.");

		assert_eq!(
			clients.iter().map(ClientDescriptor::name).collect::<Vec<_>>(),
			vec!["GithubClient", "GithubClient1"]
		);
	}

	#[test]
	fn blank_scope_keeps_the_library_default() {
		let mut config = named_config();

		config.scope = Some("   ".into());
		config.fields = Some(String::new());

		let clients = build_named_clients(NamedProvider::Facebook, &[config])
			.expect("Facebook instance should build successfully.");
		let ClientProvision::NamedOAuth2(client) = clients[0].provision() else {
			panic!("Facebook descriptor should carry a named-provider payload.");
		};

		assert_eq!(client.scope, None);
		assert_eq!(client.fields, None);
	}

	#[test]
	fn google_scope_is_typed_and_fatal_when_malformed() {
		let mut config = named_config();

		config.scope = Some("email_and_profile".into());

		let clients = build_named_clients(NamedProvider::Google, &[config.clone()])
			.expect("Google instance with a valid scope should build successfully.");
		let ClientProvision::NamedOAuth2(client) = clients[0].provision() else {
			panic!("Google descriptor should carry a named-provider payload.");
		};

		assert_eq!(client.google_scope, Some(GoogleScope::EmailAndProfile));

		config.scope = Some("everything".into());

		let err = build_named_clients(NamedProvider::Google, &[config])
			.expect_err("Malformed Google scope must be fatal.");

		assert_eq!(err.family(), ClientFamily::NamedOAuth2);
	}

	#[test]
	fn overrides_are_ignored_without_the_capability() {
		let mut config = named_config();

		config.scope = Some("user:email".into());
		config.fields = Some("login".into());

		let clients = build_named_clients(NamedProvider::Twitter, &[config])
			.expect("Twitter instance should build successfully.");
		let ClientProvision::NamedOAuth2(client) = clients[0].provision() else {
			panic!("Twitter descriptor should carry a named-provider payload.");
		};

		assert_eq!(client.scope, None);
		assert_eq!(client.fields, None);
	}

	#[test]
	fn generic_build_maps_endpoints_and_verb() {
		let config = OAuth2Config {
			id: "generic-id".into(),
			secret: "generic-secret".into(),
			auth_url: "https://provider.example.org/authorize".into(),
			token_url: "https://provider.example.org/token".into(),
			profile_url: "https://provider.example.org/profile".into(),
			profile_path: "data".into(),
			profile_verb: "post".into(),
			..OAuth2Config::default()
		};
		let clients = build_generic_clients(&[config])
			.expect("Generic OAuth 2.0 instance should build successfully.");
		let ClientProvision::OAuth2(client) = clients[0].provision() else {
			panic!("Generic descriptor should carry an OAuth 2.0 payload.");
		};

		assert_eq!(clients[0].name(), OAuth2Client::DEFAULT_NAME);
		assert_eq!(client.profile_verb, HttpVerb::Post);
		assert_eq!(client.auth_url, "https://provider.example.org/authorize");
	}
}
