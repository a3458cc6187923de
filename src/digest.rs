//! HTTP Digest authentication support registered alongside the delegated
//! clients.
//!
//! Architecturally separate from the registry: the handler performs a
//! challenge/response credential check against a separately-supplied service
//! registry, and the plan configurer hands the handler/resolver pair to the
//! hosting server's authentication plan. Protocol execution (challenge
//! headers, transport) stays with the host.

// std
use std::collections::HashSet;
// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD_NO_PAD};
use parking_lot::Mutex;
use rand::RngCore;
use sha2::{Digest, Sha256};
// self
use crate::_prelude::*;

/// Errors raised while validating digest credentials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum DigestAuthenticationError {
	/// No digest secret is on record for the username.
	#[error("Unknown account `{username}`.")]
	UnknownAccount {
		/// Username the lookup failed for.
		username: String,
	},
	/// The nonce was never issued or has already been consumed.
	#[error("Stale or unknown nonce.")]
	StaleNonce,
	/// The response digest does not match the expected value.
	#[error("Digest response mismatch.")]
	BadResponse,
}

/// Authenticated principal minted after a successful credential check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
	/// Principal identifier (the authenticated username).
	pub id: String,
	/// Attributes attached by the factory.
	pub attributes: BTreeMap<String, String>,
}

/// Mints principals for authenticated credentials.
pub trait PrincipalFactory: Send + Sync {
	/// Creates a principal for the provided identifier.
	fn create(&self, id: &str) -> Principal;
}

/// Factory producing attribute-less principals.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimplePrincipalFactory;
impl PrincipalFactory for SimplePrincipalFactory {
	fn create(&self, id: &str) -> Principal {
		Principal { id: id.to_owned(), attributes: BTreeMap::new() }
	}
}

/// Resolves the full principal behind an authenticated identifier; paired
/// with the handler when registering into an authentication plan.
pub trait PrincipalResolver: Send + Sync {
	/// Resolves directory state for the identifier, if any.
	fn resolve(&self, id: &str) -> Option<Principal>;
}

/// Separately-supplied account source exposing stored digest secrets.
pub trait ServiceRegistry: Send + Sync {
	/// Returns the stored digest secret (HA1) for the username, if any.
	fn digest_secret(&self, username: &str) -> Option<String>;
}

/// One challenge/response credential pair submitted by a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestCredential {
	/// Account username.
	pub username: String,
	/// HTTP method of the guarded request.
	pub method: String,
	/// Request URI of the guarded request.
	pub uri: String,
	/// Server-issued nonce echoed by the client.
	pub nonce: String,
	/// Client-computed response digest.
	pub response: String,
}

/// Challenge/response handler validating digest credentials against the
/// service registry.
///
/// Nonces are single-use: [`issue_nonce`](Self::issue_nonce) records the
/// nonce, [`authenticate`](Self::authenticate) consumes it whether or not the
/// digest matches, so a replayed credential never gets a second attempt.
pub struct DigestAuthenticationHandler {
	name: String,
	services: Arc<dyn ServiceRegistry>,
	principals: Arc<dyn PrincipalFactory>,
	outstanding_nonces: Mutex<HashSet<String>>,
}
impl DigestAuthenticationHandler {
	const NONCE_LEN: usize = 16;

	/// Creates a handler over the provided service registry and principal
	/// factory.
	pub fn new(
		name: impl Into<String>,
		services: Arc<dyn ServiceRegistry>,
		principals: Arc<dyn PrincipalFactory>,
	) -> Self {
		Self {
			name: name.into(),
			services,
			principals,
			outstanding_nonces: Mutex::new(HashSet::new()),
		}
	}

	/// Handler name used during plan registration.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Issues a fresh single-use nonce for a challenge.
	pub fn issue_nonce(&self) -> String {
		let mut bytes = [0_u8; Self::NONCE_LEN];

		rand::rng().fill_bytes(&mut bytes);

		let nonce = STANDARD_NO_PAD.encode(bytes);

		self.outstanding_nonces.lock().insert(nonce.clone());

		nonce
	}

	/// Validates a credential and mints the authenticated principal.
	pub fn authenticate(
		&self,
		credential: &DigestCredential,
	) -> Result<Principal, DigestAuthenticationError> {
		if !self.outstanding_nonces.lock().remove(&credential.nonce) {
			return Err(DigestAuthenticationError::StaleNonce);
		}

		let ha1 = self.services.digest_secret(&credential.username).ok_or_else(|| {
			DigestAuthenticationError::UnknownAccount { username: credential.username.clone() }
		})?;
		let expected =
			digest_response(&ha1, &credential.nonce, &credential.method, &credential.uri);

		if expected != credential.response {
			return Err(DigestAuthenticationError::BadResponse);
		}

		Ok(self.principals.create(&credential.username))
	}
}
impl Debug for DigestAuthenticationHandler {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "DigestAuthenticationHandler({})", self.name)
	}
}

/// Computes the expected digest response for a credential.
///
/// The response is a base64 (no padding) SHA-256 digest over
/// `ha1:nonce:hash(method:uri)`; clients compute the same value from the
/// issued challenge.
pub fn digest_response(ha1: &str, nonce: &str, method: &str, uri: &str) -> String {
	let ha2 = hash(&format!("{method}:{uri}"));

	hash(&format!("{ha1}:{nonce}:{ha2}"))
}

fn hash(payload: &str) -> String {
	let mut hasher = Sha256::new();

	hasher.update(payload.as_bytes());

	STANDARD_NO_PAD.encode(hasher.finalize())
}

/// Authentication-plan collaborator owned by the hosting server.
pub trait AuthenticationPlan {
	/// Registers a handler together with the resolver consulted after it
	/// authenticates a credential.
	fn register_handler_with_resolver(
		&mut self,
		handler: Arc<DigestAuthenticationHandler>,
		resolver: Arc<dyn PrincipalResolver>,
	);
}

/// Pairs a digest handler with a principal resolver and hands both to the
/// hosting server's authentication plan.
#[derive(Clone)]
pub struct DigestAuthenticationPlanConfigurer {
	handler: Arc<DigestAuthenticationHandler>,
	resolver: Arc<dyn PrincipalResolver>,
}
impl DigestAuthenticationPlanConfigurer {
	/// Creates a configurer over the handler/resolver pair.
	pub fn new(
		handler: Arc<DigestAuthenticationHandler>,
		resolver: Arc<dyn PrincipalResolver>,
	) -> Self {
		Self { handler, resolver }
	}

	/// Registers the pair into the provided plan.
	pub fn configure(&self, plan: &mut dyn AuthenticationPlan) {
		plan.register_handler_with_resolver(self.handler.clone(), self.resolver.clone());
	}
}
impl Debug for DigestAuthenticationPlanConfigurer {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "DigestAuthenticationPlanConfigurer({})", self.handler.name)
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use super::*;

	struct StaticRegistry {
		secrets: HashMap<String, String>,
	}
	impl ServiceRegistry for StaticRegistry {
		fn digest_secret(&self, username: &str) -> Option<String> {
			self.secrets.get(username).cloned()
		}
	}

	fn handler() -> DigestAuthenticationHandler {
		let registry = StaticRegistry {
			secrets: HashMap::from_iter([("mmoayyed".to_string(), "ha1-secret".to_string())]),
		};

		DigestAuthenticationHandler::new(
			"digest",
			Arc::new(registry),
			Arc::new(SimplePrincipalFactory),
		)
	}

	fn credential(handler: &DigestAuthenticationHandler, username: &str) -> DigestCredential {
		let nonce = handler.issue_nonce();

		DigestCredential {
			username: username.into(),
			method: "GET".into(),
			uri: "/protected".into(),
			response: digest_response("ha1-secret", &nonce, "GET", "/protected"),
			nonce,
		}
	}

	#[test]
	fn valid_credential_mints_a_principal() {
		let handler = handler();
		let credential = credential(&handler, "mmoayyed");
		let principal = handler
			.authenticate(&credential)
			.expect("Valid digest credential should authenticate successfully.");

		assert_eq!(principal.id, "mmoayyed");
	}

	#[test]
	fn nonces_are_single_use() {
		let handler = handler();
		let credential = credential(&handler, "mmoayyed");

		handler
			.authenticate(&credential)
			.expect("First presentation of the credential should succeed.");

		assert_eq!(
			handler.authenticate(&credential),
			Err(DigestAuthenticationError::StaleNonce),
			"Replayed nonce must be rejected."
		);
	}

	#[test]
	fn unknown_accounts_are_rejected() {
		let handler = handler();
		let credential = credential(&handler, "nobody");

		assert_eq!(
			handler.authenticate(&credential),
			Err(DigestAuthenticationError::UnknownAccount { username: "nobody".into() })
		);
	}

	#[test]
	fn mismatched_response_is_rejected() {
		let handler = handler();
		let mut credential = credential(&handler, "mmoayyed");

		credential.response = "tampered".into();

		assert_eq!(
			handler.authenticate(&credential),
			Err(DigestAuthenticationError::BadResponse)
		);
	}
}
