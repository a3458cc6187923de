//! Registry orchestration: validate, build, name, and accumulate delegated
//! clients into a deterministic collection.

pub mod name;

pub use name::*;

// self
use crate::{
	_prelude::*,
	client::{self, ClientDescriptor, ClientFamily, NamedProvider},
	config::DelegatedAuthConfig,
};

/// Turns a configuration snapshot into a deduplicated, insertion-ordered
/// collection of client descriptors.
///
/// The registry is stateless across invocations: every [`build`](Self::build)
/// call folds over the same immutable snapshot and produces a fresh
/// collection, so it may be driven from multiple threads without shared
/// mutable state. Identical snapshots always produce identical collections.
#[derive(Clone, Debug)]
pub struct ClientRegistry {
	config: DelegatedAuthConfig,
}
impl ClientRegistry {
	/// Creates a registry over the provided configuration snapshot.
	pub fn new(config: DelegatedAuthConfig) -> Self {
		Self { config }
	}

	/// Builds the descriptor collection.
	///
	/// Families are processed in a fixed order: CAS, the named OAuth 2.0
	/// providers in enumeration order, OIDC, generic OAuth 2.0, and SAML 2.0.
	/// Instances failing their required-field check are skipped silently; a
	/// malformed enum-like field fails the whole call so the caller never
	/// receives a half-provisioned client set.
	pub fn build(&self) -> Result<DescriptorSet> {
		let mut clients = DescriptorSet::default();

		extend(&mut clients, client::build_cas_clients(&self.config.cas)?);

		for provider in NamedProvider::ALL {
			extend(
				&mut clients,
				client::build_named_clients(provider, self.config.named_provider(provider))?,
			);
		}

		extend(&mut clients, client::build_oidc_clients(&self.config.oidc)?);
		extend(&mut clients, client::build_generic_clients(&self.config.oauth2)?);
		extend(&mut clients, client::build_saml2_clients(&self.config.saml2)?);

		Ok(clients)
	}
}

fn extend(clients: &mut DescriptorSet, built: Vec<ClientDescriptor>) {
	for descriptor in built {
		#[cfg(feature = "tracing")]
		tracing::debug!(
			client = descriptor.name(),
			family = %descriptor.family(),
			"Constructed delegated client."
		);

		clients.insert(descriptor);
	}
}

/// Insertion-ordered collection of descriptors, deduplicated by
/// `(family, name)` identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DescriptorSet {
	descriptors: Vec<ClientDescriptor>,
}
impl DescriptorSet {
	/// Appends a descriptor unless its identity is already present.
	///
	/// Returns false when an earlier descriptor already occupies the same
	/// family + name; the set keeps the first occurrence.
	pub fn insert(&mut self, descriptor: ClientDescriptor) -> bool {
		if self.contains(descriptor.family(), descriptor.name()) {
			#[cfg(feature = "tracing")]
			tracing::debug!(
				client = descriptor.name(),
				family = %descriptor.family(),
				"Dropped duplicate delegated client identity."
			);

			return false;
		}

		self.descriptors.push(descriptor);

		true
	}

	/// True when a descriptor with the identity is present.
	pub fn contains(&self, family: ClientFamily, name: &str) -> bool {
		self.get(family, name).is_some()
	}

	/// Looks up a descriptor by identity.
	pub fn get(&self, family: ClientFamily, name: &str) -> Option<&ClientDescriptor> {
		self.descriptors
			.iter()
			.find(|descriptor| descriptor.family() == family && descriptor.name() == name)
	}

	/// Number of descriptors.
	pub fn len(&self) -> usize {
		self.descriptors.len()
	}

	/// True when no descriptors are present.
	pub fn is_empty(&self) -> bool {
		self.descriptors.is_empty()
	}

	/// Iterates descriptors in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &ClientDescriptor> {
		self.descriptors.iter()
	}
}
impl IntoIterator for DescriptorSet {
	type IntoIter = std::vec::IntoIter<ClientDescriptor>;
	type Item = ClientDescriptor;

	fn into_iter(self) -> Self::IntoIter {
		self.descriptors.into_iter()
	}
}
impl<'a> IntoIterator for &'a DescriptorSet {
	type IntoIter = std::slice::Iter<'a, ClientDescriptor>;
	type Item = &'a ClientDescriptor;

	fn into_iter(self) -> Self::IntoIter {
		self.descriptors.iter()
	}
}
