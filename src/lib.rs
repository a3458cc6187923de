//! Rust’s turnkey delegated-authentication provisioner—turn declarative CAS, OAuth 2.0, OIDC, and
//! SAML 2.0 provider configuration into validated, uniquely-named login clients in one crate built
//! for production.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod client;
pub mod config;
pub mod digest;
pub mod error;
pub mod registry;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::Duration;

	pub use crate::error::{Error, Result};
}
