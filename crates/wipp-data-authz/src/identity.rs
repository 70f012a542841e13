// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The identity on whose behalf a check runs.
//!
//! Authentication happens outside this crate. The request boundary builds an
//! [`ActingIdentity`] from whatever it authenticated with and passes it into
//! every check explicitly; nothing here reads ambient or global state.

use serde::{Deserialize, Serialize};

/// Authority granted to every logged-in user by the identity provider.
pub const AUTHENTICATED_ROLE: &str = "user";

/// The requester of an authorization check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActingIdentity {
	/// Principal name, compared verbatim against resource owners.
	pub name: String,
	/// Authorities granted by the identity provider.
	#[serde(default)]
	pub authorities: Vec<String>,
}

impl ActingIdentity {
	/// Creates an identity with no granted authorities.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			authorities: Vec::new(),
		}
	}

	/// Builder: set the granted authorities.
	pub fn with_authorities<I, S>(mut self, authorities: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.authorities = authorities.into_iter().map(Into::into).collect();
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns true if the identity owns a resource owned by `owner`.
	///
	/// Exact string equality: no case folding, no alias resolution.
	pub fn is(&self, owner: &str) -> bool {
		self.name == owner
	}

	/// Returns true if the identity carries exactly this authority.
	pub fn has_authority(&self, authority: &str) -> bool {
		self.authorities.iter().any(|a| a == authority)
	}

	/// Returns true if the identity carries the plain `user` authority.
	///
	/// Scans the authority list for the literal [`AUTHENTICATED_ROLE`].
	pub fn has_authenticated_role(&self) -> bool {
		self.has_authority(AUTHENTICATED_ROLE)
	}
}
