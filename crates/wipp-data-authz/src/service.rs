// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Entry points used by the data service's controllers.
//!
//! [`SecurityService`] composes the [`Resolver`] with the decider:
//!
//! - [`SecurityService::authorize_by_id`] / [`SecurityService::authorize_id`]
//!   for callers holding only an identifier
//! - [`SecurityService::authorize`] for callers already holding the object
//!
//! A successful return is the grant. [`AuthzError::NotFound`] and
//! [`AuthzError::Forbidden`] are returned unchanged for the caller to map onto
//! its transport.

use tracing::instrument;

use crate::decider;
use crate::error::Result;
use crate::identity::ActingIdentity;
use crate::repository::Repositories;
use crate::resolver::{Resolvable, Resolver, Stored};
use crate::types::{AccessMode, ResourceId, ResourceKind};

#[cfg(doc)]
use crate::error::AuthzError;

/// Authorization checks over the catalog's lookup collaborators.
#[derive(Debug, Clone)]
pub struct SecurityService {
	resolver: Resolver,
}

impl SecurityService {
	pub fn new(repos: Repositories) -> Self {
		Self {
			resolver: Resolver::new(repos),
		}
	}

	/// Authorizes access to the object of `kind` named by `id`.
	#[instrument(
        level = "debug",
        skip(self, id, identity),
        fields(kind = %kind, resource_id = %id, identity = %identity.name, mode = %mode)
    )]
	pub async fn authorize_by_id(
		&self,
		kind: ResourceKind,
		id: &ResourceId,
		identity: &ActingIdentity,
		mode: AccessMode,
	) -> Result<()> {
		let root = self.resolver.resolve_kind(kind, id).await?;
		decider::authorize(&root, identity, mode)
	}

	/// Authorizes access to the object of a statically known kind named by `id`.
	pub async fn authorize_id<T: Stored>(
		&self,
		id: &ResourceId,
		identity: &ActingIdentity,
		mode: AccessMode,
	) -> Result<()> {
		let root = self.resolver.resolve::<T>(id).await?;
		decider::authorize(&root, identity, mode)
	}

	/// Authorizes access to an object the caller already loaded.
	///
	/// Roots are decided without any lookup. Leaves still resolve their parent.
	pub async fn authorize<T: Resolvable>(
		&self,
		object: &T,
		identity: &ActingIdentity,
		mode: AccessMode,
	) -> Result<()> {
		let root = object.resolve_root(&self.resolver).await?;
		decider::authorize(&root, identity, mode)
	}

	/// Returns true if the identity carries the plain `user` authority.
	pub fn has_authenticated_role(identity: &ActingIdentity) -> bool {
		identity.has_authenticated_role()
	}
}
