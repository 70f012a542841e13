// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resolution of a requested object to the root its access is decided on.
//!
//! ```text
//! resolve(kind, id) → lookup(kind, id) ─┬─ root  → ResourceAttrs
//!                                       └─ leaf  → resolve(parent kind, parent id)
//! ```
//!
//! Each hop is a single point lookup through the kind's [`Lookup`]
//! collaborator. A missing object fails with [`AuthzError::NotFound`] naming
//! the kind and id of the hop that missed, so a missing leaf and a leaf whose
//! parent is gone are reported differently. Resolution only reads.

use async_trait::async_trait;
use tracing::{instrument, trace};

use crate::catalog::{
	Csv, CsvCollection, Image, ImagesCollection, MetadataFile, Pyramid, StitchingVector,
	TensorboardLogs, TensorflowModel, Visualization,
};
use crate::error::{AuthzError, Result};
use crate::repository::{Lookup, Repositories};
use crate::resource::{CatalogObject, Nested, ResourceAttrs};
use crate::types::{ResourceId, ResourceKind};

/// An object that can be resolved to the root its access is decided on.
#[async_trait]
pub trait Resolvable: CatalogObject {
	async fn resolve_root(&self, resolver: &Resolver) -> Result<ResourceAttrs>;
}

/// A resolvable kind with a lookup collaborator in [`Repositories`].
pub trait Stored: Resolvable + Sized {
	fn lookup(repos: &Repositories) -> &dyn Lookup<Self>;
}

/// Looks objects up and follows leaf → parent references to their root.
#[derive(Debug, Clone)]
pub struct Resolver {
	repos: Repositories,
}

impl Resolver {
	pub fn new(repos: Repositories) -> Self {
		Self { repos }
	}

	/// Looks up one object of a statically known kind.
	pub async fn find<T: Stored>(&self, id: &ResourceId) -> Result<T> {
		match T::lookup(&self.repos).find_by_id(id).await {
			Some(object) => Ok(object),
			None => {
				trace!(kind = %T::KIND, resource_id = %id, "lookup missed");
				Err(AuthzError::not_found(T::KIND, id))
			}
		}
	}

	/// Looks up an object and resolves it to its root.
	pub async fn resolve<T: Stored>(&self, id: &ResourceId) -> Result<ResourceAttrs> {
		let object = self.find::<T>(id).await?;
		object.resolve_root(self).await
	}

	/// Resolves the parent of a leaf the caller already holds.
	pub async fn resolve_parent<N: Nested>(&self, leaf: &N) -> Result<ResourceAttrs> {
		let parent_kind = <N::Parent as CatalogObject>::KIND;
		trace!(
			kind = %N::KIND,
			resource_id = %leaf.id(),
			parent_kind = %parent_kind,
			parent_id = %leaf.parent_id(),
			"following parent reference"
		);
		let parent = self.find::<N::Parent>(leaf.parent_id()).await?;
		parent.resolve_root(self).await
	}

	/// Resolves an object named by a runtime kind.
	#[instrument(level = "debug", skip(self, id), fields(kind = %kind, resource_id = %id))]
	pub async fn resolve_kind(&self, kind: ResourceKind, id: &ResourceId) -> Result<ResourceAttrs> {
		match kind {
			ResourceKind::ImagesCollection => self.resolve::<ImagesCollection>(id).await,
			ResourceKind::Image => self.resolve::<Image>(id).await,
			ResourceKind::MetadataFile => self.resolve::<MetadataFile>(id).await,
			ResourceKind::CsvCollection => self.resolve::<CsvCollection>(id).await,
			ResourceKind::Csv => self.resolve::<Csv>(id).await,
			ResourceKind::StitchingVector => self.resolve::<StitchingVector>(id).await,
			ResourceKind::Visualization => self.resolve::<Visualization>(id).await,
			ResourceKind::TensorflowModel => self.resolve::<TensorflowModel>(id).await,
			ResourceKind::TensorboardLogs => self.resolve::<TensorboardLogs>(id).await,
			ResourceKind::Pyramid => self.resolve::<Pyramid>(id).await,
		}
	}
}
