// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Concrete catalog kinds.
//!
//! Root kinds carry `owner` and `publiclyAvailable`. Leaf kinds carry the id
//! of the collection they belong to and defer to it. Field names serialize in
//! camelCase to match the documents stored by the data service.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::repository::{Lookup, Repositories};
use crate::resolver::{Resolvable, Resolver, Stored};
use crate::resource::{CatalogObject, Nested, ResourceAttrs, Securable};
use crate::types::{ResourceId, ResourceKind};

// =============================================================================
// Root Kinds
// =============================================================================

macro_rules! define_root_resource {
	($name:ident, $kind:expr, $repo:ident, $doc:expr) => {
		#[doc = $doc]
		#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
		#[serde(rename_all = "camelCase")]
		pub struct $name {
			pub id: ResourceId,
			pub name: String,
			#[serde(default)]
			pub owner: Option<String>,
			#[serde(default)]
			pub publicly_available: bool,
			#[serde(default)]
			pub creation_date: Option<DateTime<Utc>>,
		}

		impl $name {
			/// Creates an ownerless, private object.
			pub fn new(id: impl Into<ResourceId>, name: impl Into<String>) -> Self {
				Self {
					id: id.into(),
					name: name.into(),
					owner: None,
					publicly_available: false,
					creation_date: None,
				}
			}

			/// Builder: set owner.
			pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
				self.owner = Some(owner.into());
				self
			}

			/// Builder: set publicly_available.
			pub fn with_public(mut self, public: bool) -> Self {
				self.publicly_available = public;
				self
			}
		}

		impl CatalogObject for $name {
			const KIND: ResourceKind = $kind;

			fn id(&self) -> &ResourceId {
				&self.id
			}
		}

		impl Securable for $name {
			fn owner(&self) -> Option<&str> {
				self.owner.as_deref()
			}

			fn is_publicly_available(&self) -> bool {
				self.publicly_available
			}
		}

		#[async_trait]
		impl Resolvable for $name {
			async fn resolve_root(&self, _resolver: &Resolver) -> Result<ResourceAttrs> {
				Ok(ResourceAttrs::of(self))
			}
		}

		impl Stored for $name {
			fn lookup(repos: &Repositories) -> &dyn Lookup<Self> {
				repos.$repo.as_ref()
			}
		}
	};
}

define_root_resource!(
	ImagesCollection,
	ResourceKind::ImagesCollection,
	images_collections,
	"A collection of images and their metadata files."
);
define_root_resource!(
	CsvCollection,
	ResourceKind::CsvCollection,
	csv_collections,
	"A collection of tabular (CSV) files."
);
define_root_resource!(
	StitchingVector,
	ResourceKind::StitchingVector,
	stitching_vectors,
	"Tile positions used to assemble a mosaic."
);
define_root_resource!(
	Visualization,
	ResourceKind::Visualization,
	visualizations,
	"A visualization built over one or more pyramids."
);
define_root_resource!(
	TensorflowModel,
	ResourceKind::TensorflowModel,
	tensorflow_models,
	"A trained Tensorflow model."
);
define_root_resource!(
	TensorboardLogs,
	ResourceKind::TensorboardLogs,
	tensorboard_logs,
	"Tensorboard training logs of a model."
);
define_root_resource!(
	Pyramid,
	ResourceKind::Pyramid,
	pyramids,
	"A multi-resolution image pyramid."
);

// =============================================================================
// Leaf Kinds
// =============================================================================

macro_rules! define_nested_resource {
	($name:ident, $kind:expr, $parent:ty, $parent_field:ident, $repo:ident, $doc:expr) => {
		#[doc = $doc]
		#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
		#[serde(rename_all = "camelCase")]
		pub struct $name {
			pub id: ResourceId,
			pub file_name: String,
			pub $parent_field: ResourceId,
		}

		impl $name {
			pub fn new(
				id: impl Into<ResourceId>,
				file_name: impl Into<String>,
				$parent_field: impl Into<ResourceId>,
			) -> Self {
				Self {
					id: id.into(),
					file_name: file_name.into(),
					$parent_field: $parent_field.into(),
				}
			}
		}

		impl CatalogObject for $name {
			const KIND: ResourceKind = $kind;

			fn id(&self) -> &ResourceId {
				&self.id
			}
		}

		impl Nested for $name {
			type Parent = $parent;

			fn parent_id(&self) -> &ResourceId {
				&self.$parent_field
			}
		}

		#[async_trait]
		impl Resolvable for $name {
			async fn resolve_root(&self, resolver: &Resolver) -> Result<ResourceAttrs> {
				resolver.resolve_parent(self).await
			}
		}

		impl Stored for $name {
			fn lookup(repos: &Repositories) -> &dyn Lookup<Self> {
				repos.$repo.as_ref()
			}
		}
	};
}

define_nested_resource!(
	Image,
	ResourceKind::Image,
	ImagesCollection,
	images_collection,
	images,
	"An image file belonging to an images collection."
);
define_nested_resource!(
	MetadataFile,
	ResourceKind::MetadataFile,
	ImagesCollection,
	images_collection,
	metadata_files,
	"A metadata file belonging to an images collection."
);
define_nested_resource!(
	Csv,
	ResourceKind::Csv,
	CsvCollection,
	csv_collection,
	csvs,
	"A CSV file belonging to a CSV collection."
);
