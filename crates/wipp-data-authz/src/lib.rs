// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Access-control core for the WIPP data catalog.
//!
//! Every catalog object is either a root (images collections, CSV collections,
//! stitching vectors, visualizations, Tensorflow models, Tensorboard logs,
//! pyramids) carrying an owner and a public flag, or a leaf (images, metadata
//! files, CSV files) that inherits the policy of the collection it belongs to.
//!
//! # Overview
//!
//! - [`resolver`]: looks an object up and follows leaf → parent references
//! - [`decider`]: the owner/visibility policy over a resolved root
//! - [`service`]: entry points composing the two for request handlers
//! - [`lifecycle`]: hooks run before objects are first stored
//!
//! # Example
//!
//! ```
//! use wipp_data_authz::{
//!     AccessMode, ActingIdentity, ImagesCollection, Image, MemoryCatalog, ResourceId,
//!     ResourceKind, SecurityService,
//! };
//!
//! # tokio_test::block_on(async {
//! let catalog = MemoryCatalog::new();
//! catalog
//!     .images_collections
//!     .insert(ImagesCollection::new("c1", "plate").with_owner("alice"))
//!     .await;
//! catalog.images.insert(Image::new("i1", "a.ome.tif", "c1")).await;
//!
//! let service = SecurityService::new(catalog.repositories());
//! let bob = ActingIdentity::new("bob").with_authorities(["user"]);
//!
//! let err = service
//!     .authorize_by_id(ResourceKind::Image, &ResourceId::new("i1"), &bob, AccessMode::Read)
//!     .await
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "You do not have access to this image collection");
//! # });
//! ```

pub mod catalog;
pub mod decider;
pub mod error;
pub mod identity;
pub mod lifecycle;
pub mod repository;
pub mod resolver;
pub mod resource;
pub mod service;
pub mod types;

pub use catalog::{
	Csv, CsvCollection, Image, ImagesCollection, MetadataFile, Pyramid, StitchingVector,
	TensorboardLogs, TensorflowModel, Visualization,
};
pub use decider::{authorize, authorize_resource, evaluate, Decision};
pub use error::{AuthzError, Denial, Result};
pub use identity::{ActingIdentity, AUTHENTICATED_ROLE};
pub use lifecycle::{handle_before_create, handle_before_create_at};
pub use repository::{Lookup, MemoryCatalog, MemoryRepository, Repositories};
pub use resolver::{Resolvable, Resolver, Stored};
pub use resource::{CatalogObject, Nested, ResourceAttrs, Securable};
pub use service::SecurityService;
pub use types::{AccessMode, ResourceId, ResourceKind, UnknownResourceKind};
