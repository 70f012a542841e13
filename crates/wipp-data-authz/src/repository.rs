// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lookup collaborators for catalog objects.
//!
//! The backing store is owned by the surrounding service; this crate only needs
//! a single-key point lookup per kind ([`Lookup`]). [`Repositories`] bundles one
//! lookup per kind for the resolver, and [`MemoryCatalog`] provides in-memory
//! lookups for tests, tooling and embedders without a store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::catalog::{
	Csv, CsvCollection, Image, ImagesCollection, MetadataFile, Pyramid, StitchingVector,
	TensorboardLogs, TensorflowModel, Visualization,
};
use crate::resource::CatalogObject;
use crate::types::ResourceId;

/// Point lookup of one kind of catalog object.
///
/// Implementations report an absent object as `None`. Failures of the
/// backing store are the implementation's concern and surface as `None`.
#[async_trait]
pub trait Lookup<T>: Send + Sync {
	async fn find_by_id(&self, id: &ResourceId) -> Option<T>;
}

/// One lookup collaborator per catalog kind.
#[derive(Clone)]
pub struct Repositories {
	pub images_collections: Arc<dyn Lookup<ImagesCollection>>,
	pub images: Arc<dyn Lookup<Image>>,
	pub metadata_files: Arc<dyn Lookup<MetadataFile>>,
	pub csv_collections: Arc<dyn Lookup<CsvCollection>>,
	pub csvs: Arc<dyn Lookup<Csv>>,
	pub stitching_vectors: Arc<dyn Lookup<StitchingVector>>,
	pub visualizations: Arc<dyn Lookup<Visualization>>,
	pub tensorflow_models: Arc<dyn Lookup<TensorflowModel>>,
	pub tensorboard_logs: Arc<dyn Lookup<TensorboardLogs>>,
	pub pyramids: Arc<dyn Lookup<Pyramid>>,
}

impl Repositories {
	/// Lookups over a fresh, empty [`MemoryCatalog`].
	pub fn in_memory() -> Self {
		MemoryCatalog::new().repositories()
	}
}

impl std::fmt::Debug for Repositories {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Repositories").finish_non_exhaustive()
	}
}

/// In-memory store of one kind of catalog object.
///
/// Cloning is cheap and clones share the same underlying map.
#[derive(Debug)]
pub struct MemoryRepository<T> {
	objects: Arc<RwLock<HashMap<ResourceId, T>>>,
}

impl<T> Clone for MemoryRepository<T> {
	fn clone(&self) -> Self {
		Self {
			objects: Arc::clone(&self.objects),
		}
	}
}

impl<T> Default for MemoryRepository<T> {
	fn default() -> Self {
		Self {
			objects: Arc::new(RwLock::new(HashMap::new())),
		}
	}
}

impl<T: CatalogObject + Clone> MemoryRepository<T> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores an object under its own id, returning the object it replaced.
	pub async fn insert(&self, object: T) -> Option<T> {
		let id = object.id().clone();
		self.objects.write().await.insert(id, object)
	}

	/// Stores every object of an iterator.
	pub async fn extend<I: IntoIterator<Item = T>>(&self, objects: I) {
		let mut map = self.objects.write().await;
		for object in objects {
			map.insert(object.id().clone(), object);
		}
	}

	pub async fn remove(&self, id: &ResourceId) -> Option<T> {
		self.objects.write().await.remove(id)
	}

	pub async fn len(&self) -> usize {
		self.objects.read().await.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.objects.read().await.is_empty()
	}
}

#[async_trait]
impl<T: CatalogObject + Clone> Lookup<T> for MemoryRepository<T> {
	#[instrument(level = "trace", skip(self, id), fields(kind = %T::KIND, resource_id = %id))]
	async fn find_by_id(&self, id: &ResourceId) -> Option<T> {
		self.objects.read().await.get(id).cloned()
	}
}

/// In-memory repositories for every catalog kind.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
	pub images_collections: MemoryRepository<ImagesCollection>,
	pub images: MemoryRepository<Image>,
	pub metadata_files: MemoryRepository<MetadataFile>,
	pub csv_collections: MemoryRepository<CsvCollection>,
	pub csvs: MemoryRepository<Csv>,
	pub stitching_vectors: MemoryRepository<StitchingVector>,
	pub visualizations: MemoryRepository<Visualization>,
	pub tensorflow_models: MemoryRepository<TensorflowModel>,
	pub tensorboard_logs: MemoryRepository<TensorboardLogs>,
	pub pyramids: MemoryRepository<Pyramid>,
}

impl MemoryCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Lookup handles sharing this catalog's storage.
	pub fn repositories(&self) -> Repositories {
		Repositories {
			images_collections: Arc::new(self.images_collections.clone()),
			images: Arc::new(self.images.clone()),
			metadata_files: Arc::new(self.metadata_files.clone()),
			csv_collections: Arc::new(self.csv_collections.clone()),
			csvs: Arc::new(self.csvs.clone()),
			stitching_vectors: Arc::new(self.stitching_vectors.clone()),
			visualizations: Arc::new(self.visualizations.clone()),
			tensorflow_models: Arc::new(self.tensorflow_models.clone()),
			tensorboard_logs: Arc::new(self.tensorboard_logs.clone()),
			pyramids: Arc::new(self.pyramids.clone()),
		}
	}

	/// Total number of stored objects across all kinds.
	pub async fn object_count(&self) -> usize {
		self.images_collections.len().await
			+ self.images.len().await
			+ self.metadata_files.len().await
			+ self.csv_collections.len().await
			+ self.csvs.len().await
			+ self.stitching_vectors.len().await
			+ self.visualizations.len().await
			+ self.tensorflow_models.len().await
			+ self.tensorboard_logs.len().await
			+ self.pyramids.len().await
	}
}
