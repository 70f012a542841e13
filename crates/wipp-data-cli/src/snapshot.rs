// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! JSON catalog snapshots used to seed the in-memory lookups.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;
use wipp_data_authz::{
	Csv, CsvCollection, Image, ImagesCollection, MemoryCatalog, MetadataFile, Pyramid,
	StitchingVector, TensorboardLogs, TensorflowModel, Visualization,
};

/// Every catalog object of a snapshot file, grouped by kind.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSnapshot {
	pub images_collections: Vec<ImagesCollection>,
	pub images: Vec<Image>,
	pub metadata_files: Vec<MetadataFile>,
	pub csv_collections: Vec<CsvCollection>,
	pub csvs: Vec<Csv>,
	pub stitching_vectors: Vec<StitchingVector>,
	pub visualizations: Vec<Visualization>,
	pub tensorflow_models: Vec<TensorflowModel>,
	pub tensorboard_logs: Vec<TensorboardLogs>,
	pub pyramids: Vec<Pyramid>,
}

impl CatalogSnapshot {
	pub fn from_path(path: &Path) -> anyhow::Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read catalog snapshot {}", path.display()))?;
		serde_json::from_str(&content)
			.with_context(|| format!("failed to parse catalog snapshot {}", path.display()))
	}

	/// Loads the snapshot into a fresh in-memory catalog.
	pub async fn into_catalog(self) -> MemoryCatalog {
		let catalog = MemoryCatalog::new();
		catalog.images_collections.extend(self.images_collections).await;
		catalog.images.extend(self.images).await;
		catalog.metadata_files.extend(self.metadata_files).await;
		catalog.csv_collections.extend(self.csv_collections).await;
		catalog.csvs.extend(self.csvs).await;
		catalog.stitching_vectors.extend(self.stitching_vectors).await;
		catalog.visualizations.extend(self.visualizations).await;
		catalog.tensorflow_models.extend(self.tensorflow_models).await;
		catalog.tensorboard_logs.extend(self.tensorboard_logs).await;
		catalog.pyramids.extend(self.pyramids).await;
		debug!(objects = catalog.object_count().await, "catalog snapshot loaded");
		catalog
	}
}
