// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core type definitions shared by the resolver and the decider.
//!
//! - [`ResourceId`]: opaque identifier of any catalog object
//! - [`ResourceKind`]: the closed taxonomy of catalog kinds, with the parent
//!   relationship of leaf kinds
//! - [`AccessMode`]: the two-valued read/edit mode of a check

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{Csv, Image, MetadataFile};
use crate::resource::{CatalogObject, Nested};

// =============================================================================
// Identifiers
// =============================================================================

/// Opaque unique identifier of a catalog object.
///
/// Identifiers are minted by the backing store; this crate never interprets
/// them beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
	/// Create an ID from any string-like value.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ResourceId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ResourceId {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

impl From<String> for ResourceId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

// =============================================================================
// Resource Kinds
// =============================================================================

/// Kinds of catalog objects that are protected by the owner/visibility policy.
///
/// Root kinds carry their own owner and visibility flag. Leaf kinds delegate to
/// the root returned by [`ResourceKind::parent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
	ImagesCollection,
	Image,
	MetadataFile,
	CsvCollection,
	Csv,
	StitchingVector,
	Visualization,
	TensorflowModel,
	TensorboardLogs,
	Pyramid,
}

impl ResourceKind {
	/// Returns every kind, roots first.
	pub fn all() -> &'static [ResourceKind] {
		&[
			ResourceKind::ImagesCollection,
			ResourceKind::CsvCollection,
			ResourceKind::StitchingVector,
			ResourceKind::Visualization,
			ResourceKind::TensorflowModel,
			ResourceKind::TensorboardLogs,
			ResourceKind::Pyramid,
			ResourceKind::Image,
			ResourceKind::MetadataFile,
			ResourceKind::Csv,
		]
	}

	/// The kind whose object a leaf of this kind belongs to, or `None` for roots.
	///
	/// Read from the leaf type's [`Nested::Parent`].
	pub fn parent(self) -> Option<ResourceKind> {
		match self {
			ResourceKind::Image => Some(parent_kind::<Image>()),
			ResourceKind::MetadataFile => Some(parent_kind::<MetadataFile>()),
			ResourceKind::Csv => Some(parent_kind::<Csv>()),
			ResourceKind::ImagesCollection
			| ResourceKind::CsvCollection
			| ResourceKind::StitchingVector
			| ResourceKind::Visualization
			| ResourceKind::TensorflowModel
			| ResourceKind::TensorboardLogs
			| ResourceKind::Pyramid => None,
		}
	}

	/// Returns true if this kind carries its own owner and visibility flag.
	pub fn is_root(self) -> bool {
		self.parent().is_none()
	}

	/// Noun used in "You do not have access to this ..." messages.
	pub fn label(self) -> &'static str {
		match self {
			ResourceKind::ImagesCollection => "image collection",
			ResourceKind::Image => "image",
			ResourceKind::MetadataFile => "metadata file",
			ResourceKind::CsvCollection => "csv collection",
			ResourceKind::Csv => "csv",
			ResourceKind::StitchingVector => "stitching vector",
			ResourceKind::Visualization => "visualization",
			ResourceKind::TensorflowModel => "Tensorflow Model",
			ResourceKind::TensorboardLogs => "Tensorboard logs",
			ResourceKind::Pyramid => "Pyramid",
		}
	}

	/// Noun that opens "... with id <id> not found" messages.
	pub fn title(self) -> &'static str {
		match self {
			ResourceKind::ImagesCollection => "Image collection",
			ResourceKind::Image => "Image",
			ResourceKind::MetadataFile => "MetadataFile",
			ResourceKind::CsvCollection => "CSV collection",
			ResourceKind::Csv => "Csv",
			ResourceKind::StitchingVector => "Stitching vector",
			ResourceKind::Visualization => "Visualization",
			ResourceKind::TensorflowModel => "Tensorflow Model",
			ResourceKind::TensorboardLogs => "Tensorboard logs",
			ResourceKind::Pyramid => "Pyramid",
		}
	}

	fn slug(self) -> &'static str {
		match self {
			ResourceKind::ImagesCollection => "images_collection",
			ResourceKind::Image => "image",
			ResourceKind::MetadataFile => "metadata_file",
			ResourceKind::CsvCollection => "csv_collection",
			ResourceKind::Csv => "csv",
			ResourceKind::StitchingVector => "stitching_vector",
			ResourceKind::Visualization => "visualization",
			ResourceKind::TensorflowModel => "tensorflow_model",
			ResourceKind::TensorboardLogs => "tensorboard_logs",
			ResourceKind::Pyramid => "pyramid",
		}
	}
}

fn parent_kind<N: Nested>() -> ResourceKind {
	<N::Parent as CatalogObject>::KIND
}

impl fmt::Display for ResourceKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.slug())
	}
}

/// Error returned when parsing an unknown resource kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource kind: {0}")]
pub struct UnknownResourceKind(pub String);

impl FromStr for ResourceKind {
	type Err = UnknownResourceKind;

	/// Accepts the snake_case slug or its kebab-case spelling.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized = s.trim().replace('-', "_");
		ResourceKind::all()
			.iter()
			.copied()
			.find(|kind| kind.slug() == normalized)
			.ok_or_else(|| UnknownResourceKind(s.to_string()))
	}
}

// =============================================================================
// Access Mode
// =============================================================================

/// The access being requested on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
	Read,
	Edit,
}

impl AccessMode {
	/// Maps the `editMode` flag used by the REST layer onto a mode.
	pub fn from_edit_flag(edit: bool) -> Self {
		if edit {
			AccessMode::Edit
		} else {
			AccessMode::Read
		}
	}

	pub fn is_edit(self) -> bool {
		matches!(self, AccessMode::Edit)
	}
}

impl fmt::Display for AccessMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AccessMode::Read => write!(f, "read"),
			AccessMode::Edit => write!(f, "edit"),
		}
	}
}
