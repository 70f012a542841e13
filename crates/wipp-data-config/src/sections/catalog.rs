// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Catalog snapshot configuration section.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfigLayer {
	pub path: Option<PathBuf>,
}

impl CatalogConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.path.is_some() {
			self.path = other.path;
		}
	}

	pub fn finalize(self) -> CatalogConfig {
		CatalogConfig { path: self.path }
	}
}

/// Location of the JSON snapshot that seeds the in-memory lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
	pub path: Option<PathBuf>,
}
