// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration as produced by a single source.

use serde::Deserialize;

use crate::sections::{CatalogConfigLayer, LoggingConfigLayer};

/// One source's view of the configuration. Absent sections defer to
/// lower-precedence sources.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DataConfigLayer {
	pub logging: Option<LoggingConfigLayer>,
	pub catalog: Option<CatalogConfigLayer>,
}

impl DataConfigLayer {
	/// Overlays `other` on top of `self`, field by field.
	pub fn merge(&mut self, other: Self) {
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
		merge_section(&mut self.catalog, other.catalog, CatalogConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	match (base.as_mut(), other) {
		(Some(existing), Some(other)) => merge(existing, other),
		(None, Some(other)) => *base = Some(other),
		(_, None) => {}
	}
}
