// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Hooks run by the data service before catalog objects are persisted.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::catalog::Visualization;

/// Stamps a visualization's creation date before it is first stored.
pub fn handle_before_create(visualization: &mut Visualization) {
	handle_before_create_at(visualization, Utc::now());
}

/// Like [`handle_before_create`], with an explicit clock reading.
///
/// Any creation date supplied by the client is overwritten.
pub fn handle_before_create_at(visualization: &mut Visualization, now: DateTime<Utc>) {
	debug!(resource_id = %visualization.id, creation_date = %now, "stamping visualization");
	visualization.creation_date = Some(now);
}
