// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod catalog;
mod logging;

pub use catalog::{CatalogConfig, CatalogConfigLayer};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
