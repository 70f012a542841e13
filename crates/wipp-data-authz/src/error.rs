// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for authorization checks.
//!
//! Only two failures exist: the requested object is absent, or it exists and
//! the acting identity may not use it in the requested mode. The two are kept
//! distinct all the way to the transport boundary.

use http::StatusCode;
use thiserror::Error;

use crate::types::{ResourceId, ResourceKind};

/// Result type for authorization operations.
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Why a present resource was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Denial {
	/// Private resource and the identity is not its owner.
	NoAccess,
	/// Public resource, edit requested, and the identity is not its owner.
	NoEditRights,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthzError {
	#[error("{} with id {id} not found", .kind.title())]
	NotFound { kind: ResourceKind, id: ResourceId },

	#[error("{}", forbidden_message(.kind, .denial))]
	Forbidden {
		kind: ResourceKind,
		id: ResourceId,
		denial: Denial,
	},
}

impl AuthzError {
	pub fn not_found(kind: ResourceKind, id: &ResourceId) -> Self {
		AuthzError::NotFound {
			kind,
			id: id.clone(),
		}
	}

	pub fn forbidden(kind: ResourceKind, id: &ResourceId, denial: Denial) -> Self {
		AuthzError::Forbidden {
			kind,
			id: id.clone(),
			denial,
		}
	}

	pub fn is_not_found(&self) -> bool {
		matches!(self, AuthzError::NotFound { .. })
	}

	pub fn is_forbidden(&self) -> bool {
		matches!(self, AuthzError::Forbidden { .. })
	}

	/// The kind named by the error: the missing kind, or the root that refused.
	pub fn kind(&self) -> ResourceKind {
		match self {
			AuthzError::NotFound { kind, .. } | AuthzError::Forbidden { kind, .. } => *kind,
		}
	}

	pub fn id(&self) -> &ResourceId {
		match self {
			AuthzError::NotFound { id, .. } | AuthzError::Forbidden { id, .. } => id,
		}
	}

	/// The response status a transport boundary should answer with.
	pub fn status_code(&self) -> StatusCode {
		match self {
			AuthzError::NotFound { .. } => StatusCode::NOT_FOUND,
			AuthzError::Forbidden { .. } => StatusCode::FORBIDDEN,
		}
	}
}

fn forbidden_message(kind: &ResourceKind, denial: &Denial) -> String {
	match denial {
		Denial::NoAccess => format!("You do not have access to this {}", kind.label()),
		Denial::NoEditRights => format!("You do not have the right to edit this {}", kind.label()),
	}
}
