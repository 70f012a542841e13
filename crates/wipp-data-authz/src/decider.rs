// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Owner/visibility policy evaluation.
//!
//! [`evaluate`] is the whole policy. Rules apply in order:
//!
//! 1. **Ownerless**: a resource with no recorded owner is granted for any mode
//! 2. **Private**: only the owner may read or edit
//! 3. **Public**: anyone may read, only the owner may edit
//!
//! Evaluation is a pure function of the resolved root, the acting identity and
//! the mode. It performs no lookups; see [`crate::resolver`] for that half.

use tracing::instrument;

use crate::error::{AuthzError, Denial, Result};
use crate::identity::ActingIdentity;
use crate::resource::{ResourceAttrs, Securable};
use crate::types::AccessMode;

/// Outcome of evaluating the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
	Granted,
	Denied(Denial),
}

impl Decision {
	pub fn is_granted(self) -> bool {
		matches!(self, Decision::Granted)
	}
}

/// Evaluates the owner/visibility policy for one resolved root.
#[instrument(
    level = "debug",
    skip(resource, identity),
    fields(
        kind = %resource.kind,
        resource_id = %resource.id,
        identity = %identity.name,
        mode = %mode,
    )
)]
pub fn evaluate(resource: &ResourceAttrs, identity: &ActingIdentity, mode: AccessMode) -> Decision {
	// Ownerless resources are open to everyone in every mode.
	let Some(owner) = resource.owner.as_deref() else {
		return Decision::Granted;
	};
	let is_owner = identity.is(owner);

	if !resource.publicly_available && !is_owner {
		return Decision::Denied(Denial::NoAccess);
	}

	if resource.publicly_available && mode.is_edit() && !is_owner {
		return Decision::Denied(Denial::NoEditRights);
	}

	Decision::Granted
}

/// Evaluates the policy and turns a denial into [`AuthzError::Forbidden`].
pub fn authorize(resource: &ResourceAttrs, identity: &ActingIdentity, mode: AccessMode) -> Result<()> {
	match evaluate(resource, identity, mode) {
		Decision::Granted => Ok(()),
		Decision::Denied(denial) => {
			tracing::debug!(
				kind = %resource.kind,
				resource_id = %resource.id,
				identity = %identity.name,
				mode = %mode,
				denial = ?denial,
				"authorization denied"
			);
			Err(AuthzError::forbidden(resource.kind, &resource.id, denial))
		}
	}
}

/// Authorizes directly against a root object the caller already holds.
pub fn authorize_resource<T: Securable>(
	resource: &T,
	identity: &ActingIdentity,
	mode: AccessMode,
) -> Result<()> {
	authorize(&ResourceAttrs::of(resource), identity, mode)
}
