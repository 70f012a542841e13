// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Capability traits implemented by catalog objects.
//!
//! - [`CatalogObject`]: anything stored under a [`ResourceKind`] with an id
//! - [`Securable`]: a root object carrying an owner and a visibility flag
//! - [`Nested`]: a leaf object that defers to the object named by its parent id
//! - [`ResourceAttrs`]: the owner/visibility facts the decider evaluates

use crate::resolver::Stored;
use crate::types::{ResourceId, ResourceKind};

/// An object stored in the catalog under a fixed kind.
pub trait CatalogObject: Send + Sync + 'static {
	const KIND: ResourceKind;

	fn id(&self) -> &ResourceId;
}

/// A root object that visibility is decided on.
pub trait Securable: CatalogObject {
	/// The owning identity, or `None` for ownerless objects.
	fn owner(&self) -> Option<&str>;

	fn is_publicly_available(&self) -> bool;
}

/// A leaf object whose access follows its parent.
pub trait Nested: CatalogObject {
	/// The kind of object the parent id refers to. Usually a root, but any
	/// stored kind is accepted, leaves included.
	type Parent: Stored;

	fn parent_id(&self) -> &ResourceId;
}

/// Attributes of a resolved root, as seen by the decider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceAttrs {
	pub kind: ResourceKind,
	pub id: ResourceId,
	pub owner: Option<String>,
	pub publicly_available: bool,
}

impl ResourceAttrs {
	/// Creates attributes for an ownerless, private resource.
	pub fn new(kind: ResourceKind, id: impl Into<ResourceId>) -> Self {
		Self {
			kind,
			id: id.into(),
			owner: None,
			publicly_available: false,
		}
	}

	/// Captures the attributes of a root object.
	pub fn of<T: Securable>(resource: &T) -> Self {
		Self {
			kind: T::KIND,
			id: resource.id().clone(),
			owner: resource.owner().map(str::to_string),
			publicly_available: resource.is_publicly_available(),
		}
	}

	/// Builder: set owner.
	pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
		self.owner = Some(owner.into());
		self
	}

	/// Builder: set publicly_available.
	pub fn with_public(mut self, public: bool) -> Self {
		self.publicly_available = public;
		self
	}

	pub fn is_owned_by(&self, identity: &str) -> bool {
		self.owner.as_deref() == Some(identity)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Notebook {
		id: ResourceId,
		owner: Option<String>,
		public: bool,
	}

	impl CatalogObject for Notebook {
		const KIND: ResourceKind = ResourceKind::Visualization;

		fn id(&self) -> &ResourceId {
			&self.id
		}
	}

	impl Securable for Notebook {
		fn owner(&self) -> Option<&str> {
			self.owner.as_deref()
		}

		fn is_publicly_available(&self) -> bool {
			self.public
		}
	}

	#[test]
	fn attrs_capture_securable_fields() {
		let notebook = Notebook {
			id: ResourceId::new("n1"),
			owner: Some("alice".to_string()),
			public: true,
		};
		let attrs = ResourceAttrs::of(&notebook);
		assert_eq!(attrs.kind, ResourceKind::Visualization);
		assert_eq!(attrs.id.as_str(), "n1");
		assert_eq!(attrs.owner.as_deref(), Some("alice"));
		assert!(attrs.publicly_available);
	}

	#[test]
	fn new_attrs_are_ownerless_and_private() {
		let attrs = ResourceAttrs::new(ResourceKind::Pyramid, "p1");
		assert_eq!(attrs.owner, None);
		assert!(!attrs.publicly_available);
	}

	#[test]
	fn ownership_is_exact() {
		let attrs = ResourceAttrs::new(ResourceKind::Pyramid, "p1").with_owner("alice");
		assert!(attrs.is_owned_by("alice"));
		assert!(!attrs.is_owned_by("ALICE"));
		assert!(!ResourceAttrs::new(ResourceKind::Pyramid, "p1").is_owned_by("alice"));
	}
}
