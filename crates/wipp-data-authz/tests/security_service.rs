// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization tests for the catalog entry points.
//!
//! Tests verify access control across every catalog kind:
//! - Owners have full access to their resources, private or public
//! - Private resources are refused to everyone else
//! - Public resources are readable by anyone and editable only by the owner
//! - Leaves (images, metadata files, CSV files) follow their collection
//! - Missing objects return NotFound, never Forbidden

use http::StatusCode;
use wipp_data_authz::{
	AccessMode, ActingIdentity, AuthzError, Csv, CsvCollection, Denial, Image, ImagesCollection,
	Lookup, MemoryCatalog, MetadataFile, Pyramid, ResourceId, ResourceKind, SecurityService,
	StitchingVector, TensorboardLogs, TensorflowModel, Visualization,
};

// ============================================================================
// Fixtures
// ============================================================================

struct TestApp {
	catalog: MemoryCatalog,
	service: SecurityService,
}

impl TestApp {
	async fn new() -> Self {
		let catalog = MemoryCatalog::new();

		catalog
			.images_collections
			.extend([
				ImagesCollection::new("ic-private", "plate A").with_owner("alice"),
				ImagesCollection::new("ic-public", "plate B")
					.with_owner("alice")
					.with_public(true),
				ImagesCollection::new("ic-ownerless", "legacy plate"),
			])
			.await;
		catalog
			.images
			.extend([
				Image::new("img-private", "a.ome.tif", "ic-private"),
				Image::new("img-public", "b.ome.tif", "ic-public"),
				Image::new("img-orphan", "c.ome.tif", "ic-deleted"),
			])
			.await;
		catalog
			.metadata_files
			.insert(MetadataFile::new("meta-private", "stage.csv", "ic-private"))
			.await;
		catalog
			.csv_collections
			.extend([
				CsvCollection::new("cc-private", "features").with_owner("alice"),
				CsvCollection::new("cc-public", "shared features")
					.with_owner("alice")
					.with_public(true),
			])
			.await;
		catalog
			.csvs
			.extend([
				Csv::new("csv-private", "rows.csv", "cc-private"),
				Csv::new("csv-public", "rows.csv", "cc-public"),
			])
			.await;
		catalog
			.stitching_vectors
			.insert(StitchingVector::new("sv-1", "vector").with_owner("alice"))
			.await;
		catalog
			.visualizations
			.insert(
				Visualization::new("viz-1", "overlay")
					.with_owner("alice")
					.with_public(true),
			)
			.await;
		catalog
			.tensorflow_models
			.insert(TensorflowModel::new("tf-1", "unet").with_owner("alice"))
			.await;
		catalog
			.tensorboard_logs
			.insert(
				TensorboardLogs::new("tb-1", "unet logs")
					.with_owner("alice")
					.with_public(true),
			)
			.await;
		catalog
			.pyramids
			.insert(Pyramid::new("pyr-1", "tiles").with_owner("alice"))
			.await;

		let service = SecurityService::new(catalog.repositories());
		Self { catalog, service }
	}
}

fn alice() -> ActingIdentity {
	ActingIdentity::new("alice").with_authorities(["user"])
}

fn bob() -> ActingIdentity {
	ActingIdentity::new("bob").with_authorities(["user"])
}

struct AuthzCase {
	name: &'static str,
	kind: ResourceKind,
	id: &'static str,
	identity: ActingIdentity,
	mode: AccessMode,
	expected_status: Option<StatusCode>,
}

async fn run_authz_cases(app: &TestApp, cases: &[AuthzCase]) {
	for case in cases {
		let result = app
			.service
			.authorize_by_id(case.kind, &ResourceId::new(case.id), &case.identity, case.mode)
			.await;
		let status = result.err().map(|e| e.status_code());
		assert_eq!(
			status, case.expected_status,
			"case {} returned {:?}, expected {:?}",
			case.name, status, case.expected_status
		);
	}
}

// ============================================================================
// Root kinds
// ============================================================================

#[tokio::test]
async fn owner_has_full_access_to_every_root() {
	let app = TestApp::new().await;
	let mut cases = Vec::new();
	for (kind, id) in [
		(ResourceKind::ImagesCollection, "ic-private"),
		(ResourceKind::ImagesCollection, "ic-public"),
		(ResourceKind::CsvCollection, "cc-private"),
		(ResourceKind::StitchingVector, "sv-1"),
		(ResourceKind::Visualization, "viz-1"),
		(ResourceKind::TensorflowModel, "tf-1"),
		(ResourceKind::TensorboardLogs, "tb-1"),
		(ResourceKind::Pyramid, "pyr-1"),
	] {
		for mode in [AccessMode::Read, AccessMode::Edit] {
			cases.push(AuthzCase {
				name: "owner_has_full_access",
				kind,
				id,
				identity: alice(),
				mode,
				expected_status: None,
			});
		}
	}
	run_authz_cases(&app, &cases).await;
}

#[tokio::test]
async fn private_roots_are_forbidden_to_others() {
	let app = TestApp::new().await;
	let cases = [
		AuthzCase {
			name: "other_cannot_read_private_stitching_vector",
			kind: ResourceKind::StitchingVector,
			id: "sv-1",
			identity: bob(),
			mode: AccessMode::Read,
			expected_status: Some(StatusCode::FORBIDDEN),
		},
		AuthzCase {
			name: "other_cannot_edit_private_model",
			kind: ResourceKind::TensorflowModel,
			id: "tf-1",
			identity: bob(),
			mode: AccessMode::Edit,
			expected_status: Some(StatusCode::FORBIDDEN),
		},
		AuthzCase {
			name: "other_cannot_read_private_pyramid",
			kind: ResourceKind::Pyramid,
			id: "pyr-1",
			identity: bob(),
			mode: AccessMode::Read,
			expected_status: Some(StatusCode::FORBIDDEN),
		},
	];
	run_authz_cases(&app, &cases).await;
}

#[tokio::test]
async fn public_roots_are_read_only_to_others() {
	let app = TestApp::new().await;
	let cases = [
		AuthzCase {
			name: "other_can_read_public_visualization",
			kind: ResourceKind::Visualization,
			id: "viz-1",
			identity: bob(),
			mode: AccessMode::Read,
			expected_status: None,
		},
		AuthzCase {
			name: "other_cannot_edit_public_visualization",
			kind: ResourceKind::Visualization,
			id: "viz-1",
			identity: bob(),
			mode: AccessMode::Edit,
			expected_status: Some(StatusCode::FORBIDDEN),
		},
		AuthzCase {
			name: "other_can_read_public_logs",
			kind: ResourceKind::TensorboardLogs,
			id: "tb-1",
			identity: bob(),
			mode: AccessMode::Read,
			expected_status: None,
		},
	];
	run_authz_cases(&app, &cases).await;
}

#[tokio::test]
async fn ownerless_root_is_open_to_everyone() {
	let app = TestApp::new().await;
	let cases = [
		AuthzCase {
			name: "anyone_can_read_ownerless",
			kind: ResourceKind::ImagesCollection,
			id: "ic-ownerless",
			identity: bob(),
			mode: AccessMode::Read,
			expected_status: None,
		},
		AuthzCase {
			name: "anyone_can_edit_ownerless",
			kind: ResourceKind::ImagesCollection,
			id: "ic-ownerless",
			identity: ActingIdentity::new("mallory"),
			mode: AccessMode::Edit,
			expected_status: None,
		},
	];
	run_authz_cases(&app, &cases).await;
}

// ============================================================================
// Leaf kinds
// ============================================================================

#[tokio::test]
async fn leaves_follow_their_collection() {
	let app = TestApp::new().await;
	let cases = [
		AuthzCase {
			name: "other_cannot_read_image_in_private_collection",
			kind: ResourceKind::Image,
			id: "img-private",
			identity: bob(),
			mode: AccessMode::Read,
			expected_status: Some(StatusCode::FORBIDDEN),
		},
		AuthzCase {
			name: "other_can_read_image_in_public_collection",
			kind: ResourceKind::Image,
			id: "img-public",
			identity: bob(),
			mode: AccessMode::Read,
			expected_status: None,
		},
		AuthzCase {
			name: "other_cannot_edit_image_in_public_collection",
			kind: ResourceKind::Image,
			id: "img-public",
			identity: bob(),
			mode: AccessMode::Edit,
			expected_status: Some(StatusCode::FORBIDDEN),
		},
		AuthzCase {
			name: "owner_can_edit_metadata_file",
			kind: ResourceKind::MetadataFile,
			id: "meta-private",
			identity: alice(),
			mode: AccessMode::Edit,
			expected_status: None,
		},
		AuthzCase {
			name: "other_cannot_read_private_csv",
			kind: ResourceKind::Csv,
			id: "csv-private",
			identity: bob(),
			mode: AccessMode::Read,
			expected_status: Some(StatusCode::FORBIDDEN),
		},
		AuthzCase {
			name: "other_can_read_public_csv",
			kind: ResourceKind::Csv,
			id: "csv-public",
			identity: bob(),
			mode: AccessMode::Read,
			expected_status: None,
		},
	];
	run_authz_cases(&app, &cases).await;
}

#[tokio::test]
async fn leaf_denial_is_reported_against_the_collection() {
	let app = TestApp::new().await;
	let err = app
		.service
		.authorize_by_id(
			ResourceKind::Image,
			&ResourceId::new("img-public"),
			&bob(),
			AccessMode::Edit,
		)
		.await
		.unwrap_err();
	assert_eq!(
		err,
		AuthzError::forbidden(
			ResourceKind::ImagesCollection,
			&ResourceId::new("ic-public"),
			Denial::NoEditRights
		)
	);
	assert_eq!(err.to_string(), "You do not have the right to edit this image collection");
}

// ============================================================================
// Missing objects
// ============================================================================

#[tokio::test]
async fn missing_objects_are_not_found() {
	let app = TestApp::new().await;
	let cases = [
		AuthzCase {
			name: "missing_root",
			kind: ResourceKind::Pyramid,
			id: "pyr-404",
			identity: alice(),
			mode: AccessMode::Read,
			expected_status: Some(StatusCode::NOT_FOUND),
		},
		AuthzCase {
			name: "missing_leaf",
			kind: ResourceKind::Csv,
			id: "csv-404",
			identity: alice(),
			mode: AccessMode::Read,
			expected_status: Some(StatusCode::NOT_FOUND),
		},
		AuthzCase {
			name: "leaf_of_deleted_collection",
			kind: ResourceKind::Image,
			id: "img-orphan",
			identity: alice(),
			mode: AccessMode::Read,
			expected_status: Some(StatusCode::NOT_FOUND),
		},
	];
	run_authz_cases(&app, &cases).await;
}

#[tokio::test]
async fn not_found_names_the_hop_that_missed() {
	let app = TestApp::new().await;

	let missing_leaf = app
		.service
		.authorize_by_id(ResourceKind::Image, &ResourceId::new("img-404"), &alice(), AccessMode::Read)
		.await
		.unwrap_err();
	assert_eq!(missing_leaf.to_string(), "Image with id img-404 not found");

	let missing_parent = app
		.service
		.authorize_by_id(
			ResourceKind::Image,
			&ResourceId::new("img-orphan"),
			&alice(),
			AccessMode::Read,
		)
		.await
		.unwrap_err();
	assert_eq!(
		missing_parent.to_string(),
		"Image collection with id ic-deleted not found"
	);
}

#[tokio::test]
async fn deleting_a_collection_hides_its_leaves() {
	let app = TestApp::new().await;
	let id = ResourceId::new("csv-private");
	app.service
		.authorize_by_id(ResourceKind::Csv, &id, &alice(), AccessMode::Read)
		.await
		.unwrap();

	app.catalog
		.csv_collections
		.remove(&ResourceId::new("cc-private"))
		.await;

	let err = app
		.service
		.authorize_by_id(ResourceKind::Csv, &id, &alice(), AccessMode::Read)
		.await
		.unwrap_err();
	assert!(err.is_not_found());
	assert_eq!(err.kind(), ResourceKind::CsvCollection);
}

// ============================================================================
// Preloaded objects
// ============================================================================

#[tokio::test]
async fn object_checks_agree_with_id_checks() {
	let app = TestApp::new().await;
	let identities = [alice(), bob(), ActingIdentity::new("mallory")];
	let modes = [AccessMode::Read, AccessMode::Edit];

	for id in ["ic-private", "ic-public", "ic-ownerless"] {
		let id = ResourceId::new(id);
		let object = app.catalog.images_collections.find_by_id(&id).await.unwrap();
		for identity in &identities {
			for mode in modes {
				assert_eq!(
					app.service.authorize(&object, identity, mode).await,
					app.service
						.authorize_by_id(ResourceKind::ImagesCollection, &id, identity, mode)
						.await,
				);
			}
		}
	}

	for id in ["img-private", "img-public"] {
		let id = ResourceId::new(id);
		let object = app.catalog.images.find_by_id(&id).await.unwrap();
		for identity in &identities {
			for mode in modes {
				assert_eq!(
					app.service.authorize(&object, identity, mode).await,
					app.service
						.authorize_by_id(ResourceKind::Image, &id, identity, mode)
						.await,
				);
			}
		}
	}

	for id in ["csv-private", "csv-public"] {
		let id = ResourceId::new(id);
		let object = app.catalog.csvs.find_by_id(&id).await.unwrap();
		for identity in &identities {
			for mode in modes {
				assert_eq!(
					app.service.authorize(&object, identity, mode).await,
					app.service.authorize_id::<Csv>(&id, identity, mode).await,
				);
			}
		}
	}
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn concurrent_checks_agree_with_sequential_ones() {
	let app = TestApp::new().await;
	let requests: Vec<(ResourceKind, &str, ActingIdentity, AccessMode)> = [
		(ResourceKind::Image, "img-private"),
		(ResourceKind::Image, "img-public"),
		(ResourceKind::Csv, "csv-public"),
		(ResourceKind::Pyramid, "pyr-1"),
		(ResourceKind::Visualization, "viz-1"),
	]
	.into_iter()
	.flat_map(|(kind, id)| {
		[alice(), bob()].into_iter().flat_map(move |identity| {
			[AccessMode::Read, AccessMode::Edit]
				.into_iter()
				.map(move |mode| (kind, id, identity.clone(), mode))
		})
	})
	.collect();

	let mut sequential = Vec::new();
	for (kind, id, identity, mode) in &requests {
		let result = app
			.service
			.authorize_by_id(*kind, &ResourceId::new(*id), identity, *mode)
			.await;
		sequential.push(result);
	}

	let concurrent = futures::future::join_all(requests.iter().map(|(kind, id, identity, mode)| {
		let service = app.service.clone();
		async move {
			service
				.authorize_by_id(*kind, &ResourceId::new(*id), identity, *mode)
				.await
		}
	}))
	.await;

	assert_eq!(sequential, concurrent);
}

// ============================================================================
// Role check
// ============================================================================

#[test]
fn authenticated_role_requires_plain_user_authority() {
	assert!(SecurityService::has_authenticated_role(&alice()));
	assert!(SecurityService::has_authenticated_role(
		&ActingIdentity::new("carol").with_authorities(["admin", "user"])
	));
	assert!(!SecurityService::has_authenticated_role(
		&ActingIdentity::new("root").with_authorities(["admin"])
	));
	assert!(!SecurityService::has_authenticated_role(
		&ActingIdentity::new("eve").with_authorities(["ROLE_USER", "User"])
	));
	assert!(!SecurityService::has_authenticated_role(&ActingIdentity::new("anon")));
}
