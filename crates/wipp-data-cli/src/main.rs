// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Command-line authorization checks against a WIPP data catalog snapshot.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wipp_data_authz::{
	AccessMode, ActingIdentity, AuthzError, ResourceId, ResourceKind, SecurityService,
};
use wipp_data_config::{DataConfig, LogFormat, LoggingConfig};

mod snapshot;

use snapshot::CatalogSnapshot;

const EXIT_GRANTED: u8 = 0;
const EXIT_FAILURE: u8 = 1;
const EXIT_FORBIDDEN: u8 = 3;
const EXIT_NOT_FOUND: u8 = 4;

/// Owner/visibility authorization checks for the WIPP data catalog.
#[derive(Parser, Debug)]
#[command(
	name = "wipp-data-authz",
	about = "Owner/visibility authorization checks for the WIPP data catalog",
	version
)]
struct Args {
	/// TOML config file (defaults to /etc/wipp/data.toml)
	#[arg(long, global = true, env = "WIPP_DATA_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Check whether an identity may access a catalog object
	Check {
		/// Kind of the requested object (e.g. images_collection, csv)
		#[arg(long)]
		kind: ResourceKind,

		/// Id of the requested object
		#[arg(long)]
		id: String,

		/// Name of the acting identity
		#[arg(long)]
		user: String,

		/// Authorities granted to the acting identity
		#[arg(long = "authority")]
		authorities: Vec<String>,

		/// Request edit access instead of read access
		#[arg(long)]
		edit: bool,

		/// JSON catalog snapshot (overrides the configured path)
		#[arg(long)]
		catalog: Option<PathBuf>,
	},

	/// Report whether a set of authorities carries the authenticated role
	Role {
		#[arg(long = "authority")]
		authorities: Vec<String>,
	},

	/// List catalog kinds and the kind each one defers to
	Kinds,
}

#[tokio::main]
async fn main() -> ExitCode {
	let args = Args::parse();

	let config = match load_config(args.config.as_ref()) {
		Ok(config) => config,
		Err(e) => {
			eprintln!("error: {e:#}");
			return ExitCode::from(EXIT_FAILURE);
		}
	};

	init_tracing(&config.logging);

	match run(args.command, &config).await {
		Ok(code) => ExitCode::from(code),
		Err(e) => {
			tracing::error!(error = %e, "command failed");
			eprintln!("error: {e:#}");
			ExitCode::from(EXIT_FAILURE)
		}
	}
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<DataConfig> {
	let config = match path {
		Some(path) => wipp_data_config::load_config_with_file(path)?,
		None => wipp_data_config::load_config()?,
	};
	Ok(config)
}

fn init_tracing(logging: &LoggingConfig) {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
	let registry = tracing_subscriber::registry().with(filter);

	match logging.format {
		LogFormat::Pretty => registry
			.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
			.init(),
		LogFormat::Json => registry
			.with(
				tracing_subscriber::fmt::layer()
					.json()
					.with_writer(std::io::stderr),
			)
			.init(),
	}
}

async fn run(command: Command, config: &DataConfig) -> anyhow::Result<u8> {
	match command {
		Command::Check {
			kind,
			id,
			user,
			authorities,
			edit,
			catalog,
		} => {
			let path = catalog
				.or_else(|| config.catalog.path.clone())
				.context("no catalog snapshot given; pass --catalog or set WIPP_DATA_CATALOG_PATH")?;
			let identity = ActingIdentity::new(user).with_authorities(authorities);
			let mode = AccessMode::from_edit_flag(edit);

			let catalog = CatalogSnapshot::from_path(&path)?.into_catalog().await;
			let service = SecurityService::new(catalog.repositories());
			let result = service
				.authorize_by_id(kind, &ResourceId::new(id), &identity, mode)
				.await;

			println!("{}", describe_outcome(&result));
			Ok(exit_code_for(&result))
		}
		Command::Role { authorities } => {
			let identity = ActingIdentity::new("").with_authorities(authorities);
			println!("{}", SecurityService::has_authenticated_role(&identity));
			Ok(EXIT_GRANTED)
		}
		Command::Kinds => {
			for kind in ResourceKind::all() {
				match kind.parent() {
					Some(parent) => println!("{kind}\t{parent}"),
					None => println!("{kind}\t-"),
				}
			}
			Ok(EXIT_GRANTED)
		}
	}
}

fn describe_outcome(result: &Result<(), AuthzError>) -> String {
	match result {
		Ok(()) => "granted".to_string(),
		Err(e @ AuthzError::Forbidden { .. }) => format!("forbidden: {e}"),
		Err(e @ AuthzError::NotFound { .. }) => format!("not found: {e}"),
	}
}

fn exit_code_for(result: &Result<(), AuthzError>) -> u8 {
	match result {
		Ok(()) => EXIT_GRANTED,
		Err(AuthzError::Forbidden { .. }) => EXIT_FORBIDDEN,
		Err(AuthzError::NotFound { .. }) => EXIT_NOT_FOUND,
	}
}
