// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for devctx.
//!
//! This crate provides:
//! - Home and working directory resolution
//! - Layered configuration from defaults, environment and CLI
//! - Validation of the merged result

pub mod error;
pub mod layer;
pub mod paths;
pub mod registry;
pub mod runtime;
pub mod sources;

pub use error::ConfigError;
pub use layer::ConfigLayer;
pub use paths::{resolve_ambient_paths, AmbientPaths};
pub use registry::ConfigRegistry;
pub use runtime::{DevctxConfig, LogFormat, LogLevel, LoggingConfig};
pub use sources::{CliOverrides, ConfigSource, Precedence};

/// Load configuration from defaults, `DEVCTX_*` environment variables and CLI
/// overrides, in increasing precedence.
pub fn load_config_with_cli(cli: CliOverrides) -> Result<DevctxConfig, ConfigError> {
	let paths = resolve_ambient_paths()?;

	let mut registry = ConfigRegistry::new();

	registry.register(Box::new(sources::DefaultsSource));
	registry.register(Box::new(sources::EnvSource::from_env()));
	registry.register(Box::new(sources::CliSource::new(cli)));

	registry.load(paths)
}
