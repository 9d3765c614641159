// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration registry - manages sources and merges layers.

use tracing::{debug, info};

use devctx_history::DEFAULT_HISTORY_LIMIT;

use crate::layer::ConfigLayer;
use crate::paths::AmbientPaths;
use crate::runtime::{DevctxConfig, LoggingConfig};
use crate::sources::ConfigSource;
use crate::ConfigError;

/// Registry that manages configuration sources and merges them.
pub struct ConfigRegistry {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigRegistry {
	/// Create a new empty registry.
	pub fn new() -> Self {
		Self {
			sources: Vec::new(),
		}
	}

	/// Register a configuration source.
	pub fn register(&mut self, source: Box<dyn ConfigSource>) {
		debug!(source = source.name(), precedence = ?source.precedence(), "registering config source");
		self.sources.push(source);
	}

	/// Load configuration from all sources, merge, and validate.
	///
	/// Sources are merged lowest precedence first. A source that fails to
	/// load fails the whole load; only the CLI source can fail, since the
	/// environment source drops invalid values itself.
	pub fn load(&self, paths: AmbientPaths) -> Result<DevctxConfig, ConfigError> {
		let mut sorted_sources: Vec<_> = self.sources.iter().collect();
		sorted_sources.sort_by_key(|s| s.precedence());

		let mut merged = ConfigLayer::default();
		for source in &sorted_sources {
			let layer = source.load()?;
			debug!(source = source.name(), "merging config layer");
			merged.merge(layer);
		}

		let config = finalize(merged, paths)?;

		info!(
				workspace = %config.workspace.display(),
				history_limit = config.history_limit,
				log_level = ?config.logging.level,
				"configuration loaded"
		);

		Ok(config)
	}

	/// Get the number of registered sources.
	pub fn source_count(&self) -> usize {
		self.sources.len()
	}
}

impl Default for ConfigRegistry {
	fn default() -> Self {
		Self::new()
	}
}

fn finalize(layer: ConfigLayer, paths: AmbientPaths) -> Result<DevctxConfig, ConfigError> {
	let history_limit = layer.history_limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
	if history_limit == 0 {
		return Err(ConfigError::invalid_value(
			"history_limit",
			"must be at least 1",
		));
	}

	let workspace = match layer.workspace {
		Some(ws) if ws.is_relative() => paths.current_dir.join(ws),
		Some(ws) => ws,
		None => paths.current_dir,
	};

	let logging = layer.logging.unwrap_or_default();

	Ok(DevctxConfig {
		home_dir: paths.home_dir,
		workspace,
		history_limit,
		logging: LoggingConfig {
			level: logging.level.unwrap_or_default(),
			format: logging.format.unwrap_or_default(),
		},
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::runtime::{LogFormat, LogLevel};
	use crate::sources::{CliOverrides, CliSource, DefaultsSource, EnvSource};
	use std::path::PathBuf;

	fn paths() -> AmbientPaths {
		AmbientPaths {
			home_dir: PathBuf::from("/home/dev"),
			current_dir: PathBuf::from("/src/project"),
		}
	}

	fn env(pairs: &[(&str, &str)]) -> Box<EnvSource> {
		Box::new(EnvSource::from_vars(
			pairs
				.iter()
				.map(|(k, v)| (k.to_string(), v.to_string())),
		))
	}

	#[test]
	fn test_defaults_only() {
		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(DefaultsSource));

		let config = registry.load(paths()).unwrap();

		assert_eq!(config.home_dir, PathBuf::from("/home/dev"));
		assert_eq!(config.workspace, PathBuf::from("/src/project"));
		assert_eq!(config.history_limit, 10);
		assert_eq!(config.logging.level, LogLevel::Warn);
		assert_eq!(config.logging.format, LogFormat::Compact);
	}

	/// Registration order must not matter; precedence decides who wins.
	#[test]
	fn test_cli_beats_env_regardless_of_registration_order() {
		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(CliSource::new(CliOverrides {
			history_limit: Some(3),
			..Default::default()
		})));
		registry.register(env(&[
			("DEVCTX_HISTORY_LIMIT", "50"),
			("DEVCTX_LOG_LEVEL", "info"),
		]));
		registry.register(Box::new(DefaultsSource));

		let config = registry.load(paths()).unwrap();

		assert_eq!(registry.source_count(), 3);
		assert_eq!(config.history_limit, 3);
		assert_eq!(config.logging.level, LogLevel::Info);
	}

	#[test]
	fn test_relative_workspace_resolved_against_cwd() {
		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(CliSource::new(CliOverrides {
			workspace: Some(PathBuf::from("sub/dir")),
			..Default::default()
		})));

		let config = registry.load(paths()).unwrap();
		assert_eq!(config.workspace, PathBuf::from("/src/project/sub/dir"));
	}

	#[test]
	fn test_zero_limit_from_cli_rejected() {
		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(CliSource::new(CliOverrides {
			history_limit: Some(0),
			..Default::default()
		})));

		let err = registry.load(paths()).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "history_limit"));
	}

	#[test]
	fn test_bad_cli_log_format_fails_load() {
		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(CliSource::new(CliOverrides {
			log_format: Some("yaml".to_string()),
			..Default::default()
		})));

		assert!(registry.load(paths()).is_err());
	}

	#[test]
	fn test_bad_env_values_fall_back_to_defaults() {
		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(DefaultsSource));
		registry.register(env(&[
			("DEVCTX_LOG_FORMAT", "yaml"),
			("DEVCTX_HISTORY_LIMIT", "0"),
		]));

		let config = registry.load(paths()).unwrap();
		assert_eq!(config.logging.format, LogFormat::Compact);
		assert_eq!(config.history_limit, 10);
	}
}
