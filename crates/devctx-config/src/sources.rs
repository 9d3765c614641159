// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, environment, CLI.

use std::path::PathBuf;

use tracing::{debug, trace, warn};

use crate::layer::*;
use crate::ConfigError;

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	Environment = 50,
	Cli = 60,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	/// Name for logging
	fn name(&self) -> &'static str;

	/// Precedence level
	fn precedence(&self) -> Precedence;

	/// Load configuration layer from this source
	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading defaults");
		// Return empty layer - defaults applied during finalization
		Ok(ConfigLayer::default())
	}
}

/// `DEVCTX_*` environment variables.
pub struct EnvSource {
	vars: Vec<(String, String)>,
}

impl EnvSource {
	/// Snapshot of the process environment.
	pub fn from_env() -> Self {
		Self::from_vars(std::env::vars())
	}

	pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
		Self {
			vars: vars
				.into_iter()
				.filter(|(key, _)| key.starts_with("DEVCTX_"))
				.collect(),
		}
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	/// Invalid values are logged and ignored; the environment never fails a
	/// run.
	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading environment variables");
		let mut layer = ConfigLayer::default();

		for (key, value) in &self.vars {
			let value = value.trim();
			if value.is_empty() {
				continue;
			}

			trace!(key = %key, "processing env var");

			if let Err(e) = apply_env_var(&mut layer, key, value) {
				warn!(key = %key, error = %e, "ignoring invalid env var");
			}
		}

		Ok(layer)
	}
}

fn apply_env_var(layer: &mut ConfigLayer, key: &str, value: &str) -> Result<(), ConfigError> {
	match key {
		"DEVCTX_WORKSPACE" => layer.workspace = Some(PathBuf::from(value)),
		"DEVCTX_HISTORY_LIMIT" => {
			let limit = parse_limit(key, value)?;
			if limit == 0 {
				return Err(ConfigError::invalid_value(key, "must be at least 1"));
			}
			layer.history_limit = Some(limit);
		}
		"DEVCTX_LOG_LEVEL" => {
			layer.logging.get_or_insert_with(LoggingLayer::default).level = Some(value.parse()?);
		}
		"DEVCTX_LOG_FORMAT" => {
			layer.logging.get_or_insert_with(LoggingLayer::default).format = Some(value.parse()?);
		}
		_ => trace!(key = %key, "ignoring unknown env var"),
	}
	Ok(())
}

/// CLI argument overrides.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub workspace: Option<PathBuf>,
	pub history_limit: Option<usize>,
	pub log_level: Option<String>,
	pub log_format: Option<String>,
}

pub struct CliSource {
	overrides: CliOverrides,
}

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading CLI overrides");
		let mut layer = ConfigLayer {
			workspace: self.overrides.workspace.clone(),
			history_limit: self.overrides.history_limit,
			logging: None,
		};

		if let Some(ref level) = self.overrides.log_level {
			layer.logging.get_or_insert_with(LoggingLayer::default).level = Some(level.parse()?);
		}
		if let Some(ref format) = self.overrides.log_format {
			layer.logging.get_or_insert_with(LoggingLayer::default).format = Some(format.parse()?);
		}

		Ok(layer)
	}
}

fn parse_limit(field: &str, value: &str) -> Result<usize, ConfigError> {
	value
		.parse::<usize>()
		.map_err(|e| ConfigError::invalid_value(field, e.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::runtime::{LogFormat, LogLevel};

	fn env(pairs: &[(&str, &str)]) -> EnvSource {
		EnvSource::from_vars(
			pairs
				.iter()
				.map(|(k, v)| (k.to_string(), v.to_string())),
		)
	}

	#[test]
	fn test_env_source_reads_known_vars() {
		let layer = env(&[
			("DEVCTX_WORKSPACE", "/src/project"),
			("DEVCTX_HISTORY_LIMIT", " 20 "),
			("DEVCTX_LOG_LEVEL", "debug"),
			("DEVCTX_LOG_FORMAT", "json"),
			("HOME", "/home/dev"),
		])
		.load()
		.unwrap();

		assert_eq!(layer.workspace, Some(PathBuf::from("/src/project")));
		assert_eq!(layer.history_limit, Some(20));
		let logging = layer.logging.unwrap();
		assert_eq!(logging.level, Some(LogLevel::Debug));
		assert_eq!(logging.format, Some(LogFormat::Json));
	}

	#[test]
	fn test_env_source_skips_empty_values() {
		let layer = env(&[("DEVCTX_HISTORY_LIMIT", "  ")]).load().unwrap();
		assert_eq!(layer, ConfigLayer::default());
	}

	#[test]
	fn test_env_source_drops_non_numeric_limit() {
		let layer = env(&[("DEVCTX_HISTORY_LIMIT", "ten")]).load().unwrap();
		assert_eq!(layer.history_limit, None);
	}

	#[test]
	fn test_env_source_drops_zero_limit() {
		let layer = env(&[("DEVCTX_HISTORY_LIMIT", "0")]).load().unwrap();
		assert_eq!(layer.history_limit, None);
	}

	/// A bad value only discards that variable; the valid ones still apply.
	#[test]
	fn test_env_source_keeps_valid_vars_next_to_invalid_ones() {
		let layer = env(&[
			("DEVCTX_LOG_FORMAT", "yaml"),
			("DEVCTX_LOG_LEVEL", "info"),
		])
		.load()
		.unwrap();

		let logging = layer.logging.unwrap();
		assert_eq!(logging.format, None);
		assert_eq!(logging.level, Some(LogLevel::Info));
	}

	#[test]
	fn test_apply_env_var_reports_invalid_value() {
		let mut layer = ConfigLayer::default();
		let err = apply_env_var(&mut layer, "DEVCTX_HISTORY_LIMIT", "ten").unwrap_err();
		assert!(err.to_string().contains("DEVCTX_HISTORY_LIMIT"));
	}

	#[test]
	fn test_cli_source_parses_log_settings() {
		let layer = CliSource::new(CliOverrides {
			log_level: Some("trace".to_string()),
			log_format: Some("pretty".to_string()),
			..Default::default()
		})
		.load()
		.unwrap();

		let logging = layer.logging.unwrap();
		assert_eq!(logging.level, Some(LogLevel::Trace));
		assert_eq!(logging.format, Some(LogFormat::Pretty));
	}

	#[test]
	fn test_cli_source_rejects_bad_level() {
		let result = CliSource::new(CliOverrides {
			log_level: Some("loud".to_string()),
			..Default::default()
		})
		.load();
		assert!(result.is_err());
	}

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Defaults < Precedence::Environment);
		assert!(Precedence::Environment < Precedence::Cli);
	}
}
