// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime configuration types with resolved defaults.

use std::path::PathBuf;
use std::str::FromStr;

use crate::ConfigError;

/// The final, validated configuration for a devctx run.
#[derive(Debug, Clone)]
pub struct DevctxConfig {
	/// Directory whose shell histories are read.
	pub home_dir: PathBuf,
	/// Directory the git queries run against.
	pub workspace: PathBuf,
	/// Commands kept per shell.
	pub history_limit: usize,
	pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
	pub level: LogLevel,
	pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
	Error,
	#[default]
	Warn,
	Info,
	Debug,
	Trace,
}

impl LogLevel {
	pub fn as_str(self) -> &'static str {
		match self {
			LogLevel::Error => "error",
			LogLevel::Warn => "warn",
			LogLevel::Info => "info",
			LogLevel::Debug => "debug",
			LogLevel::Trace => "trace",
		}
	}
}

impl FromStr for LogLevel {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"error" => Ok(LogLevel::Error),
			"warn" | "warning" => Ok(LogLevel::Warn),
			"info" => Ok(LogLevel::Info),
			"debug" => Ok(LogLevel::Debug),
			"trace" => Ok(LogLevel::Trace),
			other => Err(ConfigError::invalid_value(
				"logging.level",
				format!("unknown log level '{other}'"),
			)),
		}
	}
}

/// Log output shape. Logs always go to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
	Pretty,
	#[default]
	Compact,
	Json,
}

impl FromStr for LogFormat {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"pretty" => Ok(LogFormat::Pretty),
			"compact" => Ok(LogFormat::Compact),
			"json" => Ok(LogFormat::Json),
			other => Err(ConfigError::invalid_value(
				"logging.format",
				format!("unknown log format '{other}'"),
			)),
		}
	}
}
