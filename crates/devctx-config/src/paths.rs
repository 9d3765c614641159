// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Ambient directories the readers would otherwise reach for themselves.

use std::path::PathBuf;

use crate::ConfigError;

/// Home and current directory of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbientPaths {
	pub home_dir: PathBuf,
	pub current_dir: PathBuf,
}

/// Resolve the home directory the way the OS reports it, plus the cwd.
pub fn resolve_ambient_paths() -> Result<AmbientPaths, ConfigError> {
	let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
	let current_dir = std::env::current_dir().map_err(ConfigError::CurrentDir)?;

	tracing::debug!(
			home_dir = %home_dir.display(),
			current_dir = %current_dir.display(),
			"resolved ambient paths"
	);

	Ok(AmbientPaths {
		home_dir,
		current_dir,
	})
}
