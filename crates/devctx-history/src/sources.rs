// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Where each supported shell keeps its history.

use std::path::{Path, PathBuf};

/// A shell name paired with the history file it writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSource {
	pub name: String,
	pub path: PathBuf,
}

impl ShellSource {
	pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
		Self {
			name: name.into(),
			path: path.into(),
		}
	}
}

/// POSIX shells, present on every platform.
pub fn unix_sources(home: &Path) -> Vec<ShellSource> {
	vec![
		ShellSource::new("Bash", home.join(".bash_history")),
		ShellSource::new("Zsh", home.join(".zsh_history")),
	]
}

/// PSReadLine and CMD history locations under a Windows profile directory.
pub fn windows_sources(home: &Path) -> Vec<ShellSource> {
	let roaming = home.join("AppData").join("Roaming");
	vec![
		ShellSource::new(
			"PowerShell",
			roaming
				.join("Microsoft")
				.join("Windows")
				.join("PowerShell")
				.join("PSReadLine")
				.join("ConsoleHost_history.txt"),
		),
		ShellSource::new("CMD", roaming.join("cmd_history.txt")),
	]
}

/// The shells reported on this platform, in report order.
pub fn default_sources(home: &Path) -> Vec<ShellSource> {
	let mut sources = unix_sources(home);
	if cfg!(windows) {
		sources.extend(windows_sources(home));
	}
	sources
}
