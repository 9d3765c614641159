// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Repository context could not be established. Always fatal for a report.
#[derive(Debug, Error)]
pub enum GitError {
	#[error("not a git repository: {}", .0.display())]
	NotAGitRepo(PathBuf),

	#[error("`git {}` exited unsuccessfully: {stderr}", .args.join(" "))]
	CommandFailed { args: Vec<String>, stderr: String },

	#[error("git is not installed or not in PATH")]
	GitNotInstalled,

	#[error("failed to spawn git: {0}")]
	Io(#[from] io::Error),
}
