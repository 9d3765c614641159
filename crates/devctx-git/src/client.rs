// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::Path;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::GitError;

/// Snapshot of the working tree taken for a single report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VcsContext {
	/// Abbreviated name of the checked out branch (`HEAD` when detached).
	pub branch: String,
	/// Output of `git status --short`, trimmed. Empty when the tree is clean.
	pub status: String,
	/// Output of `git diff --stat`, trimmed. Empty when nothing is unstaged.
	pub diff_stat: String,
}

impl VcsContext {
	/// Returns true if neither the status nor the diff stat report anything.
	pub fn is_clean(&self) -> bool {
		self.status.is_empty() && self.diff_stat.is_empty()
	}
}

/// Trait abstracting the read-only git queries for testability.
#[async_trait]
pub trait GitClient: Send + Sync {
	/// Check if the path is inside a git repository. Errors only when git
	/// itself could not be run.
	async fn is_repository(&self, path: &Path) -> Result<bool, GitError>;

	/// Abbreviated name of the current branch.
	async fn current_branch(&self, path: &Path) -> Result<String, GitError>;

	/// Short-form working tree status.
	async fn status_short(&self, path: &Path) -> Result<String, GitError>;

	/// Diff statistics of unstaged changes against the index.
	async fn diff_stat(&self, path: &Path) -> Result<String, GitError>;
}
