// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::Path;

use crate::client::{GitClient, VcsContext};
use crate::error::GitError;

/// Collects branch, short status and diff stat for the repository at `path`.
///
/// Fails with [`GitError::NotAGitRepo`] when `path` is not inside a
/// repository, [`GitError::GitNotInstalled`] when git cannot be run, and with
/// whatever error the first failing query produced otherwise. There is no partial result.
pub async fn get_vcs_context(client: &dyn GitClient, path: &Path) -> Result<VcsContext, GitError> {
	if !client.is_repository(path).await? {
		tracing::debug!(path = %path.display(), "not a git repository");
		return Err(GitError::NotAGitRepo(path.to_path_buf()));
	}

	let branch = client.current_branch(path).await?;
	let status = client.status_short(path).await?;
	let diff_stat = client.diff_stat(path).await?;

	tracing::info!(
			path = %path.display(),
			branch = %branch,
			dirty = !status.is_empty(),
			"collected git context"
	);

	Ok(VcsContext {
		branch,
		status,
		diff_stat,
	})
}
