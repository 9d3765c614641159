// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, trace, warn};

use crate::client::GitClient;
use crate::error::GitError;

/// Git client implementation using the git CLI.
pub struct CommandGitClient {
	program: String,
}

impl CommandGitClient {
	pub fn new() -> Self {
		Self::with_program("git")
	}

	/// Uses `program` instead of `git` from PATH.
	pub fn with_program(program: impl Into<String>) -> Self {
		Self {
			program: program.into(),
		}
	}

	async fn run(&self, path: &Path, args: &[&str]) -> Result<String, GitError> {
		run_git(&self.program, path, args).await
	}
}

impl Default for CommandGitClient {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl GitClient for CommandGitClient {
	async fn is_repository(&self, path: &Path) -> Result<bool, GitError> {
		match self.run(path, &["rev-parse", "--show-toplevel"]).await {
			Ok(_) => Ok(true),
			Err(GitError::CommandFailed { .. }) => Ok(false),
			Err(e) => Err(e),
		}
	}

	async fn current_branch(&self, path: &Path) -> Result<String, GitError> {
		match self.run(path, &["rev-parse", "--abbrev-ref", "HEAD"]).await {
			Ok(branch) => Ok(branch),
			Err(GitError::CommandFailed { stderr, .. }) => {
				// Unborn branch: HEAD points at a ref that has no commit yet.
				debug!(path = %path.display(), %stderr, "rev-parse failed, trying symbolic-ref");
				self.run(path, &["symbolic-ref", "--short", "HEAD"]).await
			}
			Err(e) => Err(e),
		}
	}

	async fn status_short(&self, path: &Path) -> Result<String, GitError> {
		let status = self.run(path, &["status", "--short"]).await?;
		debug!(
				path = %path.display(),
				lines = status.lines().count(),
				"read short status"
		);
		Ok(status)
	}

	async fn diff_stat(&self, path: &Path) -> Result<String, GitError> {
		let stat = self.run(path, &["diff", "--stat"]).await?;
		debug!(
				path = %path.display(),
				empty = stat.is_empty(),
				"read diff stat"
		);
		Ok(stat)
	}
}

/// Runs a git command and returns the trimmed stdout on success.
async fn run_git(program: &str, path: &Path, args: &[&str]) -> Result<String, GitError> {
	let mut cmd = Command::new(program);
	cmd.arg("-C").arg(path).args(args);

	trace!(
			cmd = %format!("{} -C {} {}", program, path.display(), args.join(" ")),
			"running git command"
	);

	let output = cmd.output().await.map_err(|e| {
		if e.kind() == std::io::ErrorKind::NotFound {
			warn!(program = %program, "git not found in PATH");
			GitError::GitNotInstalled
		} else {
			GitError::Io(e)
		}
	})?;

	if output.status.success() {
		Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
	} else {
		let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
		Err(GitError::CommandFailed {
			args: args.iter().map(|s| s.to_string()).collect(),
			stderr,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use std::process::Command as StdCommand;
	use tempfile::TempDir;

	fn git(dir: &Path, args: &[&str]) {
		StdCommand::new("git")
			.args(args)
			.current_dir(dir)
			.output()
			.expect("git invocation failed");
	}

	fn init_git_repo(dir: &Path) {
		git(dir, &["init", "--initial-branch=trunk"]);
		git(dir, &["config", "user.email", "test@test.com"]);
		git(dir, &["config", "user.name", "Test"]);
		git(dir, &["config", "commit.gpgsign", "false"]);
	}

	fn create_initial_commit(dir: &Path) {
		fs::write(dir.join("README.md"), "# Test\n").expect("write failed");
		git(dir, &["add", "."]);
		git(dir, &["commit", "-m", "Initial commit"]);
	}

	#[tokio::test]
	async fn test_is_repository_true_for_git_repo() {
		let temp = TempDir::new().unwrap();
		init_git_repo(temp.path());

		let client = CommandGitClient::new();
		assert!(client.is_repository(temp.path()).await.unwrap());
	}

	#[tokio::test]
	async fn test_is_repository_false_for_non_git() {
		let temp = TempDir::new().unwrap();

		let client = CommandGitClient::new();
		assert!(!client.is_repository(temp.path()).await.unwrap());
	}

	#[tokio::test]
	async fn test_current_branch_after_commit() {
		let temp = TempDir::new().unwrap();
		init_git_repo(temp.path());
		create_initial_commit(temp.path());

		let client = CommandGitClient::new();
		assert_eq!(client.current_branch(temp.path()).await.unwrap(), "trunk");
	}

	/// A freshly initialized repository has no commit for HEAD to resolve to,
	/// so rev-parse fails and the symbolic ref has to be used instead.
	#[tokio::test]
	async fn test_current_branch_unborn() {
		let temp = TempDir::new().unwrap();
		init_git_repo(temp.path());

		let client = CommandGitClient::new();
		assert_eq!(client.current_branch(temp.path()).await.unwrap(), "trunk");
	}

	#[tokio::test]
	async fn test_status_and_diff_clean_repo() {
		let temp = TempDir::new().unwrap();
		init_git_repo(temp.path());
		create_initial_commit(temp.path());

		let client = CommandGitClient::new();
		assert_eq!(client.status_short(temp.path()).await.unwrap(), "");
		assert_eq!(client.diff_stat(temp.path()).await.unwrap(), "");
	}

	#[tokio::test]
	async fn test_status_and_diff_with_changes() {
		let temp = TempDir::new().unwrap();
		init_git_repo(temp.path());
		create_initial_commit(temp.path());

		fs::write(temp.path().join("README.md"), "# Modified\n").unwrap();
		fs::write(temp.path().join("new_file.txt"), "new content").unwrap();

		let client = CommandGitClient::new();
		let status = client.status_short(temp.path()).await.unwrap();
		assert!(status.contains("M README.md"));
		assert!(status.contains("?? new_file.txt"));

		let stat = client.diff_stat(temp.path()).await.unwrap();
		assert!(stat.contains("README.md"));
		assert!(stat.contains("1 file changed"));
		assert!(!stat.contains("new_file.txt"), "untracked files are not in the diff");
	}

	/// Staged changes are compared against the index, so they vanish from the
	/// diff stat while still showing up in the status.
	#[tokio::test]
	async fn test_diff_stat_ignores_staged_changes() {
		let temp = TempDir::new().unwrap();
		init_git_repo(temp.path());
		create_initial_commit(temp.path());

		fs::write(temp.path().join("README.md"), "# Staged\n").unwrap();
		git(temp.path(), &["add", "README.md"]);

		let client = CommandGitClient::new();
		assert_eq!(client.diff_stat(temp.path()).await.unwrap(), "");
		assert!(client
			.status_short(temp.path())
			.await
			.unwrap()
			.contains("README.md"));
	}

	#[tokio::test]
	async fn test_status_outside_repo_fails() {
		let temp = TempDir::new().unwrap();

		let client = CommandGitClient::new();
		let err = client.status_short(temp.path()).await.unwrap_err();
		assert!(matches!(err, GitError::CommandFailed { .. }));
	}

	#[tokio::test]
	async fn test_missing_binary_is_not_installed() {
		let temp = TempDir::new().unwrap();

		let client = CommandGitClient::with_program("devctx-test-no-such-git");
		let err = client.is_repository(temp.path()).await.unwrap_err();
		assert!(matches!(err, GitError::GitNotInstalled));
	}
}
