// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::GitClient;
use crate::error::GitError;

/// Recorded call to the mock git client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockCall {
	IsRepository,
	CurrentBranch,
	StatusShort,
	DiffStat,
}

/// Mock git client for testing.
#[derive(Clone, Default)]
pub struct MockGitClient {
	/// Whether is_repository returns true.
	pub is_repo: bool,
	/// If set, every call fails as if git were not installed.
	pub git_missing: bool,
	/// Branch to return from current_branch.
	pub branch: String,
	/// Output to return from status_short.
	pub status: String,
	/// Output to return from diff_stat.
	pub diff_stat: String,
	/// If set, diff_stat returns this error.
	pub diff_error: Option<String>,
	/// Track calls for verification.
	pub calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockGitClient {
	pub fn new() -> Self {
		Self {
			is_repo: true,
			git_missing: false,
			branch: "main".to_string(),
			status: String::new(),
			diff_stat: String::new(),
			diff_error: None,
			calls: Arc::new(Mutex::new(Vec::new())),
		}
	}

	pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
		self.branch = branch.into();
		self
	}

	pub fn with_status(mut self, status: impl Into<String>) -> Self {
		self.status = status.into();
		self
	}

	pub fn with_diff_stat(mut self, diff_stat: impl Into<String>) -> Self {
		self.diff_stat = diff_stat.into();
		self
	}

	pub fn with_diff_error(mut self, error: impl Into<String>) -> Self {
		self.diff_error = Some(error.into());
		self
	}

	pub fn not_a_repo(mut self) -> Self {
		self.is_repo = false;
		self
	}

	pub fn without_git(mut self) -> Self {
		self.git_missing = true;
		self
	}

	/// Returns the recorded calls.
	pub fn get_calls(&self) -> Vec<MockCall> {
		self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
	}

	fn record(&self, call: MockCall) {
		self.calls
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.push(call);
	}

	fn require_repo(&self, path: &Path) -> Result<(), GitError> {
		if self.git_missing {
			return Err(GitError::GitNotInstalled);
		}
		if self.is_repo {
			Ok(())
		} else {
			Err(GitError::CommandFailed {
				args: vec!["rev-parse".to_string(), "--show-toplevel".to_string()],
				stderr: format!(
					"fatal: not a git repository (or any of the parent directories): {}",
					path.display()
				),
			})
		}
	}
}

#[async_trait]
impl GitClient for MockGitClient {
	async fn is_repository(&self, _path: &Path) -> Result<bool, GitError> {
		self.record(MockCall::IsRepository);
		if self.git_missing {
			return Err(GitError::GitNotInstalled);
		}
		Ok(self.is_repo)
	}

	async fn current_branch(&self, path: &Path) -> Result<String, GitError> {
		self.record(MockCall::CurrentBranch);
		self.require_repo(path)?;
		Ok(self.branch.clone())
	}

	async fn status_short(&self, path: &Path) -> Result<String, GitError> {
		self.record(MockCall::StatusShort);
		self.require_repo(path)?;
		Ok(self.status.clone())
	}

	async fn diff_stat(&self, path: &Path) -> Result<String, GitError> {
		self.record(MockCall::DiffStat);
		self.require_repo(path)?;
		if let Some(ref err) = self.diff_error {
			return Err(GitError::CommandFailed {
				args: vec!["diff".to_string(), "--stat".to_string()],
				stderr: err.clone(),
			});
		}
		Ok(self.diff_stat.clone())
	}
}
