// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Collecting and printing the context report.

use std::io::{self, Write};

use serde::Serialize;

use devctx_config::DevctxConfig;
use devctx_git::{get_vcs_context, GitClient, GitError, VcsContext};
use devctx_history::{default_sources, get_shell_histories, ShellHistoryMap};

#[derive(Debug, Serialize)]
pub struct Report {
	pub vcs: VcsContext,
	pub shells: ShellHistoryMap,
	#[serde(skip)]
	pub history_limit: usize,
}

/// Reads git context, then shell histories. A git failure aborts before any
/// history is read.
pub async fn collect_report(
	client: &dyn GitClient,
	config: &DevctxConfig,
) -> Result<Report, GitError> {
	let vcs = get_vcs_context(client, &config.workspace).await?;

	let sources = default_sources(&config.home_dir);
	let shells = get_shell_histories(&sources, config.history_limit);

	Ok(Report {
		vcs,
		shells,
		history_limit: config.history_limit,
	})
}

impl Report {
	pub fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
		writeln!(out, "=== Git Context ===")?;
		writeln!(out, "Current branch: {}", self.vcs.branch)?;
		writeln!(out, "Status:\n{}", or_placeholder(&self.vcs.status, "Clean"))?;
		writeln!(
			out,
			"Diff stat:\n{}",
			or_placeholder(&self.vcs.diff_stat, "No changes")
		)?;

		writeln!(
			out,
			"\n=== Last {} Terminal Commands by Shell ===",
			self.history_limit
		)?;
		for (shell, history) in self.shells.iter() {
			writeln!(out, "\n--- {shell} ---")?;
			for (i, entry) in history.entries().iter().enumerate() {
				writeln!(out, "{}: {}", i + 1, entry)?;
			}
		}
		Ok(())
	}

	pub fn write_json(&self, out: &mut impl Write) -> io::Result<()> {
		serde_json::to_writer_pretty(&mut *out, self)?;
		writeln!(out)
	}
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
	if value.is_empty() {
		placeholder
	} else {
		value
	}
}
