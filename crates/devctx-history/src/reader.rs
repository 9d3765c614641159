// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::Path;

use serde::ser::{Serialize, Serializer};

use crate::error::HistoryUnavailable;
use crate::sources::ShellSource;

/// Number of commands kept per shell unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// What was recovered for one shell.
#[derive(Debug)]
pub enum ShellHistory {
	/// Most recent commands, oldest first.
	Commands(Vec<String>),
	Unavailable(HistoryUnavailable),
}

impl ShellHistory {
	/// Lines to display: the commands, or the single sentinel entry.
	pub fn entries(&self) -> Vec<String> {
		match self {
			ShellHistory::Commands(commands) => commands.clone(),
			ShellHistory::Unavailable(reason) => vec![reason.to_string()],
		}
	}

	pub fn is_available(&self) -> bool {
		matches!(self, ShellHistory::Commands(_))
	}
}

impl From<Result<Vec<String>, HistoryUnavailable>> for ShellHistory {
	fn from(result: Result<Vec<String>, HistoryUnavailable>) -> Self {
		match result {
			Ok(commands) => ShellHistory::Commands(commands),
			Err(reason) => ShellHistory::Unavailable(reason),
		}
	}
}

/// Per-shell histories in configured order. Every configured shell has an
/// entry, whether or not its file could be read.
#[derive(Debug, Default)]
pub struct ShellHistoryMap {
	shells: Vec<(String, ShellHistory)>,
}

impl ShellHistoryMap {
	pub fn get(&self, shell: &str) -> Option<&ShellHistory> {
		self
			.shells
			.iter()
			.find(|(name, _)| name == shell)
			.map(|(_, history)| history)
	}

	/// Display entries for `shell`, sentinel included.
	pub fn entries(&self, shell: &str) -> Option<Vec<String>> {
		self.get(shell).map(ShellHistory::entries)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.shells.iter().map(|(name, _)| name.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &ShellHistory)> {
		self
			.shells
			.iter()
			.map(|(name, history)| (name.as_str(), history))
	}

	pub fn len(&self) -> usize {
		self.shells.len()
	}

	pub fn is_empty(&self) -> bool {
		self.shells.is_empty()
	}
}

#[derive(serde::Serialize)]
struct ShellView<'a> {
	shell: &'a str,
	entries: Vec<String>,
	available: bool,
}

impl Serialize for ShellHistoryMap {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_seq(self.iter().map(|(shell, history)| ShellView {
			shell,
			entries: history.entries(),
			available: history.is_available(),
		}))
	}
}

/// Reads every source in order. Never fails: problems with one shell become
/// that shell's sentinel and do not affect the others.
pub fn get_shell_histories(sources: &[ShellSource], limit: usize) -> ShellHistoryMap {
	let shells = sources
		.iter()
		.map(|source| {
			let history = ShellHistory::from(read_history(&source.path, limit));
			match history {
				ShellHistory::Commands(ref commands) => tracing::debug!(
						shell = %source.name,
						path = %source.path.display(),
						count = commands.len(),
						"read shell history"
				),
				ShellHistory::Unavailable(ref reason) => tracing::debug!(
						shell = %source.name,
						path = %source.path.display(),
						reason = %reason,
						"shell history unavailable"
				),
			}
			(source.name.clone(), history)
		})
		.collect();

	ShellHistoryMap { shells }
}

/// Returns the last `limit` non-empty trimmed lines of the file at `path`.
pub fn read_history(path: &Path, limit: usize) -> Result<Vec<String>, HistoryUnavailable> {
	if !path.exists() {
		return Err(HistoryUnavailable::NotFound);
	}

	let bytes = std::fs::read(path)?;
	let commands = last_commands(&decode_lossless(&bytes), limit);

	if commands.is_empty() {
		return Err(HistoryUnavailable::Empty);
	}
	Ok(commands)
}

/// Decodes UTF-8, dropping invalid byte sequences rather than replacing them.
fn decode_lossless(bytes: &[u8]) -> String {
	let mut text = String::with_capacity(bytes.len());
	for chunk in bytes.utf8_chunks() {
		text.push_str(chunk.valid());
	}
	text
}

fn last_commands(text: &str, limit: usize) -> Vec<String> {
	let lines: Vec<&str> = text
		.split(['\n', '\r'])
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.collect();

	let start = lines.len().saturating_sub(limit);
	lines[start..].iter().map(|line| line.to_string()).collect()
}
