// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::io;
use thiserror::Error;

/// Why a shell has no history to show.
///
/// The display text doubles as the sentinel entry printed in place of the
/// commands, so it is part of the observable output.
#[derive(Debug, Error)]
pub enum HistoryUnavailable {
	#[error("(No history file found)")]
	NotFound,

	#[error("(No commands found)")]
	Empty,

	#[error("(Error reading history: {0})")]
	Read(#[from] io::Error),
}
