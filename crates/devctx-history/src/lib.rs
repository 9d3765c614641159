// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Recent commands from the shell history files in a home directory.
//!
//! Reading is best-effort: a missing, empty or unreadable file yields a
//! sentinel entry for that shell instead of an error.

mod error;
mod reader;
pub mod sources;

pub use error::HistoryUnavailable;
pub use reader::{
	get_shell_histories, read_history, ShellHistory, ShellHistoryMap, DEFAULT_HISTORY_LIMIT,
};
pub use sources::{default_sources, ShellSource};
