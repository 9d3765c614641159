// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer for merging from multiple sources.

use std::path::PathBuf;

use crate::runtime::{LogFormat, LogLevel};

/// Partial configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLayer {
	pub workspace: Option<PathBuf>,
	pub history_limit: Option<usize>,
	pub logging: Option<LoggingLayer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingLayer {
	pub level: Option<LogLevel>,
	pub format: Option<LogFormat>,
}

impl ConfigLayer {
	/// Overlay `other` on top of `self`; set fields in `other` win.
	pub fn merge(&mut self, other: ConfigLayer) {
		if other.workspace.is_some() {
			self.workspace = other.workspace;
		}
		if other.history_limit.is_some() {
			self.history_limit = other.history_limit;
		}
		merge_option(&mut self.logging, other.logging, LoggingLayer::merge);
	}
}

impl LoggingLayer {
	fn merge(&mut self, other: LoggingLayer) {
		if other.level.is_some() {
			self.level = other.level;
		}
		if other.format.is_some() {
			self.format = other.format;
		}
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}
