// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Read-only git queries describing the current working tree.

mod client;
mod command_client;
mod context;
mod error;
mod mock_client;

pub use client::{GitClient, VcsContext};
pub use command_client::CommandGitClient;
pub use context::get_vcs_context;
pub use error::GitError;
pub use mock_client::{MockCall, MockGitClient};
