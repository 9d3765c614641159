// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! devctx - print local developer context
//!
//! Collects the current git branch, short status and diff stat of the
//! workspace, plus the most recent commands from each shell history file in
//! the home directory, and prints them for another process to consume.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use devctx_config::{load_config_with_cli, CliOverrides};
use devctx_git::CommandGitClient;

mod logging;
mod report;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
	Text,
	Json,
}

/// devctx - git and shell history context for coding assistants
#[derive(Parser, Debug)]
#[command(name = "devctx", version, about, long_about = None)]
struct Args {
	/// Repository to read git context from (defaults to the current directory)
	#[arg(short, long)]
	workspace: Option<PathBuf>,

	/// Number of commands to show per shell
	#[arg(short = 'n', long)]
	limit: Option<usize>,

	/// Output format
	#[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
	format: OutputFormat,

	/// Log level (overrides DEVCTX_LOG_LEVEL)
	#[arg(short, long)]
	log_level: Option<String>,

	/// Log format: pretty, compact or json (overrides DEVCTX_LOG_FORMAT)
	#[arg(long)]
	log_format: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
	let args = Args::parse();

	let config = load_config_with_cli(CliOverrides {
		workspace: args.workspace,
		history_limit: args.limit,
		log_level: args.log_level,
		log_format: args.log_format,
	})
	.context("failed to load configuration")?;

	logging::init_tracing(&config.logging);

	let client = CommandGitClient::new();
	let report = report::collect_report(&client, &config)
		.await
		.with_context(|| {
			format!(
				"failed to read git context for {}",
				config.workspace.display()
			)
		})?;

	tracing::debug!(format = ?args.format, "writing report");

	let stdout = io::stdout();
	let mut out = stdout.lock();
	match args.format {
		OutputFormat::Text => report.write_text(&mut out)?,
		OutputFormat::Json => report.write_json(&mut out)?,
	}

	Ok(())
}
