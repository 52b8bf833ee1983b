// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod host;
mod version;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use imgsel_config::{
	load_settings, JsonFileStore, LayeredStore, SettingsOverrides, SettingsStore,
};
use imgsel_core::{
	CommandContext, CommandOutcome, CursorPosition, ImageSelectorPlugin, ImageSearchRequest,
	SettingsPanel,
};
use imgsel_search_google_cse::CseClient;
use imgsel_tui_overlay::TerminalPresenter;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use host::{FileWorkspace, StderrNotices};

/// Search images for a note and embed the chosen one as Markdown.
#[derive(Parser, Debug)]
#[command(name = "imgsel", version)]
struct Cli {
	/// Settings file (default: $XDG_CONFIG_HOME/imgsel/data.json)
	#[arg(long, global = true, env = "IMGSEL_CONFIG")]
	config: Option<PathBuf>,

	/// Enable debug logging (RUST_LOG takes precedence)
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(flatten)]
	overrides: OverrideArgs,

	#[command(subcommand)]
	command: Command,
}

/// Per-invocation overrides of the stored settings; never persisted.
#[derive(Args, Debug)]
struct OverrideArgs {
	/// Google Custom Search API key
	#[arg(long, global = true, env = "IMGSEL_API_KEY", hide_env_values = true)]
	api_key: Option<String>,

	/// Search engine ID (cx)
	#[arg(long, global = true, env = "IMGSEL_SEARCH_ENGINE_ID")]
	search_engine_id: Option<String>,

	/// Number of results to show
	#[arg(long, global = true, env = "IMGSEL_RESULT_COUNT")]
	result_count: Option<String>,
}

impl From<OverrideArgs> for SettingsOverrides {
	fn from(args: OverrideArgs) -> Self {
		Self {
			result_count: args.result_count,
			api_key: args.api_key,
			search_engine_id: args.search_engine_id,
		}
	}
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Open the image selector for a note and insert the chosen image at the caret
	Open {
		/// Markdown note to edit
		note: PathBuf,

		/// Caret line, zero-based (default: end of note)
		#[arg(long)]
		line: Option<usize>,

		/// Caret character within the line, zero-based
		#[arg(long, requires = "line")]
		ch: Option<usize>,

		/// Search for this instead of the note title
		#[arg(long)]
		term: Option<String>,
	},

	/// Print image links for a term without opening the selector
	Search {
		term: String,

		/// How many links to print (default: the stored result count)
		#[arg(long)]
		count: Option<usize>,
	},

	/// Show or change the stored settings
	Settings {
		#[command(subcommand)]
		action: SettingsAction,
	},

	/// Show build information
	Version,
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
	/// Print the current settings (API key masked)
	Show,

	/// Set one field: result-count, api-key, search-engine-id (or cx)
	Set { field: String, value: String },
}

fn init_tracing(verbose: bool) {
	let default = if verbose { "debug" } else { "warn" };
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
		)
		.with_writer(std::io::stderr)
		.init();
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	let file_store = match cli.config {
		Some(path) => JsonFileStore::new(path),
		None => JsonFileStore::at_default_location()?,
	};
	debug!(path = %file_store.path().display(), "using settings file");

	match cli.command {
		Command::Open {
			note,
			line,
			ch,
			term,
		} => {
			let store = LayeredStore::new(file_store, cli.overrides.into());
			let cursor = line.map(|line| CursorPosition::new(line, ch.unwrap_or(0)));
			open(Arc::new(store), note, cursor, term).await
		}
		Command::Search { term, count } => {
			let store = LayeredStore::new(file_store, cli.overrides.into());
			search(&store, term, count).await
		}
		Command::Settings { action } => settings(Arc::new(file_store), action).await,
		Command::Version => {
			println!("{}", version::format_version_info());
			Ok(())
		}
	}
}

async fn open(
	store: Arc<dyn SettingsStore>,
	note: PathBuf,
	cursor: Option<CursorPosition>,
	term: Option<String>,
) -> Result<()> {
	let mut plugin = ImageSelectorPlugin::new(store, Arc::new(CseClient::new()));
	plugin.activate();

	let mut command = plugin.open_image_selector()?;
	if let Some(term) = term {
		command = command.with_term(term);
	}

	let mut workspace = FileWorkspace::open(&note, cursor).await?;
	let mut presenter = TerminalPresenter::new();
	let notices = StderrNotices;

	let outcome = command
		.run(CommandContext {
			workspace: &mut workspace,
			presenter: &mut presenter,
			notices: &notices,
		})
		.await;

	plugin.deactivate();

	match outcome? {
		CommandOutcome::Inserted { link, at } => {
			workspace.save_if_modified().await?;
			println!("Inserted {link} at {}:{}", at.line, at.ch);
		}
		CommandOutcome::Dismissed | CommandOutcome::NoImages => {}
	}
	Ok(())
}

async fn search(store: &dyn SettingsStore, term: String, count: Option<usize>) -> Result<()> {
	let settings = load_settings(store)
		.await
		.context("failed to load settings")?;
	let request = ImageSearchRequest::new(
		term,
		count.unwrap_or(settings.result_count as usize),
		settings.api_key,
		settings.search_engine_id,
	);

	let results = CseClient::new()
		.search_images(&request)
		.await
		.with_context(|| format!("image search for '{}' failed", request.term))?;

	for image in results {
		println!("{}", image.link);
	}
	Ok(())
}

async fn settings(store: Arc<dyn SettingsStore>, action: SettingsAction) -> Result<()> {
	let panel = SettingsPanel::new(store);

	let current = match action {
		SettingsAction::Show => panel.current().await.context("failed to load settings")?,
		SettingsAction::Set { field, value } => panel
			.set(&field, &value)
			.await
			.with_context(|| format!("failed to set {field}"))?,
	};

	for field in panel.fields() {
		println!("{:<32} {}", field.name, field.display_value(&current));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn cli_definition_is_consistent() {
		Cli::command().debug_assert();
	}

	#[test]
	fn search_accepts_count() {
		let cli = Cli::try_parse_from(["imgsel", "search", "red panda", "--count", "3"]).unwrap();
		match cli.command {
			Command::Search { term, count } => {
				assert_eq!(term, "red panda");
				assert_eq!(count, Some(3));
			}
			other => panic!("unexpected command: {other:?}"),
		}
	}

	#[test]
	fn search_count_defaults_to_settings() {
		let cli = Cli::try_parse_from(["imgsel", "search", "sunset"]).unwrap();
		assert!(matches!(cli.command, Command::Search { count: None, .. }));
	}

	#[test]
	fn search_rejects_non_numeric_count() {
		assert!(Cli::try_parse_from(["imgsel", "search", "sunset", "--count", "many"]).is_err());
	}
}
