// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The "Open Image Selector" command.

use std::sync::Arc;

use imgsel_config::{load_settings, SettingsStore};
use imgsel_search_google_cse::ImageSearchRequest;
use tracing::{debug, info, instrument, warn};

use crate::notice::{self, Notices};
use crate::{image_embed, CommandError, CursorPosition, Editor, ImageSearch, Presenter, Selection};

/// Host side view of the open documents.
pub trait Workspace: Send {
	/// The note being edited, if any.
	fn active_note(&mut self) -> Option<ActiveNote<'_>>;
}

pub struct ActiveNote<'a> {
	/// Note name without extension; used as the search term.
	pub title: String,
	pub editor: &'a mut dyn Editor,
}

/// Host collaborators for one command invocation.
pub struct CommandContext<'a> {
	pub workspace: &'a mut dyn Workspace,
	pub presenter: &'a mut dyn Presenter,
	pub notices: &'a dyn Notices,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
	/// An embed for `link` was written at `at`.
	Inserted { link: String, at: CursorPosition },
	/// The overlay was closed without a choice.
	Dismissed,
	/// The search produced nothing; the overlay was never shown.
	NoImages,
}

pub struct OpenImageSelector {
	store: Arc<dyn SettingsStore>,
	search: Arc<dyn ImageSearch>,
	term: Option<String>,
}

impl OpenImageSelector {
	pub fn new(store: Arc<dyn SettingsStore>, search: Arc<dyn ImageSearch>) -> Self {
		Self {
			store,
			search,
			term: None,
		}
	}

	/// Search for `term` instead of the note title.
	pub fn with_term(mut self, term: impl Into<String>) -> Self {
		self.term = Some(term.into());
		self
	}

	/// Runs one search-and-select cycle against the active note.
	///
	/// The caret is read when the selection arrives, not when the overlay
	/// opens, so edits made while the overlay is shown move the insertion
	/// point with them.
	#[instrument(skip_all)]
	pub async fn run(&self, ctx: CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
		let Some(note) = ctx.workspace.active_note() else {
			warn!("command invoked without an active note");
			ctx.notices.notice(notice::NO_ACTIVE_NOTE);
			return Err(CommandError::NoActiveDocument);
		};

		let term = self.term.clone().unwrap_or_else(|| note.title.clone());
		let settings = load_settings(self.store.as_ref()).await?;
		debug!(term = %term, settings = ?settings, "searching images");

		let request = ImageSearchRequest::new(
			term.as_str(),
			settings.result_count as usize,
			settings.api_key,
			settings.search_engine_id,
		);
		let results = self.search.search(&request).await;

		if results.is_empty() {
			info!(term = %term, "no images to present");
			ctx.notices.notice(&notice::no_images_found(&term));
			return Ok(CommandOutcome::NoImages);
		}

		match ctx.presenter.present(&results).await? {
			Selection::Selected(image) => {
				let at = note.editor.cursor();
				note.editor.replace_range(&image_embed(&image.link), at);
				info!(link = %image.link, line = at.line, ch = at.ch, "inserted image embed");
				Ok(CommandOutcome::Inserted {
					link: image.link,
					at,
				})
			}
			Selection::Dismissed => {
				debug!("selection dismissed");
				Ok(CommandOutcome::Dismissed)
			}
		}
	}
}
