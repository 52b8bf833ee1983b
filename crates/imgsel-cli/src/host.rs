// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The terminal host: a Markdown file on disk stands in for the active note.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use imgsel_core::{ActiveNote, CursorPosition, Editor, Notices, TextBuffer, Workspace};
use tracing::debug;

/// Notices go to stderr so stdout stays machine-readable.
pub struct StderrNotices;

impl Notices for StderrNotices {
	fn notice(&self, message: &str) {
		eprintln!("{message}");
	}
}

struct OpenNote {
	path: PathBuf,
	title: String,
	original: String,
	buffer: TextBuffer,
}

/// Workspace with at most one note open.
pub struct FileWorkspace {
	note: Option<OpenNote>,
}

impl FileWorkspace {
	/// Open `path` with the caret at `cursor`, or at the end of the file.
	///
	/// A path that does not exist leaves the workspace without an active note.
	pub async fn open(path: &Path, cursor: Option<CursorPosition>) -> Result<Self> {
		let text = match tokio::fs::read_to_string(path).await {
			Ok(text) => text,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "note does not exist");
				return Ok(Self { note: None });
			}
			Err(e) => {
				return Err(e).with_context(|| format!("failed to read note {}", path.display()))
			}
		};

		let title = note_title(path);
		let mut buffer = TextBuffer::with_cursor_at_end(text.clone());
		if let Some(cursor) = cursor {
			buffer.set_cursor(cursor);
		}

		debug!(path = %path.display(), title = %title, cursor = ?buffer.cursor(), "opened note");
		Ok(Self {
			note: Some(OpenNote {
				path: path.to_path_buf(),
				title,
				original: text,
				buffer,
			}),
		})
	}

	/// Writes the note back if the command changed it. Returns whether it did.
	pub async fn save_if_modified(&self) -> Result<bool> {
		let Some(note) = &self.note else {
			return Ok(false);
		};
		if note.buffer.text() == note.original {
			return Ok(false);
		}

		tokio::fs::write(&note.path, note.buffer.text())
			.await
			.with_context(|| format!("failed to write note {}", note.path.display()))?;
		debug!(path = %note.path.display(), "saved note");
		Ok(true)
	}
}

impl Workspace for FileWorkspace {
	fn active_note(&mut self) -> Option<ActiveNote<'_>> {
		self.note.as_mut().map(|note| ActiveNote {
			title: note.title.clone(),
			editor: &mut note.buffer as &mut dyn Editor,
		})
	}
}

/// Note title as the host shows it: the file name without extension.
fn note_title(path: &Path) -> String {
	path.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.unwrap_or_default()
}
