// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Terminal-backed [`Presenter`].

use std::io;

use async_trait::async_trait;
use crossterm::{
	event::{self, DisableMouseCapture, EnableMouseCapture},
	execute,
	terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use imgsel_core::{ImageResult, Overlay, Presenter, PresenterError, Selection};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, warn};

use crate::{handle_event, overlay_layout, ImageOverlay, ScrollState, DEFAULT_TITLE};

/// Shows results on the alternate screen and waits for a click.
///
/// The terminal is restored before `present` returns, on every path.
#[derive(Debug, Clone)]
pub struct TerminalPresenter {
	title: String,
}

impl Default for TerminalPresenter {
	fn default() -> Self {
		Self::new()
	}
}

impl TerminalPresenter {
	pub fn new() -> Self {
		Self {
			title: DEFAULT_TITLE.to_string(),
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}
}

#[async_trait]
impl Presenter for TerminalPresenter {
	async fn present(&mut self, results: &[ImageResult]) -> Result<Selection, PresenterError> {
		let results = results.to_vec();
		let title = self.title.clone();

		tokio::task::spawn_blocking(move || run_overlay(results, &title))
			.await
			.map_err(|e| {
				warn!(error = %e, "overlay task ended abnormally");
				PresenterError::Closed
			})?
	}
}

/// Raw mode, alternate screen and mouse capture for as long as it lives.
struct TerminalGuard;

impl TerminalGuard {
	fn enter() -> io::Result<Self> {
		enable_raw_mode()?;
		if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture) {
			let _ = disable_raw_mode();
			return Err(e);
		}
		Ok(Self)
	}
}

impl Drop for TerminalGuard {
	fn drop(&mut self) {
		let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
		let _ = disable_raw_mode();
	}
}

fn run_overlay(results: Vec<ImageResult>, title: &str) -> Result<Selection, PresenterError> {
	let mut overlay = Overlay::new();
	if !overlay.open(results) {
		return Ok(Selection::Dismissed);
	}

	let _guard = TerminalGuard::enter()?;
	let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

	let mut scroll = ScrollState::new();

	loop {
		let mut layout = None;
		terminal.draw(|frame| {
			let area = frame.area();
			let computed = overlay_layout(area, overlay.results().len(), scroll.offset);
			// a resize can shrink the range the offset may take
			scroll.offset = computed.offset;
			frame.render_widget(
				ImageOverlay::new(overlay.results())
					.title(title)
					.offset(computed.offset),
				area,
			);
			layout = Some(computed);
		})?;

		let event = event::read()?;
		if let Some(layout) = layout.as_ref() {
			handle_event(&mut overlay, layout, &mut scroll, &event);
		}

		if let Some(selection) = overlay.teardown() {
			debug!(?selection, "overlay closed");
			return Ok(selection);
		}
	}
}
