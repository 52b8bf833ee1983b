// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Selection overlay lifecycle shared by every presenter.
//!
//! `Idle -> Displayed -> {Selected | Dismissed} -> Idle`
//!
//! Only a non-empty result set can be displayed. While displayed, exactly
//! one of `select` or `dismiss` takes effect; later input is ignored until
//! the overlay is torn down.

use imgsel_search_google_cse::ImageResult;
use tracing::debug;

use crate::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
	Idle,
	Displayed,
	Selected(usize),
	Dismissed,
}

#[derive(Debug, Clone)]
pub struct Overlay {
	state: OverlayState,
	results: Vec<ImageResult>,
}

impl Default for Overlay {
	fn default() -> Self {
		Self::new()
	}
}

impl Overlay {
	pub fn new() -> Self {
		Self {
			state: OverlayState::Idle,
			results: Vec::new(),
		}
	}

	pub fn state(&self) -> OverlayState {
		self.state
	}

	pub fn results(&self) -> &[ImageResult] {
		&self.results
	}

	pub fn is_displayed(&self) -> bool {
		self.state == OverlayState::Displayed
	}

	/// Whether the user has made their choice and the overlay awaits teardown.
	pub fn is_finished(&self) -> bool {
		matches!(
			self.state,
			OverlayState::Selected(_) | OverlayState::Dismissed
		)
	}

	/// Show `results`. Refused when idle is not the current state or the
	/// set is empty.
	pub fn open(&mut self, results: Vec<ImageResult>) -> bool {
		if self.state != OverlayState::Idle || results.is_empty() {
			return false;
		}
		debug!(count = results.len(), "overlay displayed");
		self.results = results;
		self.state = OverlayState::Displayed;
		true
	}

	/// Choose the result at `index`.
	pub fn select(&mut self, index: usize) -> bool {
		if !self.is_displayed() || index >= self.results.len() {
			return false;
		}
		debug!(index, "overlay selection");
		self.state = OverlayState::Selected(index);
		true
	}

	/// Close without choosing.
	pub fn dismiss(&mut self) -> bool {
		if !self.is_displayed() {
			return false;
		}
		debug!("overlay dismissed");
		self.state = OverlayState::Dismissed;
		true
	}

	/// Return to idle, yielding the outcome once a choice has been made.
	pub fn teardown(&mut self) -> Option<Selection> {
		let selection = match self.state {
			OverlayState::Selected(index) => {
				Some(Selection::Selected(self.results.swap_remove(index)))
			}
			OverlayState::Dismissed => Some(Selection::Dismissed),
			OverlayState::Idle | OverlayState::Displayed => None,
		};

		if selection.is_some() {
			self.results.clear();
			self.state = OverlayState::Idle;
		}
		selection
	}
}
