// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Vertical scroll position of the result list.
#[derive(Debug, Default, Clone)]
pub struct ScrollState {
	pub offset: usize,
	pub content_height: usize,
	pub viewport_height: usize,
}

impl ScrollState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn scroll_up(&mut self, amount: usize) {
		self.offset = self.offset.saturating_sub(amount);
	}

	pub fn scroll_down(&mut self, amount: usize) {
		let max = self.max_offset();
		self.offset = (self.offset + amount).min(max);
	}

	pub fn set_content_height(&mut self, height: usize) {
		self.content_height = height;
		self.offset = self.offset.min(self.max_offset());
	}

	pub fn set_viewport_height(&mut self, height: usize) {
		self.viewport_height = height;
		self.offset = self.offset.min(self.max_offset());
	}

	pub fn max_offset(&self) -> usize {
		self.content_height.saturating_sub(self.viewport_height)
	}

	pub fn scrollbar_position(&self) -> f32 {
		let max = self.max_offset();
		if max == 0 {
			0.0
		} else {
			self.offset as f32 / max as f32
		}
	}
}
