// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Geometry of the overlay, shared by rendering and mouse hit-testing.

use ratatui::layout::{Position, Rect};

pub const CLOSE_LABEL: &str = "[ Close ]";

const WIDTH_PERCENT: u32 = 80;
const HEIGHT_PERCENT: u32 = 80;
const MIN_WIDTH: u16 = 24;
const MIN_HEIGHT: u16 = 5;
// top border, blank spacer, close row, bottom border
const CHROME_ROWS: u16 = 4;

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
	Result(usize),
	Close,
}

/// A result row currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRow {
	pub index: usize,
	pub area: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLayout {
	/// Bordered box, centered in the screen.
	pub frame: Rect,
	/// Region the result rows scroll within.
	pub list: Rect,
	/// Visible rows, top to bottom.
	pub rows: Vec<ResultRow>,
	/// Scroll offset after clamping to the result count.
	pub offset: usize,
	/// Track on the right edge of `list`, present only when results overflow.
	pub scrollbar: Option<Rect>,
	/// Pinned below the list regardless of scrolling.
	pub close: Rect,
}

impl OverlayLayout {
	pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
		let pos = Position::new(column, row);
		if self.close.contains(pos) {
			return Some(Hit::Close);
		}
		self.rows
			.iter()
			.find(|r| r.area.contains(pos))
			.map(|r| Hit::Result(r.index))
	}

	/// Number of result rows that fit at once.
	pub fn viewport(&self) -> usize {
		self.list.height as usize
	}
}

fn percent(value: u16, pct: u32) -> u16 {
	(u32::from(value) * pct / 100) as u16
}

/// Lay out `count` results inside `area`, starting at result `offset`.
///
/// When the results do not all fit, the list scrolls and a scrollbar track
/// takes the rightmost column of the list.
pub fn overlay_layout(area: Rect, count: usize, offset: usize) -> OverlayLayout {
	let width = percent(area.width, WIDTH_PERCENT).max(area.width.min(MIN_WIDTH));
	let wanted = u16::try_from(count)
		.unwrap_or(u16::MAX)
		.saturating_add(CHROME_ROWS);
	let max_height = percent(area.height, HEIGHT_PERCENT).max(area.height.min(MIN_HEIGHT));
	let height = wanted.min(max_height);

	let frame = Rect::new(
		area.x + (area.width - width) / 2,
		area.y + (area.height - height) / 2,
		width,
		height,
	);
	let inner = Rect::new(
		frame.x.saturating_add(1),
		frame.y.saturating_add(1),
		frame.width.saturating_sub(2),
		frame.height.saturating_sub(2),
	);

	if inner.width == 0 || inner.height == 0 {
		return OverlayLayout {
			frame,
			list: Rect::new(inner.x, inner.y, 0, 0),
			rows: Vec::new(),
			offset: 0,
			scrollbar: None,
			close: Rect::new(frame.x, frame.y, 0, 0),
		};
	}

	let close_y = inner.y + inner.height - 1;
	let close_width = (CLOSE_LABEL.len() as u16).min(inner.width);
	let close = Rect::new(
		inner.x + (inner.width - close_width) / 2,
		close_y,
		close_width,
		1,
	);

	// Keep a spacer row above the close control when there is room.
	let list_end = if inner.height >= 3 { close_y - 1 } else { close_y };
	let list = Rect::new(inner.x, inner.y, inner.width, list_end - inner.y);

	let viewport = list.height as usize;
	let overflows = viewport > 0 && count > viewport;
	let offset = offset.min(count.saturating_sub(viewport));
	let row_width = if overflows && list.width > 1 {
		list.width - 1
	} else {
		list.width
	};

	let rows = (offset..count)
		.take(viewport)
		.enumerate()
		.map(|(slot, index)| ResultRow {
			index,
			area: Rect::new(list.x, list.y + slot as u16, row_width, 1),
		})
		.collect();

	let scrollbar = (overflows && list.width > 1)
		.then(|| Rect::new(list.x + list.width - 1, list.y, 1, list.height));

	OverlayLayout {
		frame,
		list,
		rows,
		offset,
		scrollbar,
		close,
	}
}
