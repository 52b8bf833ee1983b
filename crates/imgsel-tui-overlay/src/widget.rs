// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use imgsel_core::ImageResult;
use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::{Modifier, Style},
	text::{Line, Span},
	widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::layout::{overlay_layout, CLOSE_LABEL};

pub const DEFAULT_TITLE: &str = " Select an image ";

pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
	let width = UnicodeWidthStr::width(s);
	if width <= max_width {
		return s.to_string();
	}
	if max_width == 0 {
		return String::new();
	}
	if max_width == 1 {
		return "…".to_string();
	}

	let mut result = String::new();
	let mut current_width = 0;
	let target_width = max_width.saturating_sub(1);

	for c in s.chars() {
		let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
		if current_width + char_width > target_width {
			break;
		}
		result.push(c);
		current_width += char_width;
	}
	result.push('…');
	result
}

/// Centered box listing one clickable row per result and a close control.
///
/// Rows scroll from `offset` when they outnumber the available height.
#[derive(Debug, Clone)]
pub struct ImageOverlay<'a> {
	results: &'a [ImageResult],
	title: &'a str,
	style: Style,
	offset: usize,
}

impl<'a> ImageOverlay<'a> {
	pub fn new(results: &'a [ImageResult]) -> Self {
		Self {
			results,
			title: DEFAULT_TITLE,
			style: Style::default(),
			offset: 0,
		}
	}

	pub fn title(mut self, title: &'a str) -> Self {
		self.title = title;
		self
	}

	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	pub fn offset(mut self, offset: usize) -> Self {
		self.offset = offset;
		self
	}
}

impl Widget for ImageOverlay<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.height == 0 || area.width == 0 {
			return;
		}

		let layout = overlay_layout(area, self.results.len(), self.offset);

		Clear.render(layout.frame, buf);
		Block::default()
			.borders(Borders::ALL)
			.title(self.title)
			.style(self.style)
			.render(layout.frame, buf);

		for row in &layout.rows {
			let Some(image) = self.results.get(row.index) else {
				continue;
			};
			let marker = format!("{:>2}. ", row.index + 1);
			let available = (row.area.width as usize).saturating_sub(marker.len());
			let link = truncate_with_ellipsis(&image.link, available);
			let line = Line::from(vec![
				Span::styled(marker, self.style.add_modifier(Modifier::DIM)),
				Span::styled(link, self.style.add_modifier(Modifier::UNDERLINED)),
			]);
			buf.set_line(row.area.x, row.area.y, &line, row.area.width);
		}

		if let Some(track) = layout.scrollbar {
			render_scrollbar(track, layout.offset, self.results.len(), self.style, buf);
		}

		if layout.close.width > 0 {
			buf.set_stringn(
				layout.close.x,
				layout.close.y,
				CLOSE_LABEL,
				layout.close.width as usize,
				self.style.add_modifier(Modifier::REVERSED),
			);
		}
	}
}

fn render_scrollbar(track: Rect, offset: usize, total: usize, style: Style, buf: &mut Buffer) {
	let viewport = track.height as usize;
	if viewport == 0 || total <= viewport {
		return;
	}

	let thumb_height = ((viewport * viewport) / total).max(1);
	let max_offset = total - viewport;
	let thumb_offset = (offset * (viewport - thumb_height)) / max_offset;

	for i in 0..viewport {
		let symbol = if i >= thumb_offset && i < thumb_offset + thumb_height {
			"█"
		} else {
			"░"
		};
		buf[(track.x, track.y + i as u16)]
			.set_symbol(symbol)
			.set_style(style);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_truncate_with_ellipsis() {
		assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
		assert_eq!(truncate_with_ellipsis("hello world", 8), "hello w…");
		assert_eq!(truncate_with_ellipsis("hello", 0), "");
		assert_eq!(truncate_with_ellipsis("hello", 1), "…");
	}
}
