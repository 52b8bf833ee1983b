// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use imgsel_core::Overlay;

use crate::layout::{Hit, OverlayLayout};
use crate::scroll::ScrollState;

/// Apply one terminal event to the overlay. Returns true when it changed state
/// or scrolled the list.
///
/// Left click on a row selects it, left click on the close control (or Esc)
/// dismisses. The mouse wheel scrolls the rows one at a time. Everything else
/// is ignored.
pub fn handle_event(
	overlay: &mut Overlay,
	layout: &OverlayLayout,
	scroll: &mut ScrollState,
	event: &Event,
) -> bool {
	match event {
		Event::Mouse(mouse)
			if matches!(mouse.kind, MouseEventKind::ScrollDown | MouseEventKind::ScrollUp) =>
		{
			scroll.set_viewport_height(layout.viewport());
			scroll.set_content_height(overlay.results().len());
			let before = scroll.offset;
			if mouse.kind == MouseEventKind::ScrollDown {
				scroll.scroll_down(1);
			} else {
				scroll.scroll_up(1);
			}
			scroll.offset != before
		}
		Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
			match layout.hit(mouse.column, mouse.row) {
				Some(Hit::Result(index)) => overlay.select(index),
				Some(Hit::Close) => overlay.dismiss(),
				None => false,
			}
		}
		Event::Key(key) if key.kind == KeyEventKind::Press && key.code == KeyCode::Esc => {
			overlay.dismiss()
		}
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};
	use imgsel_core::{ImageResult, OverlayState};
	use ratatui::layout::Rect;

	use crate::overlay_layout;

	fn click(column: u16, row: u16) -> Event {
		Event::Mouse(MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column,
			row,
			modifiers: KeyModifiers::NONE,
		})
	}

	fn wheel(kind: MouseEventKind) -> Event {
		Event::Mouse(MouseEvent {
			kind,
			column: 40,
			row: 4,
			modifiers: KeyModifiers::NONE,
		})
	}

	fn overlay_with(n: usize) -> Overlay {
		let mut overlay = Overlay::new();
		overlay.open(
			(0..n)
				.map(|i| ImageResult::new(format!("https://img.example/{i}.png")))
				.collect(),
		);
		overlay
	}

	fn open(n: usize) -> (Overlay, OverlayLayout, ScrollState) {
		(
			overlay_with(n),
			overlay_layout(Rect::new(0, 0, 100, 40), n, 0),
			ScrollState::new(),
		)
	}

	#[test]
	fn click_on_row_selects_it() {
		let (mut overlay, layout, mut scroll) = open(3);
		let row = layout.rows[1].area;
		assert!(handle_event(
			&mut overlay,
			&layout,
			&mut scroll,
			&click(row.x + 2, row.y)
		));
		assert_eq!(overlay.state(), OverlayState::Selected(1));
	}

	#[test]
	fn click_on_close_dismisses() {
		let (mut overlay, layout, mut scroll) = open(3);
		assert!(handle_event(
			&mut overlay,
			&layout,
			&mut scroll,
			&click(layout.close.x, layout.close.y)
		));
		assert_eq!(overlay.state(), OverlayState::Dismissed);
	}

	#[test]
	fn escape_dismisses() {
		let (mut overlay, layout, mut scroll) = open(2);
		let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
		assert!(handle_event(&mut overlay, &layout, &mut scroll, &esc));
		assert_eq!(overlay.state(), OverlayState::Dismissed);
	}

	#[test]
	fn other_input_is_ignored() {
		let (mut overlay, layout, mut scroll) = open(2);
		let down = Event::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
		let enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
		let right_click = Event::Mouse(MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Right),
			column: layout.rows[0].area.x,
			row: layout.rows[0].area.y,
			modifiers: KeyModifiers::NONE,
		});

		assert!(!handle_event(&mut overlay, &layout, &mut scroll, &down));
		assert!(!handle_event(&mut overlay, &layout, &mut scroll, &enter));
		assert!(!handle_event(&mut overlay, &layout, &mut scroll, &right_click));
		assert!(!handle_event(&mut overlay, &layout, &mut scroll, &click(0, 0)));
		assert!(overlay.is_displayed());
	}

	#[test]
	fn wheel_brings_hidden_result_into_reach() {
		let area = Rect::new(0, 0, 80, 10);
		let mut overlay = overlay_with(5);
		let mut scroll = ScrollState::new();

		let layout = overlay_layout(area, 5, scroll.offset);
		assert_eq!(layout.rows.len(), 4);
		assert!(layout.rows.iter().all(|r| r.index != 4));

		let down = wheel(MouseEventKind::ScrollDown);
		assert!(handle_event(&mut overlay, &layout, &mut scroll, &down));
		assert_eq!(scroll.offset, 1);
		// already at the bottom
		assert!(!handle_event(&mut overlay, &layout, &mut scroll, &down));

		let layout = overlay_layout(area, 5, scroll.offset);
		let last = layout.rows[3].area;
		assert!(handle_event(
			&mut overlay,
			&layout,
			&mut scroll,
			&click(last.x + 1, last.y)
		));
		assert_eq!(overlay.state(), OverlayState::Selected(4));
	}

	#[test]
	fn every_result_is_clickable_after_scrolling() {
		let area = Rect::new(0, 0, 80, 10);
		let total = 9;

		for target in 0..total {
			let mut overlay = overlay_with(total);
			let mut scroll = ScrollState::new();
			let mut layout = overlay_layout(area, total, scroll.offset);
			while !layout.rows.iter().any(|r| r.index == target) {
				let down = wheel(MouseEventKind::ScrollDown);
				assert!(handle_event(&mut overlay, &layout, &mut scroll, &down));
				layout = overlay_layout(area, total, scroll.offset);
			}

			let Some(row) = layout.rows.iter().find(|r| r.index == target) else {
				unreachable!("loop exits once the row is visible");
			};
			let at = click(row.area.x, row.area.y);
			assert!(handle_event(&mut overlay, &layout, &mut scroll, &at));
			assert_eq!(overlay.state(), OverlayState::Selected(target));
		}
	}

	#[test]
	fn wheel_up_at_top_is_ignored() {
		let (mut overlay, layout, mut scroll) = open(3);
		let up = wheel(MouseEventKind::ScrollUp);
		assert!(!handle_event(&mut overlay, &layout, &mut scroll, &up));
		assert!(overlay.is_displayed());
	}
}
