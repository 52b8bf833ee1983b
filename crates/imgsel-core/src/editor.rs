// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The document editing seam.

/// Caret position as zero-based line and character within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct CursorPosition {
	pub line: usize,
	pub ch: usize,
}

impl CursorPosition {
	pub fn new(line: usize, ch: usize) -> Self {
		Self { line, ch }
	}
}

/// Editor of the active document.
pub trait Editor: Send {
	/// Current caret position.
	fn cursor(&self) -> CursorPosition;

	/// Insert `text` at `at` as one edit.
	fn replace_range(&mut self, text: &str, at: CursorPosition);
}

/// A plain-text document with a caret.
///
/// Positions past the end of a line clamp to the line end; lines past the
/// end of the document clamp to the end of the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
	text: String,
	cursor: CursorPosition,
}

impl TextBuffer {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			cursor: CursorPosition::default(),
		}
	}

	/// Buffer with the caret placed after the last character.
	pub fn with_cursor_at_end(text: impl Into<String>) -> Self {
		let mut buffer = Self::new(text);
		buffer.cursor = buffer.end_position();
		buffer
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn into_text(self) -> String {
		self.text
	}

	pub fn set_cursor(&mut self, cursor: CursorPosition) {
		self.cursor = cursor;
	}

	pub fn end_position(&self) -> CursorPosition {
		let line = self.text.matches('\n').count();
		let last_line_start = self.text.rfind('\n').map_or(0, |nl| nl + 1);
		let ch = self.text[last_line_start..].chars().count();
		CursorPosition { line, ch }
	}

	/// Byte offset of a position after clamping.
	pub fn offset_of(&self, pos: CursorPosition) -> usize {
		let mut line_start = 0;
		for _ in 0..pos.line {
			match self.text[line_start..].find('\n') {
				Some(nl) => line_start += nl + 1,
				None => return self.text.len(),
			}
		}

		let line_end = self.text[line_start..]
			.find('\n')
			.map_or(self.text.len(), |nl| line_start + nl);

		self.text[line_start..line_end]
			.char_indices()
			.nth(pos.ch)
			.map_or(line_end, |(idx, _)| line_start + idx)
	}
}

impl Editor for TextBuffer {
	fn cursor(&self) -> CursorPosition {
		self.cursor
	}

	fn replace_range(&mut self, text: &str, at: CursorPosition) {
		let offset = self.offset_of(at);
		self.text.insert_str(offset, text);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn inserts_at_line_and_char() {
		let mut buffer = TextBuffer::new("# Title\nbody\n");
		buffer.replace_range("X", CursorPosition::new(1, 2));
		assert_eq!(buffer.text(), "# Title\nboXdy\n");
	}

	#[test]
	fn char_past_line_end_clamps_to_line_end() {
		let mut buffer = TextBuffer::new("ab\ncd");
		buffer.replace_range("!", CursorPosition::new(0, 40));
		assert_eq!(buffer.text(), "ab!\ncd");
	}

	#[test]
	fn line_past_document_end_clamps_to_text_end() {
		let mut buffer = TextBuffer::new("ab\ncd");
		buffer.replace_range("!", CursorPosition::new(9, 0));
		assert_eq!(buffer.text(), "ab\ncd!");
	}

	#[test]
	fn positions_count_chars_not_bytes() {
		let mut buffer = TextBuffer::new("año\n");
		buffer.replace_range("|", CursorPosition::new(0, 2));
		assert_eq!(buffer.text(), "añ|o\n");
	}

	#[test]
	fn end_position_follows_trailing_newline() {
		assert_eq!(TextBuffer::new("").end_position(), CursorPosition::new(0, 0));
		assert_eq!(TextBuffer::new("ab").end_position(), CursorPosition::new(0, 2));
		assert_eq!(TextBuffer::new("ab\n").end_position(), CursorPosition::new(1, 0));
		assert_eq!(
			TextBuffer::with_cursor_at_end("a\nbcd").cursor(),
			CursorPosition::new(1, 3)
		);
	}

	#[test]
	fn insertion_does_not_move_the_caret() {
		let mut buffer = TextBuffer::new("abc");
		buffer.set_cursor(CursorPosition::new(0, 1));
		buffer.replace_range("zz", CursorPosition::new(0, 0));
		assert_eq!(buffer.cursor(), CursorPosition::new(0, 1));
	}

	proptest! {
		#[test]
		fn insertion_preserves_surrounding_text(
			text in "[a-zé\n]{0,40}",
			line in 0usize..6,
			ch in 0usize..12,
		) {
			let mut buffer = TextBuffer::new(text.clone());
			let offset = buffer.offset_of(CursorPosition::new(line, ch));
			buffer.replace_range("<>", CursorPosition::new(line, ch));
			prop_assert_eq!(&buffer.text()[..offset], &text[..offset]);
			prop_assert_eq!(&buffer.text()[offset + 2..], &text[offset..]);
		}
	}
}
