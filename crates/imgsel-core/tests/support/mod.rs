// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use imgsel_core::{
	ActiveNote, CursorPosition, Editor, ImageResult, ImageSearch, ImageSearchRequest, Notices,
	Presenter, PresenterError, Selection, TextBuffer, Workspace,
};

pub fn links(n: usize) -> Vec<ImageResult> {
	(0..n)
		.map(|i| ImageResult::new(format!("https://img.example/{i}.png")))
		.collect()
}

/// Search double that returns the leading `count` of a fixed list.
pub struct FakeSearch {
	available: Vec<ImageResult>,
	pub requests: Mutex<Vec<ImageSearchRequest>>,
}

impl FakeSearch {
	pub fn new(available: Vec<ImageResult>) -> Self {
		Self {
			available,
			requests: Mutex::new(Vec::new()),
		}
	}

	pub fn requests(&self) -> Vec<ImageSearchRequest> {
		self.requests.lock().unwrap().clone()
	}
}

#[async_trait]
impl ImageSearch for FakeSearch {
	async fn search(&self, request: &ImageSearchRequest) -> Vec<ImageResult> {
		self.requests.lock().unwrap().push(request.clone());
		self.available.iter().take(request.count).cloned().collect()
	}
}

pub enum Script {
	Click(usize),
	Close,
}

/// Presenter that replays one user action.
pub struct ScriptedPresenter {
	script: Script,
	pub shown: Vec<Vec<ImageResult>>,
	before_choice: Option<Box<dyn FnMut() + Send>>,
}

impl ScriptedPresenter {
	pub fn new(script: Script) -> Self {
		Self {
			script,
			shown: Vec::new(),
			before_choice: None,
		}
	}

	/// Run `f` while the overlay is up, before the user acts.
	pub fn while_open(mut self, f: impl FnMut() + Send + 'static) -> Self {
		self.before_choice = Some(Box::new(f));
		self
	}
}

#[async_trait]
impl Presenter for ScriptedPresenter {
	async fn present(&mut self, results: &[ImageResult]) -> Result<Selection, PresenterError> {
		self.shown.push(results.to_vec());
		if let Some(f) = self.before_choice.as_mut() {
			f();
		}
		Ok(match self.script {
			Script::Click(index) => Selection::Selected(results[index].clone()),
			Script::Close => Selection::Dismissed,
		})
	}
}

#[derive(Default)]
pub struct RecordingNotices {
	messages: Mutex<Vec<String>>,
}

impl RecordingNotices {
	pub fn messages(&self) -> Vec<String> {
		self.messages.lock().unwrap().clone()
	}
}

impl Notices for RecordingNotices {
	fn notice(&self, message: &str) {
		self.messages.lock().unwrap().push(message.to_string());
	}
}

/// Editor whose buffer can also be touched from elsewhere (e.g. while the
/// overlay is open).
#[derive(Clone, Default)]
pub struct SharedEditor(pub Arc<Mutex<TextBuffer>>);

impl SharedEditor {
	pub fn new(buffer: TextBuffer) -> Self {
		Self(Arc::new(Mutex::new(buffer)))
	}

	pub fn text(&self) -> String {
		self.0.lock().unwrap().text().to_string()
	}
}

impl Editor for SharedEditor {
	fn cursor(&self) -> CursorPosition {
		self.0.lock().unwrap().cursor()
	}

	fn replace_range(&mut self, text: &str, at: CursorPosition) {
		self.0.lock().unwrap().replace_range(text, at);
	}
}

pub struct NoteWorkspace<E: Editor> {
	pub title: String,
	pub editor: Option<E>,
}

impl<E: Editor> NoteWorkspace<E> {
	pub fn open(title: &str, editor: E) -> Self {
		Self {
			title: title.to_string(),
			editor: Some(editor),
		}
	}

	pub fn empty() -> Self {
		Self {
			title: String::new(),
			editor: None,
		}
	}
}

impl<E: Editor + 'static> Workspace for NoteWorkspace<E> {
	fn active_note(&mut self) -> Option<ActiveNote<'_>> {
		let title = self.title.clone();
		self.editor.as_mut().map(|editor| ActiveNote {
			title,
			editor: editor as &mut dyn Editor,
		})
	}
}
