// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Image selector plugin core.
//!
//! Searches images for the active note's title, shows them through a
//! [`Presenter`], and writes the chosen one into the note as a Markdown
//! embed at the caret. Everything the hosting application owns (the
//! editor, the notice surface, the settings storage, the overlay UI) is
//! reached through a trait so the same flow can run behind a terminal,
//! a web view or a native shell.

pub mod command;
pub mod editor;
pub mod embed;
pub mod error;
pub mod notice;
pub mod overlay;
pub mod plugin;
pub mod presenter;
pub mod search;
pub mod settings_panel;

pub use command::{ActiveNote, CommandContext, CommandOutcome, OpenImageSelector, Workspace};
pub use editor::{CursorPosition, Editor, TextBuffer};
pub use embed::image_embed;
pub use error::{CommandError, PresenterError};
pub use notice::Notices;
pub use overlay::{Overlay, OverlayState};
pub use plugin::{CommandSpec, ImageSelectorPlugin, OPEN_IMAGE_SELECTOR};
pub use presenter::{Presenter, Selection};
pub use search::ImageSearch;
pub use settings_panel::{SettingField, SettingsPanel};

pub use imgsel_search_google_cse::{ImageResult, ImageSearchRequest};
