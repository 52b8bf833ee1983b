// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod input;
mod layout;
mod presenter;
mod scroll;
mod widget;

pub use input::handle_event;
pub use layout::{overlay_layout, Hit, OverlayLayout, ResultRow, CLOSE_LABEL};
pub use presenter::TerminalPresenter;
pub use scroll::ScrollState;
pub use widget::{truncate_with_ellipsis, ImageOverlay, DEFAULT_TITLE};
