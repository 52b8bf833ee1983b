// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use imgsel_search_google_cse::ImageResult;

use crate::PresenterError;

/// What the user did with a displayed result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
	Selected(ImageResult),
	Dismissed,
}

/// A transient surface that shows results and waits for one choice.
///
/// Implementations must be torn down (removed from the screen) before
/// `present` returns, whatever the outcome. There is no timeout: `present`
/// waits for the user indefinitely.
#[async_trait]
pub trait Presenter: Send {
	async fn present(&mut self, results: &[ImageResult]) -> Result<Selection, PresenterError>;
}
