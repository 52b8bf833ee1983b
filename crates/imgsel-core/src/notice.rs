// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// User-visible, fire-and-forget messages shown by the host.
pub trait Notices: Send + Sync {
	fn notice(&self, message: &str);
}

pub const NO_ACTIVE_NOTE: &str = "No active note.";

pub fn no_images_found(term: &str) -> String {
	format!("No images found for: {term}")
}
