// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Alignment and width baked into every inserted embed.
pub const EMBED_ALIGN: &str = "right";
pub const EMBED_WIDTH: u32 = 150;

/// Markdown inserted for a chosen image: `![right|150](<link>)` plus a newline.
pub fn image_embed(link: &str) -> String {
	format!("![{EMBED_ALIGN}|{EMBED_WIDTH}]({link})\n")
}
