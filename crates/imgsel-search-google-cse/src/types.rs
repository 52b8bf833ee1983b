// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request and result types for image search.

use serde::{Deserialize, Serialize};

/// A single image hit. Only the image URL is consumed from the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
	pub link: String,
}

impl ImageResult {
	pub fn new(link: impl Into<String>) -> Self {
		Self { link: link.into() }
	}
}

/// Parameters for one image search call.
///
/// The credentials are opaque and are not validated locally; an empty key
/// or engine ID is sent as-is and rejected upstream.
#[derive(Clone)]
pub struct ImageSearchRequest {
	pub term: String,
	pub count: usize,
	pub api_key: String,
	pub search_engine_id: String,
}

impl ImageSearchRequest {
	pub fn new(
		term: impl Into<String>,
		count: usize,
		api_key: impl Into<String>,
		search_engine_id: impl Into<String>,
	) -> Self {
		Self {
			term: term.into(),
			count,
			api_key: api_key.into(),
			search_engine_id: search_engine_id.into(),
		}
	}
}

impl std::fmt::Debug for ImageSearchRequest {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ImageSearchRequest")
			.field("term", &self.term)
			.field("count", &self.count)
			.field("api_key", &"[REDACTED]")
			.field("search_engine_id", &self.search_engine_id)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn debug_hides_api_key() {
		let request = ImageSearchRequest::new("sunset", 3, "secret-key", "cx-1");
		let rendered = format!("{request:?}");
		assert!(!rendered.contains("secret-key"));
		assert!(rendered.contains("sunset"));
		assert!(rendered.contains("cx-1"));
	}
}
