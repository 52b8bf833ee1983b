// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use imgsel_search_google_cse::{CseClient, ImageResult, ImageSearchRequest};

/// Image search as seen by the command: any failure is an empty list.
#[async_trait]
pub trait ImageSearch: Send + Sync {
	async fn search(&self, request: &ImageSearchRequest) -> Vec<ImageResult>;
}

#[async_trait]
impl ImageSearch for CseClient {
	async fn search(&self, request: &ImageSearchRequest) -> Vec<ImageResult> {
		CseClient::search(self, request).await
	}
}
