// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Google Custom Search JSON API client implementation.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, instrument, trace, warn};

use crate::error::CseError;
use crate::types::{ImageResult, ImageSearchRequest};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const SEARCH_TYPE_IMAGE: &str = "image";

/// Client for the Google Custom Search JSON API, restricted to image results.
#[derive(Debug, Clone)]
pub struct CseClient {
	http_client: Client,
	base_url: String,
}

#[derive(Debug, Deserialize)]
struct CseApiResponse {
	items: Option<Vec<CseApiItem>>,
}

// Only the leading items that are kept need a link.
#[derive(Debug, Deserialize)]
struct CseApiItem {
	link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CseApiErrorEnvelope {
	error: CseApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct CseApiErrorBody {
	message: String,
}

impl CseClient {
	/// Creates a new client pointed at the public Google endpoint.
	pub fn new() -> Self {
		let http_client = imgsel_common_http::builder()
			.timeout(REQUEST_TIMEOUT)
			.build()
			.expect("Failed to create HTTP client");

		Self {
			http_client,
			base_url: DEFAULT_BASE_URL.to_string(),
		}
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Searches images and collapses every failure into an empty result.
	///
	/// The caller cannot tell "no matches" from a transport error or a
	/// rejected key; the cause is only visible in the logs. Use
	/// [`CseClient::search_images`] to see it.
	pub async fn search(&self, request: &ImageSearchRequest) -> Vec<ImageResult> {
		match self.search_images(request).await {
			Ok(results) => results,
			Err(e) => {
				error!(term = %request.term, error = %e, "Image search failed");
				Vec::new()
			}
		}
	}

	/// Searches images and returns at most `request.count` leading results,
	/// in response order.
	#[instrument(skip(self, request), fields(term = %request.term, count = request.count))]
	pub async fn search_images(
		&self,
		request: &ImageSearchRequest,
	) -> Result<Vec<ImageResult>, CseError> {
		if request.term.is_empty() {
			return Err(CseError::EmptyQuery);
		}

		debug!(url = %self.base_url, "Sending image search request to Google CSE");

		let response = self
			.http_client
			.get(&self.base_url)
			.query(&[
				("q", request.term.as_str()),
				("cx", request.search_engine_id.as_str()),
				("key", request.api_key.as_str()),
				("searchType", SEARCH_TYPE_IMAGE),
			])
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return CseError::Timeout;
				}
				error!(error = %e, "Network error during Google CSE request");
				CseError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from Google CSE");

		if !status.is_success() {
			let status_code = status.as_u16();
			let body = match response.text().await {
				Ok(body) => body,
				Err(e) => {
					warn!(status = status_code, error = %e, "Failed to read error response body");
					String::new()
				}
			};
			return Err(classify_failure(status_code, &body));
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			CseError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let api_response: CseApiResponse = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse Google CSE response");
			CseError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		let items = match api_response.items {
			Some(items) if !items.is_empty() => items,
			_ => {
				debug!("Response carried no items");
				return Err(CseError::NoResults);
			}
		};

		let available = items.len();
		let results = leading(items, request.count)
			.into_iter()
			.enumerate()
			.map(|(position, item)| {
				item.link.map(|link| ImageResult { link }).ok_or_else(|| {
					error!(position, "Result item has no link");
					CseError::InvalidResponse(format!("item {position} has no link"))
				})
			})
			.collect::<Result<Vec<_>, _>>()?;

		debug!(
			available,
			returned = results.len(),
			"Image search completed successfully"
		);

		Ok(results)
	}
}

impl Default for CseClient {
	fn default() -> Self {
		Self::new()
	}
}

/// Keeps the first `count` items, preserving order.
fn leading<I, T>(items: I, count: usize) -> Vec<T>
where
	I: IntoIterator<Item = T>,
{
	items.into_iter().take(count).collect()
}

fn classify_failure(status_code: u16, body: &str) -> CseError {
	let lowered = body.to_lowercase();

	if status_code == 429
		|| (status_code == 403
			&& (lowered.contains("ratelimitexceeded")
				|| lowered.contains("dailylimitexceeded")
				|| lowered.contains("quota")))
	{
		error!(status = status_code, "Rate limit exceeded");
		return CseError::RateLimited;
	}

	if status_code == 401 || status_code == 403 {
		error!(status = status_code, "Unauthorized request");
		return CseError::Unauthorized;
	}

	let message = serde_json::from_str::<CseApiErrorEnvelope>(body)
		.map(|envelope| envelope.error.message)
		.unwrap_or_else(|_| body.to_string());

	error!(status = status_code, message = %message, "Google CSE API error");
	CseError::ApiError {
		status: status_code,
		message,
	}
}
