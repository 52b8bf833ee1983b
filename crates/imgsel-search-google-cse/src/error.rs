// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Google Custom Search Engine client.

use thiserror::Error;

/// Errors that can occur when searching images through the Google CSE API.
#[derive(Debug, Error)]
pub enum CseError {
	/// The search term was empty; no request was sent.
	#[error("Search term is empty")]
	EmptyQuery,

	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Rate limit or daily quota exceeded.
	#[error("Rate limit exceeded")]
	RateLimited,

	/// Invalid API key or CSE ID.
	#[error("Invalid API key or CSE ID")]
	Unauthorized,

	/// Invalid or unparseable response from Google.
	#[error("Invalid response from Google: {0}")]
	InvalidResponse(String),

	/// Google API returned an error status.
	#[error("Google API error: {status} - {message}")]
	ApiError { status: u16, message: String },

	/// The response carried no `items` field, or an empty one.
	#[error("No images found")]
	NoResults,
}

impl CseError {
	/// True when the failure came from the remote side rejecting or failing
	/// the request, as opposed to the query simply matching nothing.
	pub fn is_request_failure(&self) -> bool {
		!matches!(self, CseError::NoResults | CseError::EmptyQuery)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_results_is_not_a_request_failure() {
		assert!(!CseError::NoResults.is_request_failure());
		assert!(!CseError::EmptyQuery.is_request_failure());
	}

	#[test]
	fn remote_errors_are_request_failures() {
		assert!(CseError::Unauthorized.is_request_failure());
		assert!(CseError::RateLimited.is_request_failure());
		assert!(CseError::Timeout.is_request_failure());
		assert!(CseError::ApiError {
			status: 500,
			message: "boom".to_string()
		}
		.is_request_failure());
	}

	#[test]
	fn display_includes_status() {
		let err = CseError::ApiError {
			status: 400,
			message: "Invalid Value".to_string(),
		};
		assert_eq!(err.to_string(), "Google API error: 400 - Invalid Value");
	}
}
