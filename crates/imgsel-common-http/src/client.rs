// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use imgsel_common_version::BuildInfo;
use reqwest::{Client, ClientBuilder};

/// Creates a new HTTP client builder with the standard imgsel User-Agent header.
///
/// # Example
/// ```ignore
/// let client = imgsel_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Returns the standard User-Agent string.
///
/// Format: `imgsel/{version} ({platform}; {git_sha})`
pub fn user_agent() -> String {
	let info = BuildInfo::current();
	format!("imgsel/{} ({}; {})", info.version, info.platform, info.git_sha)
}
