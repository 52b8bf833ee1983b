// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Google Custom Search Engine image search client for imgsel.
//!
//! This crate issues a single image-only query against the Google CSE API
//! and returns the leading result links. [`CseClient::search_images`]
//! reports every failure through [`CseError`]; [`CseClient::search`] keeps
//! the collapsed behavior where any failure is logged and yields an empty
//! result list.

pub mod client;
pub mod error;
pub mod types;

pub use client::CseClient;
pub use error::CseError;
pub use types::{ImageResult, ImageSearchRequest};
