// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client for imgsel.
//!
//! Every outbound request carries the same `User-Agent`. There is no retry
//! layer: a failed request is final for that command invocation.

mod client;

pub use client::{builder, user_agent};
