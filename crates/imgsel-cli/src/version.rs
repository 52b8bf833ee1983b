// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Build information and version utilities.

pub use imgsel_common_version::BuildInfo;

/// Format version info for display.
pub fn format_version_info() -> String {
	BuildInfo::current().summary()
}
