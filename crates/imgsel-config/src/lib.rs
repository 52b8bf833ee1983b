// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Settings for the image selector.
//!
//! This crate provides:
//! - The [`Settings`] record and its persisted JSON layout
//! - Lenient decoding of the result count
//! - [`SettingsStore`] implementations backed by a JSON file or memory
//! - XDG path resolution for the settings file
//! - Environment / CLI overrides layered over the stored values

pub mod error;
pub mod overrides;
pub mod paths;
pub mod settings;
pub mod store;

pub use error::ConfigError;
pub use overrides::{LayeredStore, SettingsOverrides};
pub use paths::{data_file_in, resolve_data_file};
pub use settings::{parse_result_count, Settings, DEFAULT_RESULT_COUNT};
pub use store::{load_settings, JsonFileStore, MemoryStore, SettingsStore};
