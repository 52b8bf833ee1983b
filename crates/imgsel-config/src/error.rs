// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration error types.

use std::path::PathBuf;

/// Errors that can occur while loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// I/O error reading or writing the settings file
	#[error("I/O error on {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// JSON parsing error
	#[error("JSON parse error in {path}: {source}")]
	JsonParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// JSON encoding error
	#[error("Failed to encode settings: {0}")]
	JsonEncode(#[source] serde_json::Error),

	/// Unknown settings field name
	#[error("Unknown settings field: {0}")]
	UnknownField(String),

	/// Home directory not found
	#[error("Could not determine home directory")]
	HomeDirNotFound,
}

impl ConfigError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}
}
