// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG Base Directory compliant location of the settings file.

use std::path::{Path, PathBuf};

use crate::ConfigError;

const APP_DIR: &str = "imgsel";
const DATA_FILE: &str = "data.json";

/// Resolve the settings file: `$XDG_CONFIG_HOME/imgsel/data.json`, falling
/// back to `~/.config/imgsel/data.json`.
pub fn resolve_data_file() -> Result<PathBuf, ConfigError> {
	let config_home = match std::env::var_os("XDG_CONFIG_HOME") {
		Some(dir) if !dir.is_empty() => PathBuf::from(dir),
		_ => dirs::home_dir()
			.ok_or(ConfigError::HomeDirNotFound)?
			.join(".config"),
	};

	let path = data_file_in(&config_home);
	tracing::debug!(path = %path.display(), "resolved settings file");
	Ok(path)
}

/// Settings file location under a given config home.
pub fn data_file_in(config_home: &Path) -> PathBuf {
	config_home.join(APP_DIR).join(DATA_FILE)
}
