// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Persistence for [`Settings`].

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{ConfigError, Settings};

/// Host-provided storage for the settings record.
///
/// `load` returns `None` when nothing has been saved yet.
#[async_trait]
pub trait SettingsStore: Send + Sync {
	async fn load(&self) -> Result<Option<Settings>, ConfigError>;

	async fn save(&self, settings: &Settings) -> Result<(), ConfigError>;
}

/// Load settings, falling back to defaults on first run.
pub async fn load_settings(store: &dyn SettingsStore) -> Result<Settings, ConfigError> {
	match store.load().await? {
		Some(settings) => Ok(settings),
		None => {
			debug!("no saved settings, using defaults");
			Ok(Settings::default())
		}
	}
}

/// Settings stored as a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
	path: PathBuf,
}

impl JsonFileStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Store at the default XDG location.
	pub fn at_default_location() -> Result<Self, ConfigError> {
		Ok(Self::new(crate::resolve_data_file()?))
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn temp_path(&self) -> PathBuf {
		let mut name = self
			.path
			.file_name()
			.map(|n| n.to_os_string())
			.unwrap_or_default();
		name.push(".tmp");
		self.path.with_file_name(name)
	}
}

#[async_trait]
impl SettingsStore for JsonFileStore {
	async fn load(&self) -> Result<Option<Settings>, ConfigError> {
		let content = match tokio::fs::read_to_string(&self.path).await {
			Ok(content) => content,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %self.path.display(), "settings file not found");
				return Ok(None);
			}
			Err(e) => return Err(ConfigError::io(&self.path, e)),
		};

		if content.trim().is_empty() {
			warn!(path = %self.path.display(), "settings file is empty");
			return Ok(None);
		}

		// A stored `null` counts as "nothing saved".
		let settings: Option<Settings> =
			serde_json::from_str(&content).map_err(|source| ConfigError::JsonParse {
				path: self.path.clone(),
				source,
			})?;

		debug!(path = %self.path.display(), loaded = settings.is_some(), "loaded settings");
		Ok(settings)
	}

	async fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
		if let Some(parent) = self.path.parent() {
			if !parent.as_os_str().is_empty() {
				tokio::fs::create_dir_all(parent)
					.await
					.map_err(|e| ConfigError::io(parent, e))?;
			}
		}

		let json = serde_json::to_string_pretty(settings).map_err(ConfigError::JsonEncode)?;
		let temp = self.temp_path();

		tokio::fs::write(&temp, json)
			.await
			.map_err(|e| ConfigError::io(&temp, e))?;
		tokio::fs::rename(&temp, &self.path)
			.await
			.map_err(|e| ConfigError::io(&self.path, e))?;

		debug!(path = %self.path.display(), "saved settings");
		Ok(())
	}
}

/// In-memory settings, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
	inner: Mutex<Option<Settings>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_settings(settings: Settings) -> Self {
		Self {
			inner: Mutex::new(Some(settings)),
		}
	}

	/// Current stored value, if any.
	pub fn snapshot(&self) -> Option<Settings> {
		self.inner
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.clone()
	}
}

#[async_trait]
impl SettingsStore for MemoryStore {
	async fn load(&self) -> Result<Option<Settings>, ConfigError> {
		Ok(self.snapshot())
	}

	async fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
		*self
			.inner
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(settings.clone());
		Ok(())
	}
}
