// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Environment / command-line overrides layered over stored settings.

use async_trait::async_trait;

use crate::{parse_result_count, ConfigError, Settings, SettingsStore};

/// Values that take precedence over the stored ones when set.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
	pub result_count: Option<String>,
	pub api_key: Option<String>,
	pub search_engine_id: Option<String>,
}

impl SettingsOverrides {
	pub fn is_empty(&self) -> bool {
		self.result_count.is_none() && self.api_key.is_none() && self.search_engine_id.is_none()
	}

	pub fn apply(&self, mut settings: Settings) -> Settings {
		if let Some(count) = &self.result_count {
			settings.result_count = parse_result_count(count);
		}
		if let Some(key) = &self.api_key {
			settings.api_key = key.clone();
		}
		if let Some(cx) = &self.search_engine_id {
			settings.search_engine_id = cx.clone();
		}
		settings
	}
}

/// Store that reads through `inner` and applies overrides on load.
///
/// Saves go to `inner` unchanged, so overrides are never persisted by
/// accident unless the caller saves what it loaded.
pub struct LayeredStore<S> {
	inner: S,
	overrides: SettingsOverrides,
}

impl<S: SettingsStore> LayeredStore<S> {
	pub fn new(inner: S, overrides: SettingsOverrides) -> Self {
		Self { inner, overrides }
	}
}

#[async_trait]
impl<S: SettingsStore> SettingsStore for LayeredStore<S> {
	async fn load(&self) -> Result<Option<Settings>, ConfigError> {
		let stored = self.inner.load().await?;
		if self.overrides.is_empty() {
			return Ok(stored);
		}
		Ok(Some(self.overrides.apply(stored.unwrap_or_default())))
	}

	async fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
		self.inner.save(settings).await
	}
}
