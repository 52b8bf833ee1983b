// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Settings panel model: three fields, each persisted on change.

use std::sync::Arc;

use imgsel_config::{load_settings, parse_result_count, ConfigError, Settings, SettingsStore};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingField {
	pub key: &'static str,
	pub name: &'static str,
	pub description: &'static str,
	pub placeholder: &'static str,
}

pub const RESULT_COUNT: SettingField = SettingField {
	key: "result-count",
	name: "Number of images",
	description: "How many images to show in the selector.",
	placeholder: "Count",
};

pub const API_KEY: SettingField = SettingField {
	key: "api-key",
	name: "Google Custom Search API key",
	description: "Your API key for image search.",
	placeholder: "API key",
};

pub const SEARCH_ENGINE_ID: SettingField = SettingField {
	key: "search-engine-id",
	name: "Search engine ID (cx)",
	description: "Your Google Custom Search engine ID.",
	placeholder: "Search engine ID",
};

const FIELDS: [SettingField; 3] = [RESULT_COUNT, API_KEY, SEARCH_ENGINE_ID];

impl SettingField {
	/// Current value of this field as the panel shows it. The API key is masked.
	pub fn display_value(&self, settings: &Settings) -> String {
		match self.key {
			k if k == RESULT_COUNT.key => settings.result_count.to_string(),
			k if k == API_KEY.key => settings.masked_api_key().to_string(),
			_ => settings.search_engine_id.clone(),
		}
	}
}

/// Edits are read-modify-write against the store without locking; the host
/// shows at most one panel at a time.
pub struct SettingsPanel {
	store: Arc<dyn SettingsStore>,
}

impl SettingsPanel {
	pub fn new(store: Arc<dyn SettingsStore>) -> Self {
		Self { store }
	}

	pub fn fields(&self) -> &'static [SettingField] {
		&FIELDS
	}

	pub async fn current(&self) -> Result<Settings, ConfigError> {
		load_settings(self.store.as_ref()).await
	}

	/// Raw text is parsed leniently; unusable input stores the default.
	pub async fn set_result_count(&self, raw: &str) -> Result<Settings, ConfigError> {
		let count = parse_result_count(raw);
		self.update(|s| s.result_count = count).await
	}

	pub async fn set_api_key(&self, value: &str) -> Result<Settings, ConfigError> {
		self.update(|s| s.api_key = value.to_string()).await
	}

	pub async fn set_search_engine_id(&self, value: &str) -> Result<Settings, ConfigError> {
		self.update(|s| s.search_engine_id = value.to_string()).await
	}

	/// Set a field by its key. `cx` is accepted for the search engine ID.
	pub async fn set(&self, key: &str, value: &str) -> Result<Settings, ConfigError> {
		match key {
			k if k == RESULT_COUNT.key => self.set_result_count(value).await,
			k if k == API_KEY.key => self.set_api_key(value).await,
			k if k == SEARCH_ENGINE_ID.key || k == "cx" => self.set_search_engine_id(value).await,
			other => Err(ConfigError::UnknownField(other.to_string())),
		}
	}

	async fn update<F>(&self, apply: F) -> Result<Settings, ConfigError>
	where
		F: FnOnce(&mut Settings) + Send,
	{
		let mut settings = self.current().await?;
		apply(&mut settings);
		self.store.save(&settings).await?;
		debug!(settings = ?settings, "settings saved");
		Ok(settings)
	}
}
