// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The settings record and its persisted layout.
//!
//! The on-disk field names are a stable storage schema and must not change:
//!
//! ```json
//! { "cantidadImagenes": 5, "apiKey": "", "idBusqueda": "" }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Result count used when nothing usable was stored.
pub const DEFAULT_RESULT_COUNT: u32 = 5;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
	/// How many results to show in the selector.
	#[serde(
		rename = "cantidadImagenes",
		default = "default_result_count",
		deserialize_with = "lenient_result_count"
	)]
	pub result_count: u32,

	/// Google Custom Search API key.
	#[serde(rename = "apiKey", default, deserialize_with = "lenient_string")]
	pub api_key: String,

	/// Custom search engine ID ("cx").
	#[serde(rename = "idBusqueda", default, deserialize_with = "lenient_string")]
	pub search_engine_id: String,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			result_count: DEFAULT_RESULT_COUNT,
			api_key: String::new(),
			search_engine_id: String::new(),
		}
	}
}

impl std::fmt::Debug for Settings {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Settings")
			.field("result_count", &self.result_count)
			.field("api_key", &redact(&self.api_key))
			.field("search_engine_id", &self.search_engine_id)
			.finish()
	}
}

impl Settings {
	/// API key suitable for display: empty stays empty, anything else is masked.
	pub fn masked_api_key(&self) -> &'static str {
		redact(&self.api_key)
	}
}

fn redact(value: &str) -> &'static str {
	if value.is_empty() {
		""
	} else {
		"[REDACTED]"
	}
}

fn default_result_count() -> u32 {
	DEFAULT_RESULT_COUNT
}

/// Parse a user-entered result count.
///
/// Reads an optionally signed leading run of digits and ignores the rest,
/// so `"7 images"` is 7. Anything that yields no digits, zero, or a negative
/// number falls back to [`DEFAULT_RESULT_COUNT`].
pub fn parse_result_count(input: &str) -> u32 {
	let trimmed = input.trim_start();
	let (negative, rest) = match trimmed.as_bytes().first() {
		Some(b'-') => (true, &trimmed[1..]),
		Some(b'+') => (false, &trimmed[1..]),
		_ => (false, trimmed),
	};

	let digits_end = rest
		.find(|c: char| !c.is_ascii_digit())
		.unwrap_or(rest.len());
	let digits = &rest[..digits_end];

	if negative || digits.is_empty() {
		return DEFAULT_RESULT_COUNT;
	}

	match digits.parse::<u64>() {
		Ok(0) => DEFAULT_RESULT_COUNT,
		Ok(n) => u32::try_from(n).unwrap_or(u32::MAX),
		Err(_) => u32::MAX,
	}
}

fn result_count_from_value(value: &Value) -> u32 {
	match value {
		Value::Number(n) => {
			if let Some(n) = n.as_u64() {
				if n == 0 {
					DEFAULT_RESULT_COUNT
				} else {
					u32::try_from(n).unwrap_or(u32::MAX)
				}
			} else {
				match n.as_f64() {
					Some(f) if f >= 1.0 => {
						if f >= u32::MAX as f64 {
							u32::MAX
						} else {
							f.trunc() as u32
						}
					}
					_ => DEFAULT_RESULT_COUNT,
				}
			}
		}
		Value::String(s) => parse_result_count(s),
		_ => DEFAULT_RESULT_COUNT,
	}
}

fn lenient_result_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	Ok(result_count_from_value(&value))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	Ok(match value {
		Value::String(s) => s,
		Value::Null => String::new(),
		other => other.to_string(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn defaults_match_first_run() {
		let settings = Settings::default();
		assert_eq!(settings.result_count, 5);
		assert_eq!(settings.api_key, "");
		assert_eq!(settings.search_engine_id, "");
	}

	#[test]
	fn serializes_with_storage_field_names() {
		let settings = Settings {
			result_count: 3,
			api_key: "k".to_string(),
			search_engine_id: "cx".to_string(),
		};
		let value = serde_json::to_value(&settings).unwrap();
		assert_eq!(
			value,
			serde_json::json!({ "cantidadImagenes": 3, "apiKey": "k", "idBusqueda": "cx" })
		);
	}

	#[test]
	fn missing_fields_take_defaults() {
		let settings: Settings = serde_json::from_str("{}").unwrap();
		assert_eq!(settings, Settings::default());
	}

	#[test]
	fn non_numeric_count_defaults_to_five() {
		let settings: Settings =
			serde_json::from_str(r#"{"cantidadImagenes": "lots", "apiKey": "k"}"#).unwrap();
		assert_eq!(settings.result_count, 5);
		assert_eq!(settings.api_key, "k");

		let settings: Settings = serde_json::from_str(r#"{"cantidadImagenes": null}"#).unwrap();
		assert_eq!(settings.result_count, 5);

		let settings: Settings = serde_json::from_str(r#"{"cantidadImagenes": [1]}"#).unwrap();
		assert_eq!(settings.result_count, 5);
	}

	#[test]
	fn numeric_forms_are_accepted() {
		let settings: Settings = serde_json::from_str(r#"{"cantidadImagenes": "7"}"#).unwrap();
		assert_eq!(settings.result_count, 7);

		let settings: Settings = serde_json::from_str(r#"{"cantidadImagenes": 8.9}"#).unwrap();
		assert_eq!(settings.result_count, 8);

		let settings: Settings = serde_json::from_str(r#"{"cantidadImagenes": -2}"#).unwrap();
		assert_eq!(settings.result_count, 5);

		let settings: Settings = serde_json::from_str(r#"{"cantidadImagenes": 0}"#).unwrap();
		assert_eq!(settings.result_count, 5);
	}

	#[test]
	fn null_credentials_become_empty() {
		let settings: Settings =
			serde_json::from_str(r#"{"apiKey": null, "idBusqueda": null}"#).unwrap();
		assert_eq!(settings.api_key, "");
		assert_eq!(settings.search_engine_id, "");
	}

	#[test]
	fn unknown_fields_are_ignored() {
		let settings: Settings =
			serde_json::from_str(r#"{"cantidadImagenes": 4, "theme": "dark"}"#).unwrap();
		assert_eq!(settings.result_count, 4);
	}

	#[test]
	fn debug_masks_api_key() {
		let settings = Settings {
			api_key: "AIza-secret".to_string(),
			..Default::default()
		};
		let rendered = format!("{settings:?}");
		assert!(!rendered.contains("AIza-secret"));
		assert!(rendered.contains("[REDACTED]"));
	}

	#[test]
	fn parse_result_count_cases() {
		assert_eq!(parse_result_count("3"), 3);
		assert_eq!(parse_result_count("  12"), 12);
		assert_eq!(parse_result_count("7 images"), 7);
		assert_eq!(parse_result_count("+4"), 4);
		assert_eq!(parse_result_count(""), 5);
		assert_eq!(parse_result_count("abc"), 5);
		assert_eq!(parse_result_count("0"), 5);
		assert_eq!(parse_result_count("-3"), 5);
		assert_eq!(parse_result_count("99999999999999999999999"), u32::MAX);
	}

	proptest! {
		#[test]
		fn parse_result_count_is_always_positive(input in ".*") {
			prop_assert!(parse_result_count(&input) >= 1);
		}

		#[test]
		fn parse_result_count_reads_plain_integers(n in 1u32..10_000) {
			prop_assert_eq!(parse_result_count(&n.to_string()), n);
		}
	}
}
