// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use imgsel_config::ConfigError;
use thiserror::Error;

/// Failures of the presentation surface itself, not of the user's choice.
#[derive(Debug, Error)]
pub enum PresenterError {
	#[error("terminal error: {0}")]
	Terminal(#[from] std::io::Error),

	/// The surface went away before the user chose or dismissed.
	#[error("presenter closed unexpectedly")]
	Closed,
}

/// Errors that end a command invocation.
///
/// A failed search is deliberately absent: it is reported to the user as
/// a notice and the command completes normally.
#[derive(Debug, Error)]
pub enum CommandError {
	#[error("no active note")]
	NoActiveDocument,

	#[error("plugin is not active")]
	NotActive,

	#[error("unknown command: {0}")]
	UnknownCommand(String),

	#[error("settings error: {0}")]
	Settings(#[from] ConfigError),

	#[error("presenter error: {0}")]
	Presenter(#[from] PresenterError),
}
