// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Plugin lifecycle: explicit activate/deactivate instead of a host base class.

use std::sync::Arc;

use imgsel_config::SettingsStore;
use tracing::info;

use crate::{
	CommandContext, CommandError, CommandOutcome, ImageSearch, OpenImageSelector, SettingsPanel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
	pub id: &'static str,
	pub name: &'static str,
}

pub const OPEN_IMAGE_SELECTOR: CommandSpec = CommandSpec {
	id: "open-image-selector",
	name: "Open Image Selector",
};

pub struct ImageSelectorPlugin {
	store: Arc<dyn SettingsStore>,
	search: Arc<dyn ImageSearch>,
	commands: Vec<CommandSpec>,
}

impl ImageSelectorPlugin {
	pub fn new(store: Arc<dyn SettingsStore>, search: Arc<dyn ImageSearch>) -> Self {
		Self {
			store,
			search,
			commands: Vec::new(),
		}
	}

	/// Registers the plugin's command. Repeated calls are harmless.
	pub fn activate(&mut self) {
		if self.is_active() {
			return;
		}
		self.commands.push(OPEN_IMAGE_SELECTOR);
		info!("image selector plugin loaded");
	}

	pub fn deactivate(&mut self) {
		if !self.is_active() {
			return;
		}
		self.commands.clear();
		info!("image selector plugin unloaded");
	}

	pub fn is_active(&self) -> bool {
		!self.commands.is_empty()
	}

	/// Commands currently registered with the host.
	pub fn commands(&self) -> &[CommandSpec] {
		&self.commands
	}

	pub fn settings_panel(&self) -> SettingsPanel {
		SettingsPanel::new(Arc::clone(&self.store))
	}

	pub fn open_image_selector(&self) -> Result<OpenImageSelector, CommandError> {
		if !self.is_active() {
			return Err(CommandError::NotActive);
		}
		Ok(OpenImageSelector::new(
			Arc::clone(&self.store),
			Arc::clone(&self.search),
		))
	}

	/// Dispatch a registered command by id.
	pub async fn execute(
		&self,
		command_id: &str,
		ctx: CommandContext<'_>,
	) -> Result<CommandOutcome, CommandError> {
		if !self.is_active() {
			return Err(CommandError::NotActive);
		}
		if !self.commands.iter().any(|c| c.id == command_id) {
			return Err(CommandError::UnknownCommand(command_id.to_string()));
		}
		self.open_image_selector()?.run(ctx).await
	}
}
