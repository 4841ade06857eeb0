/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Poller configuration.
//!
//! Two presets cover the dashboard page (busy spinner held for a second,
//! detailed empty state) and the compact panel (no busy hold, plain empty
//! state). Pages tweak either preset at runtime through
//! `window.__SWANBOARD_CONFIG`, which deserializes into [`RuntimeOverrides`].

use serde::Deserialize;
use thiserror::Error;

use crate::render::{EmptyStateStyle, RenderOptions};

pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 30_000;
pub const DEFAULT_CONTAINER_ID: &str = "status-container";
pub const DEFAULT_TRIGGER_ID: &str = "refresh-status";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("refresh interval must be greater than zero")]
    ZeroInterval,

    #[error("element id for {0} must not be empty")]
    EmptyElementId(&'static str),

    #[error("failed to parse runtime configuration: {0}")]
    Parse(String),
}

/// Markup shown inside the refresh trigger while busy and while idle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TriggerLabels {
    pub busy: String,
    pub idle: String,
}

impl TriggerLabels {
    pub fn spinner() -> Self {
        Self {
            busy: r#"<i class="fas fa-spinner fa-spin"></i> Actualisation..."#.to_string(),
            idle: r#"<i class="fas fa-redo"></i> Actualiser"#.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Dashboard,
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    /// How long the trigger stays busy after a manual fetch settles.
    pub min_busy_ms: u64,
    pub empty_state_message: String,
    pub empty_state_style: EmptyStateStyle,
    pub refresh_interval_ms: u64,
    /// Prefix for API calls and action links. Empty means same origin.
    pub api_base_url: String,
    pub container_id: String,
    pub trigger_id: String,
    /// `None` leaves the trigger's content alone and only toggles `disabled`.
    pub trigger_labels: Option<TriggerLabels>,
    pub auto_mount: bool,
}

impl PollerConfig {
    pub fn dashboard() -> Self {
        Self {
            min_busy_ms: 1_000,
            empty_state_message: "Aucune connexion configurée".to_string(),
            empty_state_style: EmptyStateStyle::Detailed,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            api_base_url: String::new(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            trigger_id: DEFAULT_TRIGGER_ID.to_string(),
            trigger_labels: Some(TriggerLabels::spinner()),
            auto_mount: true,
        }
    }

    pub fn compact() -> Self {
        Self {
            min_busy_ms: 0,
            empty_state_message: "Aucune connexion active".to_string(),
            empty_state_style: EmptyStateStyle::Plain,
            trigger_labels: None,
            ..Self::dashboard()
        }
    }

    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Dashboard => Self::dashboard(),
            Preset::Compact => Self::compact(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.container_id.trim().is_empty() {
            return Err(ConfigError::EmptyElementId("the status container"));
        }
        if self.trigger_id.trim().is_empty() {
            return Err(ConfigError::EmptyElementId("the refresh trigger"));
        }
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            empty_state_message: self.empty_state_message.clone(),
            empty_state_style: self.empty_state_style,
            link_base: self.api_base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self::dashboard()
    }
}

/// Page-supplied overrides. Every key is optional; `preset` picks the base.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuntimeOverrides {
    pub preset: Option<Preset>,
    pub min_busy_ms: Option<u64>,
    pub empty_state_message: Option<String>,
    pub empty_state_style: Option<EmptyStateStyle>,
    pub refresh_interval_ms: Option<u64>,
    pub api_base_url: Option<String>,
    pub container_id: Option<String>,
    pub trigger_id: Option<String>,
    pub trigger_labels: Option<TriggerLabels>,
    pub auto_mount: Option<bool>,
}

impl RuntimeOverrides {
    pub fn apply(self) -> Result<PollerConfig, ConfigError> {
        let mut config = PollerConfig::preset(self.preset.unwrap_or(Preset::Dashboard));
        if let Some(v) = self.min_busy_ms {
            config.min_busy_ms = v;
        }
        if let Some(v) = self.empty_state_message {
            config.empty_state_message = v;
        }
        if let Some(v) = self.empty_state_style {
            config.empty_state_style = v;
        }
        if let Some(v) = self.refresh_interval_ms {
            config.refresh_interval_ms = v;
        }
        if let Some(v) = self.api_base_url {
            config.api_base_url = v;
        }
        if let Some(v) = self.container_id {
            config.container_id = v;
        }
        if let Some(v) = self.trigger_id {
            config.trigger_id = v;
        }
        if let Some(v) = self.trigger_labels {
            config.trigger_labels = Some(v);
        }
        if let Some(v) = self.auto_mount {
            config.auto_mount = v;
        }
        config.validate()?;
        Ok(config)
    }
}
