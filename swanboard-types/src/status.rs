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

//! Per-connection status values and their badge classification.
//!
//! The backend reports a connection either as a free-form status string
//! (`"established: 5 connections"`) or as a detail record carrying a state
//! tag and traffic counters. Free-form text is classified with a single
//! substring test; detail records switch on the closed [`ConnectionState`]
//! enumeration and only fall back to the substring test for unknown tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Substring that marks a free-form status as up. Matched case-sensitively.
pub const ESTABLISHED_MARKER: &str = "established";

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Secondary,
}

impl BadgeTone {
    /// CSS class applied to the badge element.
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeTone::Success => "bg-success",
            BadgeTone::Warning => "bg-warning",
            BadgeTone::Danger => "bg-danger",
            BadgeTone::Secondary => "bg-secondary",
        }
    }
}

/// Classify free-form status text: `Success` iff it contains
/// [`ESTABLISHED_MARKER`], `Warning` otherwise.
pub fn tone_for_text(text: &str) -> BadgeTone {
    if text.contains(ESTABLISHED_MARKER) {
        BadgeTone::Success
    } else {
        BadgeTone::Warning
    }
}

/// Closed set of state tags a detail record may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionState {
    Established,
    Connecting,
    Error,
    Disabled,
}

impl ConnectionState {
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionState::Established => "established",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Error => "error",
            ConnectionState::Disabled => "disabled",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            ConnectionState::Established => BadgeTone::Success,
            ConnectionState::Connecting => BadgeTone::Warning,
            ConnectionState::Error => BadgeTone::Danger,
            ConnectionState::Disabled => BadgeTone::Secondary,
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tag is not one of the [`ConnectionState`] variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownState(pub String);

impl fmt::Display for UnknownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown connection state tag '{}'", self.0)
    }
}

impl std::error::Error for UnknownState {}

impl FromStr for ConnectionState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "established" => Ok(ConnectionState::Established),
            "connecting" => Ok(ConnectionState::Connecting),
            "error" => Ok(ConnectionState::Error),
            "disabled" => Ok(ConnectionState::Disabled),
            other => Err(UnknownState(other.to_string())),
        }
    }
}

/// Detail record emitted by backends that report traffic counters.
///
/// `established_time` is the SA age in seconds as reported by the daemon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDetail {
    pub state: String,
    #[serde(default)]
    pub bytes_in: u64,
    #[serde(default)]
    pub bytes_out: u64,
    #[serde(default)]
    pub packets_in: u64,
    #[serde(default)]
    pub packets_out: u64,
    #[serde(default)]
    pub established_time: u64,
}

impl ConnectionDetail {
    /// The parsed state tag, if it belongs to the closed enumeration.
    pub fn known_state(&self) -> Option<ConnectionState> {
        self.state.parse().ok()
    }
}

/// Status of a single connection inside a [`crate::StatusSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConnectionStatus {
    Text(String),
    Detailed(ConnectionDetail),
}

impl ConnectionStatus {
    /// Raw status text shown inside the badge.
    pub fn text(&self) -> &str {
        match self {
            ConnectionStatus::Text(text) => text,
            ConnectionStatus::Detailed(detail) => &detail.state,
        }
    }

    pub fn detail(&self) -> Option<&ConnectionDetail> {
        match self {
            ConnectionStatus::Text(_) => None,
            ConnectionStatus::Detailed(detail) => Some(detail),
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            ConnectionStatus::Text(text) => tone_for_text(text),
            ConnectionStatus::Detailed(detail) => detail
                .known_state()
                .map(ConnectionState::tone)
                .unwrap_or_else(|| tone_for_text(&detail.state)),
        }
    }
}

impl From<&str> for ConnectionStatus {
    fn from(text: &str) -> Self {
        ConnectionStatus::Text(text.to_string())
    }
}

impl From<String> for ConnectionStatus {
    fn from(text: String) -> Self {
        ConnectionStatus::Text(text)
    }
}
