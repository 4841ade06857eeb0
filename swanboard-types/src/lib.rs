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

//! Shared API types for the swanboard status dashboard.
//!
//! This crate defines the contract between the dashboard backend
//! (`/api/status`, `/api/stats`, `/connections/*`) and its consumers: the
//! REST client, the browser status panel and the terminal front-end.
//! It carries no HTTP or DOM types.

pub mod actions;
pub mod snapshot;
pub mod stats;
pub mod status;

pub use actions::ConnectionAction;
pub use snapshot::StatusSnapshot;
pub use stats::DaemonStats;
pub use status::{BadgeTone, ConnectionDetail, ConnectionState, ConnectionStatus};
