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

//! Live connection status panel for the swanboard dashboard.
//!
//! The core is platform-neutral: [`StatusPoller`] fetches snapshots through a
//! [`SnapshotSource`], draws them on a [`StatusView`] and waits through a
//! [`Timer`]. On `wasm32` the `dom` and `mount` modules bind it to the page's
//! `#status-container` and `#refresh-status` elements; native front-ends
//! supply their own view.

pub mod auto_refresh;
pub mod config;
pub mod platform;
pub mod poller;
pub mod render;
pub mod sequence;
pub mod source;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod mount;

#[cfg(test)]
mod testing;

pub use auto_refresh::{schedule_auto_refresh, AutoRefreshHandle};
pub use config::{ConfigError, PollerConfig, RuntimeOverrides};
pub use platform::{PlatformTimer, Timer};
pub use poller::{RefreshOrigin, RefreshOutcome, StatusPoller};
pub use render::{render_snapshot, RenderOptions};
pub use source::{RefreshError, SnapshotSource};
pub use view::StatusView;
