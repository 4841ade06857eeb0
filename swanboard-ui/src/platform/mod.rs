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

//! Platform abstraction for timers.
//!
//! - **`sleep(duration)`**: a one-shot delay on the platform's timer source
//! - **[`Timer`]**: the seam the poller waits through, so tests can script time
//!
//! The correct implementation is selected at compile time via
//! `cfg(target_arch = "wasm32")`.

use std::future::Future;
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::*;
#[cfg(target_arch = "wasm32")]
pub use web::*;

/// Source of delays for the poller.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// [`Timer`] backed by the platform's real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformTimer;

impl Timer for PlatformTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        sleep(duration)
    }
}
