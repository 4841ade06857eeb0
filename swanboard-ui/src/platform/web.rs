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

//! WASM (browser) timer primitives.
//!
//! These use `setTimeout` through `gloo-timers` and the microtask queue
//! through `wasm-bindgen-futures`.

use std::future::Future;
use std::time::Duration;

/// Sleep for `duration` on the browser's timer queue.
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

/// Spawn an async task on the browser's microtask queue.
///
/// The future does **not** need to be `Send` because WASM is single-threaded.
pub fn spawn<F: Future<Output = ()> + 'static>(future: F) {
    wasm_bindgen_futures::spawn_local(future);
}
