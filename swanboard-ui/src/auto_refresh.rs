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

//! Periodic background refresh tied to the lifetime of the status view.
//!
//! [`schedule_auto_refresh`] hands back the tick loop as a future plus an
//! [`AutoRefreshHandle`]. Whoever mounts the view spawns the future and keeps
//! the handle; cancelling or dropping the handle ends the loop at its next
//! suspension point, along with any fetches still in flight.
//!
//! Ticks keep a fixed period. A tick never waits for the previous tick's
//! fetch; in-flight fetches are driven while the next sleep is pending, and
//! the poller's sequence guard sorts out responses that overtake each other.

use std::future::Future;
use std::pin::pin;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{self, AbortHandle, Abortable, Either, FutureExt, LocalBoxFuture};
use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, trace};

use crate::platform::Timer;
use crate::poller::{RefreshOrigin, RefreshOutcome, StatusPoller};
use crate::source::SnapshotSource;
use crate::view::StatusView;

/// Cancels the auto-refresh loop it was created with. Dropping it cancels too.
#[derive(Debug)]
pub struct AutoRefreshHandle {
    abort: AbortHandle,
}

impl AutoRefreshHandle {
    pub fn cancel(&self) {
        if !self.abort.is_aborted() {
            debug!("auto-refresh cancelled");
        }
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for AutoRefreshHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Build the auto-refresh loop for `poller`, ticking every `interval`.
///
/// Each tick first checks that the container is still mounted; a tick with
/// no container does nothing. The returned future completes once the handle
/// is cancelled or dropped.
pub fn schedule_auto_refresh<S, V, T>(
    poller: Rc<StatusPoller<S, V, T>>,
    interval: Duration,
) -> (impl Future<Output = ()>, AutoRefreshHandle)
where
    S: SnapshotSource + 'static,
    V: StatusView + 'static,
    T: Timer + 'static,
{
    let (abort, registration) = AbortHandle::new_pair();
    let task = Abortable::new(tick_loop(poller, interval), registration);
    let task = async move {
        let _ = task.await;
        debug!("auto-refresh loop stopped");
    };
    (task, AutoRefreshHandle { abort })
}

async fn tick_loop<S, V, T>(poller: Rc<StatusPoller<S, V, T>>, interval: Duration)
where
    S: SnapshotSource + 'static,
    V: StatusView + 'static,
    T: Timer + 'static,
{
    debug!("auto-refresh every {} ms", interval.as_millis());
    let mut in_flight: FuturesUnordered<LocalBoxFuture<'static, RefreshOutcome>> =
        FuturesUnordered::new();
    loop {
        let mut tick = pin!(poller.timer().sleep(interval));
        loop {
            if in_flight.is_empty() {
                tick.as_mut().await;
                break;
            }
            if let Either::Left(_) = future::select(tick.as_mut(), in_flight.next()).await {
                break;
            }
        }

        if !poller.view().container_present() {
            trace!("status container absent, skipping tick");
            continue;
        }
        if !in_flight.is_empty() {
            trace!("{} auto refresh(es) still pending", in_flight.len());
        }
        let poller = poller.clone();
        in_flight.push(async move { poller.refresh(RefreshOrigin::Auto).await }.boxed_local());
    }
}
