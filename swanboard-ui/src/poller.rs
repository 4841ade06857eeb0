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

//! The status poller: fetch a snapshot, render it, report failures to the log.

use std::time::Duration;

use log::{debug, error};
use swanboard_types::StatusSnapshot;

use crate::platform::{PlatformTimer, Timer};
use crate::sequence::SequenceGuard;
use crate::source::SnapshotSource;
use crate::view::StatusView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOrigin {
    Manual,
    Auto,
}

/// What happened to one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    /// A newer response was already on screen; this one was dropped.
    Stale,
    /// The fetch succeeded but the container was gone, so nothing was drawn.
    Detached,
    Failed,
}

pub struct StatusPoller<S, V, T = PlatformTimer> {
    source: S,
    view: V,
    timer: T,
    sequence: SequenceGuard,
    min_busy: Duration,
}

impl<S, V, T> StatusPoller<S, V, T>
where
    S: SnapshotSource,
    V: StatusView,
    T: Timer,
{
    pub fn new(source: S, view: V, timer: T, min_busy: Duration) -> Self {
        Self {
            source,
            view,
            timer,
            sequence: SequenceGuard::new(),
            min_busy,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Draw `snapshot` into the container. No-op when the container is gone.
    pub fn render_snapshot(&self, snapshot: &StatusSnapshot) {
        if self.view.container_present() {
            self.view.render_snapshot(snapshot);
        }
    }

    /// Fetch once and render the result if it is still the newest.
    pub async fn refresh(&self, origin: RefreshOrigin) -> RefreshOutcome {
        let ticket = self.sequence.issue();
        match self.source.fetch_snapshot().await {
            Ok(_) if !self.view.container_present() => {
                debug!(
                    "{origin:?} refresh #{} not drawn, status container absent",
                    ticket.number()
                );
                RefreshOutcome::Detached
            }
            Ok(snapshot) => {
                if self.sequence.try_apply(ticket) {
                    debug!(
                        "{origin:?} refresh #{} applied ({} connections)",
                        ticket.number(),
                        snapshot.len()
                    );
                    self.view.render_snapshot(&snapshot);
                    RefreshOutcome::Applied
                } else {
                    debug!(
                        "{origin:?} refresh #{} dropped, #{} already applied",
                        ticket.number(),
                        self.sequence.last_applied()
                    );
                    RefreshOutcome::Stale
                }
            }
            Err(e) => {
                error!("{origin:?} status refresh #{} failed: {e}", ticket.number());
                RefreshOutcome::Failed
            }
        }
    }

    /// User-initiated refresh.
    ///
    /// The trigger goes busy immediately and returns to idle `min_busy` after
    /// the fetch settles, whether it succeeded or not.
    pub async fn trigger_manual_refresh(&self) -> RefreshOutcome {
        self.view.set_trigger_busy(true);
        let outcome = self.refresh(RefreshOrigin::Manual).await;
        if !self.min_busy.is_zero() {
            self.timer.sleep(self.min_busy).await;
        }
        self.view.set_trigger_busy(false);
        outcome
    }
}
