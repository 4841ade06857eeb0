// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Test doubles shared by the unit tests: a view that records what it was
// asked to draw, snapshot sources with fixed or hand-released replies, and a
// timer whose sleeps are released by the test.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::{self, FutureExt};
use swanboard_client::ApiError;
use swanboard_types::StatusSnapshot;

use crate::platform::Timer;
use crate::render::{self, EmptyStateStyle, RenderOptions};
use crate::source::{RefreshError, SnapshotSource};
use crate::view::StatusView;

pub fn snapshot(json: &str) -> StatusSnapshot {
    serde_json::from_str(json).unwrap()
}

fn server_error(body: &str) -> RefreshError {
    RefreshError(ApiError::ServerError {
        status: 500,
        body: body.to_string(),
    })
}

pub struct RecordingView {
    present: Cell<bool>,
    markup: RefCell<Option<String>>,
    renders: Cell<usize>,
    busy: RefCell<Vec<bool>>,
    options: RenderOptions,
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            present: Cell::new(true),
            markup: RefCell::new(None),
            renders: Cell::new(0),
            busy: RefCell::new(Vec::new()),
            options: RenderOptions {
                empty_state_message: "Aucune connexion active".to_string(),
                empty_state_style: EmptyStateStyle::Plain,
                link_base: String::new(),
            },
        }
    }

    pub fn absent() -> Self {
        let view = Self::new();
        view.present.set(false);
        view
    }

    pub fn set_present(&self, present: bool) {
        self.present.set(present);
    }

    pub fn markup(&self) -> Option<String> {
        self.markup.borrow().clone()
    }

    pub fn render_count(&self) -> usize {
        self.renders.get()
    }

    pub fn busy_history(&self) -> Vec<bool> {
        self.busy.borrow().clone()
    }
}

impl StatusView for RecordingView {
    fn container_present(&self) -> bool {
        self.present.get()
    }

    fn render_snapshot(&self, snapshot: &StatusSnapshot) {
        *self.markup.borrow_mut() = Some(render::render_snapshot(snapshot, &self.options));
        self.renders.set(self.renders.get() + 1);
    }

    fn set_trigger_busy(&self, busy: bool) {
        self.busy.borrow_mut().push(busy);
    }
}

/// Answers every fetch immediately with the same result.
pub struct FixedSource {
    result: RefCell<Result<StatusSnapshot, String>>,
    calls: Cell<usize>,
}

impl FixedSource {
    pub fn ok(snapshot: StatusSnapshot) -> Self {
        Self {
            result: RefCell::new(Ok(snapshot)),
            calls: Cell::new(0),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            result: RefCell::new(Err(reason.to_string())),
            calls: Cell::new(0),
        }
    }

    pub fn fail_with(&self, reason: &str) {
        *self.result.borrow_mut() = Err(reason.to_string());
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl SnapshotSource for FixedSource {
    async fn fetch_snapshot(&self) -> Result<StatusSnapshot, RefreshError> {
        self.calls.set(self.calls.get() + 1);
        match &*self.result.borrow() {
            Ok(snapshot) => Ok(snapshot.clone()),
            Err(reason) => Err(server_error(reason)),
        }
    }
}

type Reply = Result<StatusSnapshot, RefreshError>;

/// Each fetch waits on the next gate handed out by [`GatedSource::gate`].
pub struct GatedSource {
    pending: RefCell<VecDeque<oneshot::Receiver<Reply>>>,
}

impl GatedSource {
    pub fn new() -> Self {
        Self {
            pending: RefCell::new(VecDeque::new()),
        }
    }

    pub fn gate(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push_back(rx);
        tx
    }
}

impl SnapshotSource for GatedSource {
    async fn fetch_snapshot(&self) -> Result<StatusSnapshot, RefreshError> {
        let gate = self.pending.borrow_mut().pop_front();
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(server_error("gate dropped"))),
            None => Err(server_error("no gate prepared")),
        }
    }
}

/// Records every requested sleep. The first `immediate` sleeps resolve at
/// once; later ones park until [`ScriptedTimer::release`].
pub struct ScriptedTimer {
    immediate: usize,
    sleeps: RefCell<Vec<Duration>>,
    parked: RefCell<Vec<oneshot::Sender<()>>>,
}

impl ScriptedTimer {
    pub fn gated() -> Self {
        Self::immediate(0)
    }

    pub fn immediate(count: usize) -> Self {
        Self {
            immediate: count,
            sleeps: RefCell::new(Vec::new()),
            parked: RefCell::new(Vec::new()),
        }
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }

    pub fn release(&self) {
        for tx in self.parked.borrow_mut().drain(..) {
            let _ = tx.send(());
        }
    }
}

impl Timer for ScriptedTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        self.sleeps.borrow_mut().push(duration);
        if self.sleeps.borrow().len() <= self.immediate {
            return future::ready(()).left_future();
        }
        let (tx, rx) = oneshot::channel();
        self.parked.borrow_mut().push(tx);
        rx.map(|_| ()).right_future()
    }
}
