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

//! Ordering guard for overlapping status requests.
//!
//! Every outgoing request takes a [`Ticket`]. A response may only be applied
//! if its ticket is newer than the newest one applied so far, so an old
//! request that resolves late can never paint over a newer snapshot.

use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn number(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct SequenceGuard {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl SequenceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        Ticket(next)
    }

    /// Record `ticket` as applied if it is the newest seen. Returns whether
    /// the caller should apply its response.
    pub fn try_apply(&self, ticket: Ticket) -> bool {
        if ticket.0 > self.applied.get() {
            self.applied.set(ticket.0);
            true
        } else {
            false
        }
    }

    pub fn last_applied(&self) -> u64 {
        self.applied.get()
    }
}
