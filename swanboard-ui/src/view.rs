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

//! The surface the poller draws on.
//!
//! The browser implementation lives in `dom` and binds to the container and
//! trigger elements by id; the terminal front-end prints instead. A view
//! whose elements are missing treats every call as a silent no-op.

use swanboard_types::StatusSnapshot;

pub trait StatusView {
    /// Whether the status container is currently part of the document.
    fn container_present(&self) -> bool;

    /// Replace the container's content with `snapshot`.
    fn render_snapshot(&self, snapshot: &StatusSnapshot);

    /// Put the refresh trigger into (or take it out of) its busy state.
    fn set_trigger_busy(&self, busy: bool);
}
