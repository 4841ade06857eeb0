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

//! [`StatusView`] over the live document.
//!
//! Elements are looked up by id on every call rather than cached, so a
//! container that is removed (or re-inserted) by the page is noticed on the
//! next tick.

use swanboard_types::StatusSnapshot;
use web_sys::{Document, Element};

use crate::config::{PollerConfig, TriggerLabels};
use crate::render::{self, RenderOptions};
use crate::view::StatusView;

pub struct DomStatusView {
    document: Document,
    container_id: String,
    trigger_id: String,
    trigger_labels: Option<TriggerLabels>,
    render_options: RenderOptions,
}

impl DomStatusView {
    pub fn new(document: Document, config: &PollerConfig) -> Self {
        Self {
            document,
            container_id: config.container_id.clone(),
            trigger_id: config.trigger_id.clone(),
            trigger_labels: config.trigger_labels.clone(),
            render_options: config.render_options(),
        }
    }

    pub fn container(&self) -> Option<Element> {
        self.document.get_element_by_id(&self.container_id)
    }

    pub fn trigger(&self) -> Option<Element> {
        self.document.get_element_by_id(&self.trigger_id)
    }
}

impl StatusView for DomStatusView {
    fn container_present(&self) -> bool {
        self.container().is_some()
    }

    fn render_snapshot(&self, snapshot: &StatusSnapshot) {
        if let Some(container) = self.container() {
            container.set_inner_html(&render::render_snapshot(snapshot, &self.render_options));
        }
    }

    fn set_trigger_busy(&self, busy: bool) {
        let Some(trigger) = self.trigger() else {
            return;
        };
        let result = if busy {
            trigger
                .set_attribute("disabled", "")
                .and_then(|_| trigger.set_attribute("aria-busy", "true"))
        } else {
            trigger
                .remove_attribute("disabled")
                .and_then(|_| trigger.remove_attribute("aria-busy"))
        };
        if let Err(e) = result {
            log::warn!("failed to update refresh trigger state: {e:?}");
        }
        if let Some(labels) = &self.trigger_labels {
            trigger.set_inner_html(if busy { &labels.busy } else { &labels.idle });
        }
    }
}
