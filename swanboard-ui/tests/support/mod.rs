// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for the browser status view tests.
//
// Provides fixture elements (container + trigger with per-test ids) and a
// config pointing at them, so individual test files stay focused on
// assertions rather than DOM boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use swanboard_ui::PollerConfig;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

pub struct Fixture {
    pub container: web_sys::Element,
    pub trigger: web_sys::Element,
    pub config: PollerConfig,
}

/// Attach a status container and a refresh button to `<body>`, with ids
/// derived from `tag` so tests do not see each other's elements.
pub fn create_fixture(tag: &str, mut config: PollerConfig) -> Fixture {
    let document = gloo_utils::document();
    let body = document.body().unwrap();

    let container = document.create_element("div").unwrap();
    container.set_id(&format!("{tag}-status"));
    body.append_child(&container).unwrap();

    let trigger = document.create_element("button").unwrap();
    trigger.set_id(&format!("{tag}-refresh"));
    trigger.set_inner_html("Actualiser");
    body.append_child(&trigger).unwrap();

    config.container_id = container.id();
    config.trigger_id = trigger.id();
    // Nothing listens here; fetches fail fast and are only logged.
    config.api_base_url = "http://127.0.0.1:9".to_string();

    Fixture {
        container,
        trigger,
        config,
    }
}

/// Remove an element from `<body>` so subsequent tests start clean.
pub fn cleanup(element: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(element)
        .ok();
}

pub fn cleanup_fixture(fixture: &Fixture) {
    cleanup(&fixture.container);
    cleanup(&fixture.trigger);
}
