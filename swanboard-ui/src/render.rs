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

//! Markup for the status container.
//!
//! [`render_snapshot`] is pure: it turns a snapshot into the complete
//! replacement content of the container. Every render replaces everything;
//! there is no diffing against the previous snapshot.

use std::fmt::Write;

use serde::Deserialize;
use swanboard_types::{ConnectionAction, ConnectionDetail, StatusSnapshot};

pub const START_LABEL: &str = "Démarrer";
pub const STOP_LABEL: &str = "Arrêter";

/// How the "no connections" placeholder is dressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyStateStyle {
    /// Centered, padded, with an info icon.
    Detailed,
    /// Muted text only.
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub empty_state_message: String,
    pub empty_state_style: EmptyStateStyle,
    /// Prepended to action paths. Empty keeps links site-relative.
    pub link_base: String,
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Binary-prefixed byte count, e.g. `320 B`, `1.5 KiB`.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

pub fn render_empty_state(options: &RenderOptions) -> String {
    let message = escape_html(&options.empty_state_message);
    match options.empty_state_style {
        EmptyStateStyle::Detailed => format!(
            r#"<p class="text-muted text-center py-4"><i class="fas fa-info-circle"></i> {message}</p>"#
        ),
        EmptyStateStyle::Plain => format!(r#"<p class="text-muted">{message}</p>"#),
    }
}

fn render_traffic(out: &mut String, detail: &ConnectionDetail) {
    let _ = write!(
        out,
        r#"<div class="connection-traffic small text-muted mt-1">↓ {} ↑ {}</div>"#,
        format_bytes(detail.bytes_in),
        format_bytes(detail.bytes_out)
    );
}

/// Render the container content for `snapshot`.
pub fn render_snapshot(snapshot: &StatusSnapshot, options: &RenderOptions) -> String {
    if snapshot.is_empty() {
        return render_empty_state(options);
    }

    let mut out = String::new();
    for (name, status) in snapshot.iter() {
        let escaped_name = escape_html(name);
        let _ = write!(
            out,
            concat!(
                r#"<div class="connection-status mb-2 p-2 border rounded" data-connection="{name}">"#,
                r#"<div class="d-flex justify-content-between align-items-center">"#,
                r#"<strong>{name}</strong>"#,
                r#"<span class="badge {tone}">{text}</span>"#,
                r#"</div>"#,
            ),
            name = escaped_name,
            tone = status.tone().css_class(),
            text = escape_html(status.text()),
        );
        if let Some(detail) = status.detail() {
            render_traffic(&mut out, detail);
        }
        let _ = write!(
            out,
            concat!(
                r#"<div class="mt-2">"#,
                r#"<a href="{start}" class="btn btn-sm btn-success">{start_label}</a> "#,
                r#"<a href="{stop}" class="btn btn-sm btn-danger">{stop_label}</a>"#,
                r#"</div></div>"#,
            ),
            start = escape_html(&action_href(options, ConnectionAction::Start, name)),
            stop = escape_html(&action_href(options, ConnectionAction::Stop, name)),
            start_label = START_LABEL,
            stop_label = STOP_LABEL,
        );
    }
    out
}

fn action_href(options: &RenderOptions, action: ConnectionAction, name: &str) -> String {
    format!("{}{}", options.link_base, action.path(name))
}
