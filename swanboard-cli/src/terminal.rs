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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Plain-text rendering of snapshots and daemon statistics.

use std::cell::RefCell;
use std::io::Write;

use swanboard_types::{BadgeTone, DaemonStats, StatusSnapshot};
use swanboard_ui::render::format_bytes;
use swanboard_ui::StatusView;
use tracing::{debug, warn};

/// ANSI escape that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

fn tone_marker(tone: BadgeTone) -> &'static str {
    match tone {
        BadgeTone::Success => "+",
        BadgeTone::Warning => "~",
        BadgeTone::Danger => "!",
        BadgeTone::Secondary => "-",
    }
}

/// One line per connection, in snapshot order.
pub fn snapshot_lines(snapshot: &StatusSnapshot, empty_message: &str) -> Vec<String> {
    if snapshot.is_empty() {
        return vec![empty_message.to_string()];
    }
    let width = snapshot.names().map(|n| n.chars().count()).max().unwrap_or(0);
    snapshot
        .iter()
        .map(|(name, status)| {
            let mut line = format!(
                "[{}] {name:<width$}  {}",
                tone_marker(status.tone()),
                status.text()
            );
            if let Some(detail) = status.detail() {
                line.push_str(&format!(
                    "  (in {} / out {})",
                    format_bytes(detail.bytes_in),
                    format_bytes(detail.bytes_out)
                ));
            }
            line
        })
        .collect()
}

pub fn stats_lines(stats: &DaemonStats) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(running) = stats.uptime_running() {
        match stats.uptime_since() {
            Some(since) => lines.push(format!("uptime:   {running} (since {since})")),
            None => lines.push(format!("uptime:   {running}")),
        }
    }
    if let Some(total) = stats.workers_total() {
        lines.push(format!(
            "workers:  {total} total, {} idle, {} active",
            stats.workers_idle().unwrap_or(0),
            stats.workers_active().unwrap_or(0)
        ));
    }
    if let Some(total) = stats.ike_sas_total() {
        lines.push(format!(
            "IKE SAs:  {total} total, {} half-open",
            stats.ike_sas_half_open().unwrap_or(0)
        ));
    }
    let plugins = stats.plugins();
    if !plugins.is_empty() {
        lines.push(format!("plugins:  {}", plugins.join(" ")));
    }
    if lines.is_empty() {
        lines.push("no statistics reported".to_string());
    }
    lines
}

/// A [`StatusView`] that redraws the whole snapshot on a text stream.
///
/// The "container" is always present. The busy state has no visual
/// counterpart besides a debug log line.
pub struct TerminalView<W: Write> {
    out: RefCell<W>,
    empty_message: String,
    clear_between_frames: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, empty_message: impl Into<String>) -> Self {
        Self {
            out: RefCell::new(out),
            empty_message: empty_message.into(),
            clear_between_frames: false,
        }
    }

    /// Clear the screen before every frame, for `watch`.
    pub fn clearing(mut self) -> Self {
        self.clear_between_frames = true;
        self
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> StatusView for TerminalView<W> {
    fn container_present(&self) -> bool {
        true
    }

    fn render_snapshot(&self, snapshot: &StatusSnapshot) {
        let mut out = self.out.borrow_mut();
        let mut frame = String::new();
        if self.clear_between_frames {
            frame.push_str(CLEAR_SCREEN);
        }
        for line in snapshot_lines(snapshot, &self.empty_message) {
            frame.push_str(&line);
            frame.push('\n');
        }
        if let Err(e) = out.write_all(frame.as_bytes()).and_then(|_| out.flush()) {
            warn!("failed to write status: {e}");
        }
    }

    fn set_trigger_busy(&self, busy: bool) {
        debug!(busy, "refresh in progress");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(json: &str) -> StatusSnapshot {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn lines_follow_snapshot_order_and_align_names() {
        let lines = snapshot_lines(
            &snapshot(r#"{"db1":"established: 5 connections","backup-site":"connecting"}"#),
            "none",
        );
        assert_eq!(
            lines,
            vec![
                "[+] db1          established: 5 connections".to_string(),
                "[~] backup-site  connecting".to_string(),
            ]
        );
    }

    #[test]
    fn detail_records_show_traffic() {
        let lines = snapshot_lines(
            &snapshot(r#"{"db1":{"state":"established","bytes_in":1536,"bytes_out":320}}"#),
            "none",
        );
        assert_eq!(lines, vec!["[+] db1  established  (in 1.5 KiB / out 320 B)".to_string()]);
    }

    #[test]
    fn empty_snapshot_prints_the_message() {
        let lines = snapshot_lines(&StatusSnapshot::new(), "Aucune connexion active");
        assert_eq!(lines, vec!["Aucune connexion active".to_string()]);
    }

    #[test]
    fn view_writes_frames() {
        let view = TerminalView::new(Vec::new(), "none");
        view.render_snapshot(&snapshot(r#"{"db1":"error"}"#));
        view.render_snapshot(&snapshot("{}"));
        let written = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(written, "[!] db1  error\nnone\n");
    }

    #[test]
    fn clearing_view_prefixes_each_frame() {
        let view = TerminalView::new(Vec::new(), "none").clearing();
        view.render_snapshot(&snapshot("{}"));
        let written = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(written, format!("{CLEAR_SCREEN}none\n"));
    }

    #[test]
    fn stats_summary() {
        let stats: DaemonStats = serde_json::from_str(
            r#"{
                "uptime": {"running": "5 minutes", "since": "Oct 19 09:12:44 2026"},
                "workers": {"total": "16", "idle": "11",
                            "active": {"critical": "4", "high": "0", "medium": "1", "low": "0"}},
                "ikesas": {"total": "2", "half-open": "0"},
                "plugins": ["charon", "vici"]
            }"#,
        )
        .unwrap();
        assert_eq!(
            stats_lines(&stats),
            vec![
                "uptime:   5 minutes (since Oct 19 09:12:44 2026)".to_string(),
                "workers:  16 total, 11 idle, 5 active".to_string(),
                "IKE SAs:  2 total, 0 half-open".to_string(),
                "plugins:  charon vici".to_string(),
            ]
        );
    }

    #[test]
    fn empty_stats() {
        let stats: DaemonStats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats_lines(&stats), vec!["no statistics reported".to_string()]);
    }
}
