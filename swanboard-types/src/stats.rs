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

//! The payload of `GET /api/stats`: charon daemon statistics.
//!
//! The daemon reports every counter as a string (`"16"`), so the accessors
//! below accept either JSON numbers or numeric strings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaemonStats(pub Map<String, Value>);

fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl DaemonStats {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn section(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key).and_then(Value::as_object)
    }

    fn count(&self, section: &str, key: &str) -> Option<u64> {
        self.section(section)?.get(key).and_then(as_count)
    }

    /// Human readable uptime, e.g. `"5 minutes"`.
    pub fn uptime_running(&self) -> Option<&str> {
        self.section("uptime")?.get("running")?.as_str()
    }

    pub fn uptime_since(&self) -> Option<&str> {
        self.section("uptime")?.get("since")?.as_str()
    }

    pub fn workers_total(&self) -> Option<u64> {
        self.count("workers", "total")
    }

    pub fn workers_idle(&self) -> Option<u64> {
        self.count("workers", "idle")
    }

    /// Busy workers summed over all priority classes.
    pub fn workers_active(&self) -> Option<u64> {
        match self.section("workers")?.get("active")? {
            Value::Object(classes) => Some(classes.values().filter_map(as_count).sum()),
            other => as_count(other),
        }
    }

    pub fn ike_sas_total(&self) -> Option<u64> {
        self.count("ikesas", "total")
    }

    pub fn ike_sas_half_open(&self) -> Option<u64> {
        self.count("ikesas", "half-open")
    }

    pub fn plugins(&self) -> Vec<&str> {
        self.0
            .get("plugins")
            .and_then(Value::as_array)
            .map(|plugins| plugins.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}
