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

//! The payload of `GET /api/status`.
//!
//! ```json
//! { "db1": "established: 5 connections", "api2": "reconnecting" }
//! ```
//!
//! An empty object means the backend has no connections configured.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::status::ConnectionStatus;

/// Connection name to status, in the order the backend sent them.
///
/// Names are unique. Inserting an existing name replaces its status and
/// keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    entries: Vec<(String, ConnectionStatus)>,
    /// Name to position in `entries`.
    index: HashMap<String, usize>,
}

impl StatusSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, status: impl Into<ConnectionStatus>) {
        let name = name.into();
        let status = status.into();
        match self.index.get(&name) {
            Some(&position) => self.entries[position].1 = status,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, status));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ConnectionStatus> {
        self.index
            .get(name)
            .map(|&position| &self.entries[position].1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConnectionStatus)> {
        self.entries
            .iter()
            .map(|(name, status)| (name.as_str(), status))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<N, S> FromIterator<(N, S)> for StatusSnapshot
where
    N: Into<String>,
    S: Into<ConnectionStatus>,
{
    fn from_iter<I: IntoIterator<Item = (N, S)>>(iter: I) -> Self {
        let mut snapshot = StatusSnapshot::new();
        for (name, status) in iter {
            snapshot.insert(name, status);
        }
        snapshot
    }
}

impl Serialize for StatusSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, status) in &self.entries {
            map.serialize_entry(name, status)?;
        }
        map.end()
    }
}

struct SnapshotVisitor;

impl<'de> Visitor<'de> for SnapshotVisitor {
    type Value = StatusSnapshot;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping connection names to statuses")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut snapshot = StatusSnapshot::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, status)) = access.next_entry::<String, ConnectionStatus>()? {
            snapshot.insert(name, status);
        }
        Ok(snapshot)
    }
}

impl<'de> Deserialize<'de> for StatusSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SnapshotVisitor)
    }
}
