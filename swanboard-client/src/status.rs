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

//! Read-only status endpoints: connection status and daemon statistics.

use swanboard_types::{DaemonStats, StatusSnapshot};

use crate::error::ApiError;
use crate::{parse_json_response, StatusApiClient};

pub const STATUS_PATH: &str = "/api/status";
pub const STATS_PATH: &str = "/api/stats";

impl StatusApiClient {
    /// Fetch the current connection snapshot.
    ///
    /// Calls `GET /api/status`.
    pub async fn get_status(&self) -> Result<StatusSnapshot, ApiError> {
        let response = self.get(STATUS_PATH).send().await?;
        log::debug!("GET {STATUS_PATH} -> {}", response.status());
        parse_json_response(response).await
    }

    /// Fetch charon daemon statistics.
    ///
    /// Calls `GET /api/stats`.
    pub async fn get_stats(&self) -> Result<DaemonStats, ApiError> {
        let response = self.get(STATS_PATH).send().await?;
        log::debug!("GET {STATS_PATH} -> {}", response.status());
        parse_json_response(response).await
    }
}
