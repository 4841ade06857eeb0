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

//! Where snapshots come from.

use swanboard_client::{ApiError, StatusApiClient};
use swanboard_types::StatusSnapshot;
use thiserror::Error;

/// The one failure the poller knows about. Network errors, bad statuses,
/// login redirects and undecodable bodies all land here.
#[derive(Debug, Error)]
#[error("refresh failed: {0}")]
pub struct RefreshError(#[from] pub ApiError);

#[allow(async_fn_in_trait)]
pub trait SnapshotSource {
    async fn fetch_snapshot(&self) -> Result<StatusSnapshot, RefreshError>;
}

impl SnapshotSource for StatusApiClient {
    async fn fetch_snapshot(&self) -> Result<StatusSnapshot, RefreshError> {
        Ok(self.get_status().await?)
    }
}
