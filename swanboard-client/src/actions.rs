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

//! Start/stop actions.
//!
//! In the browser these are plain links the user navigates to. Native
//! front-ends call [`StatusApiClient::perform_action`] instead, which issues
//! the same GET and ignores the page it redirects to.

use swanboard_types::ConnectionAction;

use crate::error::ApiError;
use crate::{parse_navigation_response, StatusApiClient};

impl StatusApiClient {
    /// URL of the action link for connection `name`.
    pub fn action_url(&self, action: ConnectionAction, name: &str) -> String {
        self.url(&action.path(name))
    }

    /// Trigger `action` on connection `name`.
    ///
    /// Calls `GET /connections/{start|stop}/{name}`.
    pub async fn perform_action(&self, action: ConnectionAction, name: &str) -> Result<(), ApiError> {
        let path = action.path(name);
        let response = self.get(&path).send().await?;
        log::info!("GET {path} -> {}", response.status());
        parse_navigation_response(response).await
    }
}
