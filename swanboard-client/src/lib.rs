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

//! Cross-platform REST client for the swanboard dashboard backend.
//!
//! Works on WASM (browser) and native targets via [`reqwest`].
//!
//! # Example
//!
//! ```no_run
//! use swanboard_client::{AuthMode, StatusApiClient};
//!
//! # async fn example() -> Result<(), swanboard_client::ApiError> {
//! // Browser: the dashboard session cookie is sent automatically
//! let client = StatusApiClient::new("http://localhost:5000", AuthMode::Browser)?;
//!
//! // Native: forward a session cookie obtained from a browser login
//! let client = StatusApiClient::new(
//!     "http://localhost:5000",
//!     AuthMode::SessionCookie("session=eyJ...".to_string()),
//! )?;
//!
//! let snapshot = client.get_status().await?;
//! for (name, status) in snapshot.iter() {
//!     println!("{name}: {}", status.text());
//! }
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod error;
pub mod status;

pub use error::ApiError;
pub use swanboard_types;

use reqwest::Client;

/// Path the backend redirects unauthenticated requests to.
const LOGIN_PATH: &str = "/login";

/// How the client presents the dashboard session.
#[derive(Debug, Clone)]
pub enum AuthMode {
    /// Browser mode: let `fetch` send the page's cookies.
    Browser,
    /// Attach `Cookie: <value>` to every request. Native targets only;
    /// browsers refuse to let scripts set this header.
    SessionCookie(String),
}

/// A typed REST client for the dashboard backend.
#[derive(Debug, Clone)]
pub struct StatusApiClient {
    base_url: String,
    auth: AuthMode,
    http: Client,
}

impl StatusApiClient {
    /// Create a client for the given backend base URL.
    ///
    /// The URL must be absolute (`http://` or `https://`); in the browser,
    /// pass the page origin for same-origin backends.
    pub fn new(base_url: &str, auth: AuthMode) -> Result<Self, ApiError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "base URL must be absolute, got '{base_url}'"
            )));
        }
        Ok(Self {
            base_url,
            auth,
            http: Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the forwarded session cookie.
    pub fn set_session_cookie(&mut self, cookie: String) {
        self.auth = AuthMode::SessionCookie(cookie);
    }

    /// Absolute URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a GET request with auth applied.
    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.apply_auth(self.http.get(self.url(path)))
    }

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            AuthMode::Browser => {
                #[cfg(target_arch = "wasm32")]
                {
                    builder.fetch_credentials_include()
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    builder
                }
            }
            AuthMode::SessionCookie(cookie) => builder.header(reqwest::header::COOKIE, cookie),
        }
    }
}

/// True when the (redirect-followed) response landed on the login page.
fn landed_on_login(response: &reqwest::Response) -> bool {
    response.url().path() == LOGIN_PATH
}

/// Map a non-success status to [`ApiError`], consuming the body for context.
async fn status_error(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    match status {
        401 => ApiError::NotAuthenticated,
        403 => ApiError::Forbidden(text),
        404 => ApiError::NotFound(text),
        _ => ApiError::ServerError { status, body: text },
    }
}

/// Parse a bare JSON body into `T`.
pub(crate) async fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(status_error(response).await);
    }
    if landed_on_login(&response) {
        return Err(ApiError::NotAuthenticated);
    }
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Accept any 2xx/3xx response; the body is a page we do not read.
pub(crate) async fn parse_navigation_response(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if landed_on_login(&response) {
        return Err(ApiError::NotAuthenticated);
    }
    if status.is_success() || status.is_redirection() {
        Ok(())
    } else {
        Err(status_error(response).await)
    }
}
