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

use clap::{Args, Parser, Subcommand};
use swanboard_ui::config::DEFAULT_REFRESH_INTERVAL_MS;
use url::Url;

/// Swanboard CLI
///
/// Shows the live state of the strongSwan connections managed by a swanboard
/// dashboard and starts or stops them.
///
/// The dashboard requires a logged-in session. Log in with a browser, copy
/// the `session=...` cookie and pass it with --session-cookie or the
/// SWANBOARD_SESSION environment variable.
#[derive(Parser, Debug)]
#[clap(name = "swanboard")]
pub struct Opt {
    /// Dashboard base URL.
    #[clap(long = "url", global = true, default_value = "http://127.0.0.1:5000")]
    pub url: Url,

    /// Value of the `Cookie` header sent with every request.
    #[clap(long = "session-cookie", global = true, env = "SWANBOARD_SESSION")]
    pub session_cookie: Option<String>,

    #[clap(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Fetch the connection status once and print it.
    Status,

    /// Keep the connection status on screen, refreshing on an interval.
    Watch(Watch),

    /// Print daemon statistics (uptime, workers, IKE SAs, plugins).
    Stats,

    /// Start a connection.
    Start(Target),

    /// Stop a connection.
    Stop(Target),
}

#[derive(Args, Debug, Clone)]
pub struct Watch {
    /// Milliseconds between refreshes.
    #[clap(long = "interval-ms", default_value_t = DEFAULT_REFRESH_INTERVAL_MS)]
    pub interval_ms: u64,
}

#[derive(Args, Debug, Clone)]
pub struct Target {
    /// Connection name as listed by `status`.
    pub name: String,
}
