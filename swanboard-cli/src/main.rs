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

use clap::Parser;
mod modes;

use swanboard_cli::cli_args::{Mode, Opt};
use swanboard_client::{AuthMode, StatusApiClient};
use swanboard_types::ConnectionAction;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;

// The poller and its views live in `Rc`s, so everything stays on one thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // `try_init` also routes the libraries' `log` records into tracing.
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .finish()
        .try_init()?;

    let opt = Opt::parse();

    let auth = match opt.session_cookie {
        Some(cookie) => AuthMode::SessionCookie(cookie),
        None => {
            debug!("no session cookie given, requests will be anonymous");
            AuthMode::Browser
        }
    };
    let client = StatusApiClient::new(opt.url.as_str(), auth)?;

    match opt.mode {
        Mode::Status => modes::status::status(&client).await?,
        Mode::Watch(w) => modes::watch::watch(client, w).await?,
        Mode::Stats => modes::stats::stats(&client).await?,
        Mode::Start(t) => modes::action::action(&client, ConnectionAction::Start, &t.name).await?,
        Mode::Stop(t) => modes::action::action(&client, ConnectionAction::Stop, &t.name).await?,
    };

    Ok(())
}
