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

use std::io::stdout;
use std::rc::Rc;
use std::time::Duration;

use swanboard_cli::cli_args::Watch;
use swanboard_cli::terminal::TerminalView;
use swanboard_client::StatusApiClient;
use swanboard_ui::{
    schedule_auto_refresh, PlatformTimer, PollerConfig, RefreshOrigin, StatusPoller,
};
use tracing::info;

pub async fn watch(client: StatusApiClient, args: Watch) -> anyhow::Result<()> {
    let mut config = PollerConfig::compact();
    config.refresh_interval_ms = args.interval_ms;
    config.validate()?;

    let view = TerminalView::new(stdout(), config.empty_state_message.clone()).clearing();
    let poller = Rc::new(StatusPoller::new(
        client,
        view,
        PlatformTimer,
        Duration::from_millis(config.min_busy_ms),
    ));

    // Draw right away instead of leaving the screen blank for a full interval.
    poller.refresh(RefreshOrigin::Manual).await;

    let (task, handle) = schedule_auto_refresh(
        poller.clone(),
        Duration::from_millis(config.refresh_interval_ms),
    );

    tokio::select! {
        _ = task => {}
        result = tokio::signal::ctrl_c() => {
            handle.cancel();
            result?;
            info!("interrupted, stopping");
        }
    }
    Ok(())
}
