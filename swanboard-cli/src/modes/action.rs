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

use anyhow::Context;
use swanboard_client::StatusApiClient;
use swanboard_types::ConnectionAction;
use tracing::info;

pub async fn action(
    client: &StatusApiClient,
    action: ConnectionAction,
    name: &str,
) -> anyhow::Result<()> {
    client
        .perform_action(action, name)
        .await
        .with_context(|| format!("{action} {name} failed"))?;
    info!("{action} requested for {name}");
    println!("{action} {name}: ok");
    Ok(())
}
