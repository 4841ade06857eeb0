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

use swanboard_cli::terminal::snapshot_lines;
use swanboard_client::StatusApiClient;
use swanboard_ui::PollerConfig;

pub async fn status(client: &StatusApiClient) -> anyhow::Result<()> {
    let snapshot = client.get_status().await?;
    let empty_message = PollerConfig::compact().empty_state_message;
    for line in snapshot_lines(&snapshot, &empty_message) {
        println!("{line}");
    }
    Ok(())
}
