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

use swanboard_cli::terminal::stats_lines;
use swanboard_client::StatusApiClient;

pub async fn stats(client: &StatusApiClient) -> anyhow::Result<()> {
    let stats = client.get_stats().await?;
    for line in stats_lines(&stats) {
        println!("{line}");
    }
    Ok(())
}
