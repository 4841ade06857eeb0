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

//! Native timer primitives backed by `tokio`.

use std::time::Duration;

/// Sleep for `duration`.
///
/// **Important:** must be polled inside a tokio runtime with the time driver
/// enabled.
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{PlatformTimer, Timer};

    #[tokio::test(start_paused = true)]
    async fn test_platform_timer_waits_the_full_duration() {
        let start = tokio::time::Instant::now();
        PlatformTimer.sleep(Duration::from_millis(1_000)).await;
        assert!(start.elapsed() >= Duration::from_millis(1_000));
    }
}
