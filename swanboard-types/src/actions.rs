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

//! Navigational start/stop actions exposed for every connection.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionAction {
    Start,
    Stop,
}

impl ConnectionAction {
    pub const ALL: [ConnectionAction; 2] = [ConnectionAction::Start, ConnectionAction::Stop];

    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionAction::Start => "start",
            ConnectionAction::Stop => "stop",
        }
    }

    /// Site-relative path of the action, e.g. `/connections/start/db1`.
    ///
    /// The name is percent-encoded as one path segment, so names made of
    /// unreserved characters come out unchanged.
    pub fn path(self, name: &str) -> String {
        format!(
            "/connections/{}/{}",
            self.as_str(),
            urlencoding::encode(name)
        )
    }
}

impl fmt::Display for ConnectionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_verbatim() {
        assert_eq!(ConnectionAction::Start.path("db1"), "/connections/start/db1");
        assert_eq!(ConnectionAction::Stop.path("db1"), "/connections/stop/db1");
        assert_eq!(
            ConnectionAction::Start.path("site-b_2.lan~x"),
            "/connections/start/site-b_2.lan~x"
        );
    }

    #[test]
    fn separators_stay_inside_the_segment() {
        assert_eq!(
            ConnectionAction::Stop.path("a/b c"),
            "/connections/stop/a%2Fb%20c"
        );
    }
}
