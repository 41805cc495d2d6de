//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use trendscope_testing::{sample_trends, trends_body, StubServer};
use trendscope_types::TrendRecord;

pub struct ServerFixture {
    server: StubServer,
}

impl ServerFixture {
    /// Stub backend answering every request with a 200 and the given records.
    pub fn with_records(records: &[TrendRecord]) -> Self {
        Self {
            server: StubServer::ok(trends_body(records)),
        }
    }

    pub fn with_sample_data() -> Self {
        Self::with_records(&sample_trends())
    }

    /// Stub backend answering every request with a fixed error response.
    pub fn failing(status: u16, reason: &'static str, body: &str) -> Self {
        Self {
            server: StubServer::serve(status, reason, body.to_string()),
        }
    }

    /// A command wired to the stub. The env var is cleared so an ambient
    /// TRENDSCOPE_API_BASE on the test machine cannot leak in.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("trendscope").expect("binary builds");
        cmd.env_remove("TRENDSCOPE_API_BASE");
        cmd.arg("--api-base").arg(self.server.base_url());
        cmd
    }
}
