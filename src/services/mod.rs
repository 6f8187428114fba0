pub mod ai;
pub mod airports;
pub mod conversation;
pub mod dispatch;
pub mod extract;
pub mod flights;
pub mod intent;
pub mod responders;
pub mod weather;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

use anyhow::Context;

/// Shared client builder; every collaborator call is bounded by `timeout`.
pub(crate) fn http_client(timeout: Duration) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("failed to build HTTP client")
}
