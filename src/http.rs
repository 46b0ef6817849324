// src/http.rs
// Shared HTTP client for the generation request

use std::time::Duration;

/// Connect timeout. The request itself has no overall timeout.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the shared HTTP client.
///
/// Built once at startup and handed to the Gemini client. No retry and no
/// total request timeout: a generation runs until the service answers or
/// the transport fails.
pub fn create_shared_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .pool_max_idle_per_host(2)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
