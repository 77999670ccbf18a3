//! In-browser stand-ins for the HTTP endpoints the app talks to.
//!
//! Every request is answered in-process from static fixtures after a short
//! artificial delay, so load ordering and the loading state behave the same
//! as against a real backend.

pub mod fixtures;
pub mod handlers;

/// Response shape handed back by the mock transport.
#[derive(Debug, Clone, PartialEq)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

/// Simulated network latency of the mocked endpoints.
const LATENCY_MS: u32 = 500;

/// Resolve a request path against the handler table after the simulated
/// latency. Paths without a registered handler fail like an unreachable host.
pub async fn fetch(path: &str) -> Result<MockResponse, String> {
    gloo_timers::future::TimeoutFuture::new(LATENCY_MS).await;
    handlers::dispatch(path).ok_or_else(|| format!("no mock handler for {}", path))
}
