//! Shared fixtures for pull request submission tests

#![allow(dead_code)]

use pr_github::{Credential, GitHubClient, PullRequestSpec, RepositoryCoordinates};
use std::time::Duration;
use tokio::net::TcpListener;

pub const TEST_TOKEN: &str = "ghp_test_token_1234567890";

pub fn credential() -> Credential {
    Credential::new(TEST_TOKEN).expect("test token is not blank")
}

pub fn coords() -> RepositoryCoordinates {
    RepositoryCoordinates::new("Ryjen1", "stakingDapp").expect("valid coordinates")
}

pub fn spec() -> PullRequestSpec {
    PullRequestSpec::new(
        "feat: Enhance Form Input Styling (#14)",
        "feature/optimize-card-layout-spacing",
        "main",
        "## Enhanced Form Input Styling\n\n- Floating labels\n- Error states ✨",
    )
    .expect("valid spec")
}

pub fn client_for(api_base: &str) -> GitHubClient {
    GitHubClient::builder()
        .api_base(api_base)
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build client")
}

/// Accept connections and never answer them
///
/// mockito always answers eventually, so client timeouts need a peer that
/// holds the connection open without responding.
pub async fn serve_silence() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("listener has an address");

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    format!("http://{}", addr)
}
