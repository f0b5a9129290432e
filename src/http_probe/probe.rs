use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use super::outcome::ProbeOutcome;
use super::{is_refused, report};

fn target_url(host: &str, port: u16, path: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("http://{host}:{port}{path}"))
}

/// Issues a single GET against the target and classifies whatever comes back.
///
/// The request future is bounded by `timeout`: when the deadline fires the
/// in-flight request is dropped, releasing the connection, and the attempt
/// classifies as [`ProbeOutcome::Timeout`]. Exactly one outcome is produced
/// per call; there are no retries.
pub async fn run_probe(
    client: &Client,
    host: &str,
    port: u16,
    path: &str,
    timeout: Duration,
) -> ProbeOutcome {
    let url = match target_url(host, port, path) {
        Ok(url) => url,
        Err(err) => return ProbeOutcome::NetworkError(err.to_string()),
    };

    match client.get(url).timeout(timeout).send().await {
        Ok(response) => {
            let status = response.status();
            if status == StatusCode::OK {
                ProbeOutcome::Success
            } else {
                ProbeOutcome::UnexpectedStatus(status.as_u16())
            }
        }
        Err(err) => classify_error(&err),
    }
}

// Timeout is checked first: a timed-out connect attempt carries transport
// errors in its chain and must still classify as Timeout.
fn classify_error(err: &reqwest::Error) -> ProbeOutcome {
    if err.is_timeout() {
        ProbeOutcome::Timeout
    } else if is_refused(err) {
        ProbeOutcome::ConnectionRefused
    } else {
        ProbeOutcome::NetworkError(report(err))
    }
}
