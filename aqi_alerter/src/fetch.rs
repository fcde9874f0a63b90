use crate::error::{FetchError, body_excerpt};
use shared::cnemc::{StationRecord, decode_stations};
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

pub const MAX_FETCH_ATTEMPTS: u32 = 3;
const RETRY_BASE_DELAY: Duration = Duration::from_millis(500);
const STATUS_BODY_EXCERPT_BYTES: usize = 2048;

fn backoff_delay(attempt: u32) -> Duration {
    RETRY_BASE_DELAY * 2u32.pow(attempt)
}

/// Single GET against the feed. The whole request/response cycle is bounded
/// by the timeout configured on the client.
pub async fn fetch_stations(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<StationRecord>, FetchError> {
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(FetchError::Status {
            status,
            body: body_excerpt(&body, STATUS_BODY_EXCERPT_BYTES),
        });
    }
    let raw = resp.bytes().await?;
    Ok(decode_stations(&raw)?)
}

/// Retries transport and status failures up to `MAX_FETCH_ATTEMPTS`, sleeping
/// `500ms * 2^attempt` between attempts. Decode failures are not transient
/// and surface immediately; the last retried error is returned verbatim.
pub async fn fetch_with_retry(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<StationRecord>, FetchError> {
    let mut attempt = 0;
    loop {
        match fetch_stations(client, url).await {
            Ok(stations) => return Ok(stations),
            Err(err @ FetchError::Decode(_)) => return Err(err),
            Err(err) => {
                attempt += 1;
                if attempt >= MAX_FETCH_ATTEMPTS {
                    return Err(err);
                }
                let delay = backoff_delay(attempt - 1);
                warn!(attempt, error = %err, delay = ?delay, "fetch attempt failed, retrying");
                sleep(delay).await;
            }
        }
    }
}
