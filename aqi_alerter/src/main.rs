mod alert;
mod error;
mod fetch;
mod notify;

use crate::alert::{compose_dingtalk, compose_wechat};
use crate::error::MainError;
use crate::fetch::fetch_with_retry;
use crate::notify::{send_to_dingtalk, send_to_wechat};
use shared::cnemc::{AQI_PUBLISH_LIVE_ENDPOINT, IGNORED_STATIONS, select_problem_stations};
use shared::load_config;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), MainError> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config().inspect_err(|e| {
        error!(error = ?e, "configuration could not be initialized");
    })?;

    if !config.wechat_enabled() && !config.dingtalk_enabled() {
        warn!("no webhook configured, running fetch and classification only");
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;

    let stations = fetch_with_retry(&client, AQI_PUBLISH_LIVE_ENDPOINT)
        .await
        .inspect_err(|e| {
            error!(error = %e, "failed to fetch station data");
        })?;
    info!(count = stations.len(), "fetched station records");

    let problems = select_problem_stations(stations, IGNORED_STATIONS);
    if problems.is_empty() {
        info!("all non-ignored stations reported complete data");
        return Ok(());
    }

    // Channel failures are logged but do not abort the run or each other.
    if config.wechat_enabled()
        && let Some(content) = compose_wechat(&problems)
    {
        match send_to_wechat(&client, &config.wechat_webhook_key, content).await {
            Ok(()) => info!("alert delivered to WeChat Work"),
            Err(e) => warn!(error = %e, "failed to deliver alert to WeChat Work"),
        }
    }

    if config.dingtalk_enabled()
        && let Some((title, text)) = compose_dingtalk(&problems)
    {
        match send_to_dingtalk(&client, &config.dingtalk_access_token, title, text).await {
            Ok(()) => info!("alert delivered to DingTalk"),
            Err(e) => warn!(error = %e, "failed to deliver alert to DingTalk"),
        }
    }

    info!(
        count = problems.len(),
        "problem stations found (ignore list excluded)"
    );

    Ok(())
}
