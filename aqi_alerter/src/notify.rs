use crate::error::{DispatchError, body_excerpt};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

const WECHAT_WEBHOOK_ENDPOINT: &str = "https://qyapi.weixin.qq.com/cgi-bin/webhook/send";
const DINGTALK_WEBHOOK_ENDPOINT: &str = "https://oapi.dingtalk.com/robot/send";
const STATUS_BODY_EXCERPT_BYTES: usize = 4096;

#[derive(Debug, Serialize)]
struct WechatWebhook {
    msgtype: &'static str,
    markdown: WechatMarkdown,
}

#[derive(Debug, Serialize)]
struct WechatMarkdown {
    content: String,
}

#[derive(Debug, Serialize)]
struct DingTalkWebhook {
    msgtype: &'static str,
    markdown: DingTalkMarkdown,
    at: DingTalkAt,
}

#[derive(Debug, Serialize)]
struct DingTalkMarkdown {
    title: String,
    text: String,
}

#[derive(Debug, Serialize)]
struct DingTalkAt {
    #[serde(rename = "isAtAll")]
    is_at_all: bool,
}

/// POSTs the envelope and validates both the HTTP status and the robot API's
/// application-level `errcode`. Both robot APIs answer 200 with a JSON body
/// carrying `errcode`/`errmsg`; a body that does not parse as an object is
/// accepted on HTTP success alone.
async fn post_webhook<T: Serialize>(
    client: &reqwest::Client,
    url: &str,
    payload: &T,
) -> Result<(), DispatchError> {
    let resp = client.post(url).json(payload).send().await?;
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let body = body_excerpt(&body, STATUS_BODY_EXCERPT_BYTES);

    if !status.is_success() {
        return Err(DispatchError::Status { status, body });
    }

    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(&body)
        && let Some(code) = object.get("errcode").and_then(Value::as_i64)
        && code != 0
    {
        return Err(DispatchError::Application { code, body });
    }

    debug!(status = %status, "webhook accepted");
    Ok(())
}

/// Sends a composed markdown alert to WeChat Work. An empty key means the
/// channel is disabled: returns success without touching the network.
pub async fn send_to_wechat(
    client: &reqwest::Client,
    webhook_key: &str,
    content: String,
) -> Result<(), DispatchError> {
    let webhook_key = webhook_key.trim();
    if webhook_key.is_empty() {
        return Ok(());
    }
    let url = format!("{WECHAT_WEBHOOK_ENDPOINT}?key={webhook_key}");
    let payload = WechatWebhook {
        msgtype: "markdown",
        markdown: WechatMarkdown { content },
    };
    post_webhook(client, &url, &payload).await
}

/// Sends a composed markdown alert to DingTalk. An empty token means the
/// channel is disabled: returns success without touching the network.
pub async fn send_to_dingtalk(
    client: &reqwest::Client,
    access_token: &str,
    title: String,
    text: String,
) -> Result<(), DispatchError> {
    let access_token = access_token.trim();
    if access_token.is_empty() {
        return Ok(());
    }
    let url = format!("{DINGTALK_WEBHOOK_ENDPOINT}?access_token={access_token}");
    let payload = DingTalkWebhook {
        msgtype: "markdown",
        markdown: DingTalkMarkdown { title, text },
        at: DingTalkAt { is_at_all: false },
    };
    post_webhook(client, &url, &payload).await
}
