use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use shared::cnemc::{Factor, ProblemStation};
use std::fmt::Write;

const FACTOR_SEPARATOR: &str = "、";
const NO_FACTORS: &str = "无";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ALERT_TITLE: &str = "广州市空气质量监测站点数据异常警报";
const ALERT_LEAD: &str = "以下站点存在数据缺失问题，请及时关注：\n\n";
const ALERT_ADVISORY: &str = "> 请相关技术人员尽快检查设备状态和数据传输链路。";

/// Naive layouts the feed's `TimePoint` has been observed in, tried after
/// RFC3339.
const NAIVE_LAYOUTS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y/%m/%d %H:%M:%S"];

fn reformat_time_point(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).format(TIME_FORMAT).to_string());
    }
    for layout in NAIVE_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, layout) {
            return Some(dt.format(TIME_FORMAT).to_string());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.format(TIME_FORMAT).to_string());
    }
    // Unrecognized layout: use the raw value verbatim.
    Some(raw.to_string())
}

/// Time label for the alert heading, taken from the first problem station.
pub fn time_label(problems: &[ProblemStation]) -> String {
    problems
        .first()
        .and_then(|p| reformat_time_point(&p.station.time_point))
        .unwrap_or_else(|| "Unknown".to_string())
}

pub fn format_factors(factors: &[Factor]) -> String {
    if factors.is_empty() {
        return NO_FACTORS.to_string();
    }
    factors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(FACTOR_SEPARATOR)
}

/// WeChat Work markdown body. `None` when there is nothing to report.
pub fn compose_wechat(problems: &[ProblemStation]) -> Option<String> {
    if problems.is_empty() {
        return None;
    }

    let mut content = format!("## 🚨 {ALERT_TITLE}({})\n", time_label(problems));
    content.push_str(ALERT_LEAD);
    for problem in problems {
        let _ = write!(
            content,
            "**{}**\n<font color=\"warning\">缺失因子: {}</font>\n\n",
            problem.station.position_name.trim(),
            format_factors(&problem.missing),
        );
    }
    content.push_str(ALERT_ADVISORY);
    Some(content)
}

/// DingTalk markdown title and text. `None` when there is nothing to report.
pub fn compose_dingtalk(problems: &[ProblemStation]) -> Option<(String, String)> {
    if problems.is_empty() {
        return None;
    }

    let label = time_label(problems);
    let title = format!("{ALERT_TITLE}({label})");

    let mut text = format!("### 🚨 {ALERT_TITLE}\n#### {label}\n");
    text.push_str(ALERT_LEAD);
    for problem in problems {
        let _ = write!(
            text,
            "- **{}**\n  - 缺失因子: {}\n\n",
            problem.station.position_name.trim(),
            format_factors(&problem.missing),
        );
    }
    text.push_str(ALERT_ADVISORY);
    Some((title, text))
}
