//! 时间类型模块
//!
//! 后端以 RFC 3339 字符串下发时间戳。此模块提供：
//! - `Timestamp`: 可序列化的毫秒时间戳
//! - `parse_timestamp`: 宽容解析后端的几种时间格式
//! - `time_ago` / `format_date`: 列表视图使用的展示格式

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn as_secs(&self) -> i64 {
        self.0 / 1000
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

/// 解析后端下发的时间字符串
///
/// 依次尝试 RFC 3339（带偏移）与无偏移的朴素格式（按 UTC 处理），
/// 均失败时返回 None。
pub fn parse_timestamp(s: &str) -> Option<Timestamp> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Timestamp(dt.timestamp_millis()));
    }
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
    Some(Timestamp(
        Utc.from_utc_datetime(&naive).timestamp_millis(),
    ))
}

/// 相对时间展示（聊天列表、消息气泡）
///
/// `now` 由调用方提供，便于测试；未来的时间一律显示"刚刚"。
pub fn time_ago(ts: Timestamp, now: Timestamp) -> String {
    let secs = (now.as_secs() - ts.as_secs()).max(0);
    if secs < 60 {
        "刚刚".to_string()
    } else if secs < 3600 {
        format!("{} 分钟前", secs / 60)
    } else if secs < 86400 {
        format!("{} 小时前", secs / 3600)
    } else if secs < 86400 * 30 {
        format!("{} 天前", secs / 86400)
    } else {
        format_date(ts)
    }
}

/// 日期展示（作品卡片的创建/更新日期）
pub fn format_date(ts: Timestamp) -> String {
    match Utc.timestamp_millis_opt(ts.as_millis()).single() {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// 直接从后端字符串得到相对时间，解析失败时原样返回
pub fn time_ago_str(created_at: &str, now: Timestamp) -> String {
    match parse_timestamp(created_at) {
        Some(ts) => time_ago(ts, now),
        None => created_at.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        let ts = parse_timestamp("2024-01-15T10:30:00+09:00").unwrap();
        assert_eq!(ts.as_secs(), 1705282200);
    }

    #[test]
    fn parses_naive_as_utc() {
        let with_z = parse_timestamp("2024-01-15T01:30:00Z").unwrap();
        let naive = parse_timestamp("2024-01-15T01:30:00.000000").unwrap();
        assert_eq!(with_z, naive);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn time_ago_buckets() {
        let now = Timestamp::new(1_700_000_000_000);
        let ago = |secs: i64| Timestamp::new(now.as_millis() - secs * 1000);
        assert_eq!(time_ago(ago(10), now), "刚刚");
        assert_eq!(time_ago(ago(120), now), "2 分钟前");
        assert_eq!(time_ago(ago(7200), now), "2 小时前");
        assert_eq!(time_ago(ago(86400 * 3), now), "3 天前");
        // 超过一个月退化为日期
        assert_eq!(time_ago(ago(86400 * 40), now), format_date(ago(86400 * 40)));
        // 未来的时间不显示负值
        assert_eq!(time_ago(ago(-30), now), "刚刚");
    }

    #[test]
    fn formats_dates() {
        let ts = parse_timestamp("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(format_date(ts), "2024-01-15");
    }

    #[test]
    fn time_ago_str_falls_back_to_raw() {
        let now = Timestamp::new(0);
        assert_eq!(time_ago_str("not a date", now), "not a date");
    }
}
