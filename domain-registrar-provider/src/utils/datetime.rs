//! 日期时间序列化/反序列化工具
//!
//! 提供自定义 Serde 序列化/反序列化支持：
//! - 序列化: `DateTime`<Utc> -> RFC3339 字符串
//! - 反序列化: RFC3339 字符串、Unix 时间戳（整数）或带小数的 epoch 秒（AWS JSON 协议） -> `DateTime`<Utc>

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// 序列化 Option<`DateTime`<Utc>> 为 Option<RFC3339 字符串>
pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
        None => serializer.serialize_none(),
    }
}

/// 反序列化：支持 RFC3339 字符串、Unix 时间戳（秒/毫秒自动识别）或浮点 epoch 秒
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OptionalTimestamp {
        String(String),
        I64(i64),
        F64(f64),
    }

    match Option::<OptionalTimestamp>::deserialize(deserializer)? {
        Some(OptionalTimestamp::String(s)) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
        Some(OptionalTimestamp::I64(ts)) => parse_unix_timestamp(ts)
            .map(Some)
            .ok_or_else(|| Error::custom("Invalid Unix timestamp")),
        Some(OptionalTimestamp::F64(ts)) => parse_epoch_seconds(ts)
            .map(Some)
            .ok_or_else(|| Error::custom("Invalid epoch seconds")),
        None => Ok(None),
    }
}

/// 解析 Unix 时间戳（自动判断秒/毫秒）
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // 如果时间戳 > 10^11，认为是毫秒
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

/// 解析带小数部分的 epoch 秒（如 `1704067200.123`）
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn parse_epoch_seconds(ts: f64) -> Option<DateTime<Utc>> {
    if !ts.is_finite() {
        return None;
    }
    let secs = ts.floor();
    let nanos = ((ts - secs) * 1_000_000_000.0).round() as u32;
    DateTime::from_timestamp(secs as i64, nanos.min(999_999_999))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(with = "super", default)]
        at: Option<DateTime<Utc>>,
    }

    fn parse(json: &str) -> Option<DateTime<Utc>> {
        serde_json::from_str::<Wrapper>(json).unwrap().at
    }

    #[test]
    fn rfc3339_string() {
        let at = parse(r#"{"at":"2024-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(at.timestamp(), 1_704_067_200);
    }

    #[test]
    fn integer_seconds() {
        let at = parse(r#"{"at":1704067200}"#).unwrap();
        assert_eq!(at.timestamp(), 1_704_067_200);
    }

    #[test]
    fn integer_millis() {
        let at = parse(r#"{"at":1704067200000}"#).unwrap();
        assert_eq!(at.timestamp(), 1_704_067_200);
    }

    #[test]
    fn fractional_seconds() {
        let at = parse(r#"{"at":1704067200.5}"#).unwrap();
        assert_eq!(at.timestamp(), 1_704_067_200);
        assert_eq!(at.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn missing_and_null() {
        assert!(parse(r"{}").is_none());
        assert!(parse(r#"{"at":null}"#).is_none());
    }

    #[test]
    fn non_finite_rejected() {
        assert!(parse_epoch_seconds(f64::NAN).is_none());
        assert!(parse_epoch_seconds(f64::INFINITY).is_none());
    }
}
