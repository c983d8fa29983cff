//! 診断ログ Outbound ポート
//!
//! 外部コラボレータ（位置情報・検索・外部アプリ起動）のエラーは
//! ユーザー向けダイアログを出さず、このチャネルにのみ流す。
//! 出力は JSONL（1 レコード = 1 行）。

use crate::error::Error;
use serde::Serialize;
use std::collections::BTreeMap;

/// 現在時刻を ISO8601 (RFC3339) で返す。LogRecord の `ts` に使う。
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

/// 1 行分のログレコード
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// ISO8601 形式のタイムスタンプ
    pub ts: String,
    pub level: LogLevel,
    pub message: String,
    /// 例: cli, screen, store, map, search, location, navigation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// 例: lifecycle, error, render
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// 追加のキー・値
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, serde_json::Value>>,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            ts: now_iso8601(),
            level,
            message: message.into(),
            component: None,
            event: None,
            fields: None,
        }
    }

    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.fields
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value);
        self
    }
}

/// 診断ログを書き出す Outbound ポート
///
/// 実装は `common::adapter::FileJsonLog`（ファイルへ JSONL 追記）や
/// `NoopLog`（テスト用）など。
pub trait DiagnosticLog: Send + Sync {
    /// 1 レコードを書き出す
    fn log(&self, record: &LogRecord) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_record_serialize() {
        let rec = LogRecord::new(LogLevel::Warn, "search failed")
            .component("search")
            .event("error")
            .field("query", serde_json::json!("restaurant"));
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"level\":\"warn\""));
        assert!(json.contains("\"message\":\"search failed\""));
        assert!(json.contains("\"component\":\"search\""));
        assert!(json.contains("\"event\":\"error\""));
        assert!(json.contains("\"query\":\"restaurant\""));
    }

    #[test]
    fn test_log_record_omits_empty_options() {
        let rec = LogRecord::new(LogLevel::Info, "screen started");
        let json = serde_json::to_string(&rec).unwrap();
        assert!(!json.contains("component"));
        assert!(!json.contains("fields"));
    }
}
