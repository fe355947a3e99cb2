use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Result count used when the host supplies no `count` input (or a value
/// that is not an integer).
pub const DEFAULT_COUNT: u32 = 10;
pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 100;

// 佔位文字：標題/描述缺失時使用
pub const FALLBACK_TITLE: &str = "无标题";
pub const FALLBACK_DESCRIPTION: &str = "无描述";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub count: u32,
}

impl SearchRequest {
    /// Builds a request with the count defaulted and clamped to
    /// `[MIN_COUNT, MAX_COUNT]`. `None` covers both an absent `count`
    /// input and one the host could not coerce to an integer.
    pub fn new(query: impl Into<String>, count: Option<i64>) -> Self {
        Self {
            query: query.into(),
            count: clamp_count(count),
        }
    }
}

pub fn clamp_count(count: Option<i64>) -> u32 {
    let requested = count.unwrap_or(i64::from(DEFAULT_COUNT));
    requested.clamp(i64::from(MIN_COUNT), i64::from(MAX_COUNT)) as u32
}

/// One formatted news item. `title` and `description` are always non-empty
/// (placeholders fill in for absent fields); the remaining fields pass
/// through whatever the API returned, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRecord {
    pub title: String,
    pub description: String,
    pub url: String,
    pub date_published: String,
    pub provider: String,
}

impl NewsRecord {
    fn into_value(self) -> Value {
        json!({
            "title": self.title,
            "description": self.description,
            "url": self.url,
            "date_published": self.date_published,
            "provider": self.provider,
        })
    }
}

/// Tagged outcome of one node invocation. Either the full formatted list or
/// a single error message; never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    Success { records: Vec<NewsRecord> },
    Failure { message: String },
}

impl SearchOutcome {
    /// Converts the outcome into the mapping shape the host framework
    /// expects from `execute`: `success` plus either `news_results` or
    /// `error_message`.
    pub fn into_outputs(self) -> HashMap<String, Value> {
        let mut outputs = HashMap::new();
        match self {
            SearchOutcome::Success { records } => {
                outputs.insert("success".to_string(), Value::Bool(true));
                outputs.insert(
                    "news_results".to_string(),
                    Value::Array(records.into_iter().map(NewsRecord::into_value).collect()),
                );
            }
            SearchOutcome::Failure { message } => {
                outputs.insert("success".to_string(), Value::Bool(false));
                outputs.insert("error_message".to_string(), Value::String(message));
            }
        }
        outputs
    }
}
