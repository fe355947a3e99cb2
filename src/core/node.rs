use crate::config::NodeConfig;
use crate::domain::model::{
    NewsRecord, SearchOutcome, SearchRequest, DEFAULT_COUNT, FALLBACK_DESCRIPTION, FALLBACK_TITLE,
};
use crate::domain::ports::{NewsSearchCapability, WorkflowLogger};
use crate::domain::schema::{InputSpec, NodeDescriptor, OutputSpec, ParamKind};
use crate::utils::error::{NodeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;

pub const NAME: &str = "Bing News Search";
pub const DESCRIPTION: &str = "使用 Bing 搜索新闻，返回新闻标题和描述";

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// A single news-search unit of work: one GET against the Bing News Search
/// endpoint per invocation, stateless across calls. The API key and endpoint
/// are resolved once, at construction.
pub struct NewsSearchNode {
    config: NodeConfig,
    client: Client,
}

impl NewsSearchNode {
    pub fn new(config: NodeConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { config, client })
    }

    /// Schema the host registry reads: NAME, DESCRIPTION, INPUTS, OUTPUTS.
    pub fn descriptor() -> NodeDescriptor {
        NodeDescriptor {
            name: NAME,
            description: DESCRIPTION,
            inputs: vec![
                InputSpec {
                    key: "query",
                    label: "搜索关键词",
                    description: "输入要搜索的新闻关键词",
                    kind: ParamKind::String,
                    required: true,
                    default: None,
                },
                InputSpec {
                    key: "count",
                    label: "结果数量",
                    description: "返回的新闻数量（1-100）",
                    kind: ParamKind::Int,
                    required: false,
                    default: Some(Value::from(DEFAULT_COUNT)),
                },
            ],
            outputs: vec![OutputSpec {
                key: "news_results",
                label: "新闻结果",
                description: "包含新闻标题和描述的列表",
                kind: ParamKind::List,
            }],
        }
    }

    /// Host-facing entry point. Takes the untyped inputs mapping, returns the
    /// outputs mapping (`success` plus `news_results` or `error_message`).
    /// A missing `query` fails before any network call is made; every failure
    /// path writes exactly one message to the injected logger.
    pub async fn execute(
        &self,
        inputs: &HashMap<String, Value>,
        logger: &dyn WorkflowLogger,
    ) -> HashMap<String, Value> {
        let outcome = match request_from_inputs(inputs) {
            Ok(request) => self.search(request, logger).await,
            Err(e) => {
                let message = e.to_string();
                logger.error(&format!("Bing News 搜索失败: {}", message));
                SearchOutcome::Failure { message }
            }
        };
        outcome.into_outputs()
    }

    async fn fetch(&self, request: &SearchRequest) -> Result<Vec<NewsRecord>> {
        tracing::debug!("Making API request to: {}", self.config.endpoint);

        let count = request.count.to_string();
        let response = self
            .client
            .get(&self.config.endpoint)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.api_key)
            .query(&[
                ("q", request.query.as_str()),
                ("count", count.as_str()),
                ("textDecorations", "true"),
                ("textFormat", "HTML"),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(NodeError::HttpStatusError { status });
        }

        let body: Value = response.json().await?;

        // 缺失 value 視為空列表
        let news_list = body
            .get("value")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        Ok(format_news_results(news_list))
    }
}

#[async_trait]
impl NewsSearchCapability for NewsSearchNode {
    async fn search(&self, request: SearchRequest, logger: &dyn WorkflowLogger) -> SearchOutcome {
        match self.fetch(&request).await {
            Ok(records) => SearchOutcome::Success { records },
            Err(e) => {
                let message = e.to_string();
                logger.error(&format!("Bing News 搜索失败: {}", message));
                SearchOutcome::Failure { message }
            }
        }
    }
}

fn request_from_inputs(inputs: &HashMap<String, Value>) -> Result<SearchRequest> {
    let query = inputs
        .get("query")
        .and_then(Value::as_str)
        .filter(|q| !q.is_empty())
        .ok_or(NodeError::MissingParameterError { name: "query" })?;

    // 非整數的 count 回退到預設值
    let count = inputs.get("count").and_then(Value::as_i64);

    Ok(SearchRequest::new(query, count))
}

/// 格式化新聞搜尋結果：保持 API 回傳順序，缺失欄位以佔位文字補上
fn format_news_results(news_list: &[Value]) -> Vec<NewsRecord> {
    news_list
        .iter()
        .map(|news| NewsRecord {
            title: text_field(news, "name", FALLBACK_TITLE),
            description: text_field(news, "description", FALLBACK_DESCRIPTION),
            url: text_field(news, "url", ""),
            date_published: text_field(news, "datePublished", ""),
            provider: news
                .get("provider")
                .and_then(Value::as_array)
                .and_then(|providers| providers.first())
                .and_then(|provider| provider.get("name"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}

fn text_field(news: &Value, key: &str, fallback: &str) -> String {
    news.get(key)
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}
