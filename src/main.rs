use clap::Parser;
use news_search_node::utils::{logger, validation::Validate};
use news_search_node::{CliConfig, NewsSearchNode, NodeConfig, ProcessEnv};
use serde_json::{json, Value};
use std::collections::HashMap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting news-search CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let config = NodeConfig::from_env(&ProcessEnv).with_endpoint(cli.endpoint.clone());
    let node = NewsSearchNode::new(config)?;

    let inputs: HashMap<String, Value> = HashMap::from([
        ("query".to_string(), json!(cli.query)),
        ("count".to_string(), json!(cli.count)),
    ]);

    let logger = logger::TracingLogger;
    let outputs = node.execute(&inputs, &logger).await;

    let succeeded = outputs
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    println!("{}", serde_json::to_string_pretty(&outputs)?);

    if succeeded {
        tracing::info!("✅ News search completed successfully");
    } else {
        tracing::error!("❌ News search failed");
        std::process::exit(1);
    }

    Ok(())
}
