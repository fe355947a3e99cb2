use crate::config::DEFAULT_ENDPOINT;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "news-search")]
#[command(about = "Search Bing News and print the formatted results")]
pub struct CliConfig {
    /// News keywords to search for
    pub query: String,

    #[arg(long, default_value_t = 10, help = "Number of results (1-100)")]
    pub count: i64,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)
    }
}
