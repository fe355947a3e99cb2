pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{NodeConfig, ProcessEnv};
pub use core::node::NewsSearchNode;
pub use domain::model::{NewsRecord, SearchOutcome, SearchRequest};
pub use domain::ports::{EnvResolver, NewsSearchCapability, WorkflowLogger};
pub use utils::error::{NodeError, Result};
