use crate::domain::model::{SearchOutcome, SearchRequest};
use async_trait::async_trait;

/// Diagnostic logger injected by the host workflow framework. The node only
/// writes to it on failure paths.
pub trait WorkflowLogger: Send + Sync {
    fn error(&self, message: &str);
}

/// Environment-parameter registry seam. The host resolves named process-wide
/// parameters (API keys); tests substitute an in-memory map.
pub trait EnvResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<String>;
}

/// The node's typed contract: one search request in, one tagged outcome out.
/// Never returns an error; every failure is folded into
/// [`SearchOutcome::Failure`] after being logged.
#[async_trait]
pub trait NewsSearchCapability: Send + Sync {
    async fn search(&self, request: SearchRequest, logger: &dyn WorkflowLogger) -> SearchOutcome;
}
