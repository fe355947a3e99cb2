use crate::domain::ports::WorkflowLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("news_search_node=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("news_search_node=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// [`WorkflowLogger`] backed by the process-wide tracing subscriber. Used
/// when the node runs standalone; inside a host workflow the host supplies
/// its own logger.
#[derive(Debug, Clone, Default)]
pub struct TracingLogger;

impl WorkflowLogger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
