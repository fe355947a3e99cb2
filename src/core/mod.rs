pub mod node;

pub use crate::domain::model::{NewsRecord, SearchOutcome, SearchRequest};
pub use crate::domain::ports::{EnvResolver, NewsSearchCapability, WorkflowLogger};
pub use crate::utils::error::Result;
