//! Descriptor types the host workflow framework reads when registering the
//! node: display name, description, and the typed input/output parameter
//! tables.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Int,
    List,
}

/// One declared input parameter.
#[derive(Debug, Clone)]
pub struct InputSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    /// Default applied when the input is absent. `None` for required inputs.
    pub default: Option<Value>,
}

/// One declared output parameter.
#[derive(Debug, Clone)]
pub struct OutputSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub kind: ParamKind,
}

#[derive(Debug, Clone)]
pub struct NodeDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub inputs: Vec<InputSpec>,
    pub outputs: Vec<OutputSpec>,
}

impl NodeDescriptor {
    pub fn input(&self, key: &str) -> Option<&InputSpec> {
        self.inputs.iter().find(|spec| spec.key == key)
    }

    pub fn output(&self, key: &str) -> Option<&OutputSpec> {
        self.outputs.iter().find(|spec| spec.key == key)
    }
}
