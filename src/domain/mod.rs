// Domain layer: transient value types and ports (interfaces) for the node.
// No external collaborators beyond serde; the host framework lives behind the ports.

pub mod model;
pub mod ports;
pub mod schema;
