//! MCP `memory_inspect` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `memory_inspect` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MemoryInspectParams {
    /// ID of the entry to inspect.
    #[schemars(description = "ID of the entry to inspect")]
    pub id: u64,
}
