//! MCP `memory_recall` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `memory_recall` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MemoryRecallParams {
    /// Natural language query, matched by TF-IDF relevance.
    #[schemars(description = "Natural language query to search stored knowledge")]
    pub query: String,

    /// Maximum number of results to return. Defaults to 10.
    #[schemars(description = "Maximum number of results to return. Defaults to 10.")]
    pub limit: Option<usize>,

    /// Only return entries with exactly this category.
    #[schemars(description = "Only return entries in this category (exact match)")]
    pub category: Option<String>,

    /// Minimum adjusted score. Defaults to 0.1.
    #[schemars(description = "Minimum relevance score. Defaults to 0.1.")]
    pub min_score: Option<f64>,
}
