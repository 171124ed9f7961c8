use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MemoryEvaluateParams {
    #[schemars(description = "ID of the entry being evaluated")]
    pub entry_id: u64,

    #[schemars(description = "true if the entry helped, false if it did not")]
    pub useful: bool,

    #[schemars(description = "Optional note explaining the evaluation")]
    pub feedback: Option<String>,
}
