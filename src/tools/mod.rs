pub mod memory_evaluate;
pub mod memory_inspect;
pub mod memory_learn;
pub mod memory_recall;
pub mod memory_suggest;

use chrono::Utc;
use memory_evaluate::MemoryEvaluateParams;
use memory_inspect::MemoryInspectParams;
use memory_learn::MemoryLearnParams;
use memory_recall::MemoryRecallParams;
use memory_suggest::MemorySuggestParams;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use serde::Serialize;
use std::sync::{Arc, Mutex};

use cairn::config::CairnConfig;
use cairn::knowledge::score::Ranking;
use cairn::knowledge::search::{inspect_entry, recall, EntryDetail, RecallQuery};
use cairn::knowledge::store::{learn, NewEntry};
use cairn::knowledge::{evaluate, patterns, stats, suggest};
use cairn::storage::Storage;

/// The Cairn MCP tool handler. Holds shared state (storage handle, config)
/// and exposes all MCP tools via the `#[tool_router]` macro.
#[derive(Clone)]
pub struct CairnTools {
    tool_router: ToolRouter<Self>,
    storage: Arc<Mutex<Storage>>,
    config: Arc<CairnConfig>,
}

#[tool_router]
impl CairnTools {
    pub fn new(storage: Arc<Mutex<Storage>>, config: Arc<CairnConfig>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            storage,
            config,
        }
    }

    /// Store a new knowledge entry.
    #[tool(description = "Store a knowledge entry with optional category, tags and source. The search index is rebuilt after every write.")]
    async fn memory_learn(
        &self,
        Parameters(params): Parameters<MemoryLearnParams>,
    ) -> Result<String, String> {
        tracing::info!(
            content_len = params.content.len(),
            category = ?params.category,
            "memory_learn called"
        );

        let new_entry = NewEntry {
            content: params.content,
            category: params.category,
            tags: params.tags.unwrap_or_default(),
            source: params.source,
        };

        self.with_storage("learn", move |storage| {
            let mut kb = storage.load_knowledge();
            let (result, index) = learn(&mut kb, new_entry, Utc::now())?;
            storage.save_knowledge(&kb)?;
            storage.save_index(&index)?;
            tracing::info!(id = result.id, total = result.total_entries, "entry learned");
            Ok(result)
        })
        .await
    }

    /// Retrieve entries ranked by relevance to a query.
    #[tool(description = "Search stored knowledge by natural language query. Returns entries ranked by TF-IDF cosine similarity with recency and usefulness adjustments.")]
    async fn memory_recall(
        &self,
        Parameters(params): Parameters<MemoryRecallParams>,
    ) -> Result<String, String> {
        tracing::info!(query = %params.query, "memory_recall called");

        let retrieval = &self.config.retrieval;
        let limit = params.limit.unwrap_or(retrieval.default_limit);
        let min_score = params.min_score.unwrap_or(retrieval.min_score);
        let ranking = Ranking::from_config(retrieval);

        self.with_storage("recall", move |storage| {
            let mut kb = storage.load_knowledge();
            let index = storage.index_or_rebuild(&kb);
            let query = RecallQuery {
                text: &params.query,
                limit,
                category: params.category.as_deref(),
                min_score,
            };
            let response = recall(&mut kb, &index, &query, &ranking, Utc::now());
            if response.touched_entries() {
                storage.save_knowledge(&kb)?;
            }
            Ok(response)
        })
        .await
    }

    /// Get statistics about the knowledge store.
    #[tool(description = "Get knowledge store statistics: entry counts by category, total accesses, average usefulness, index size.")]
    async fn memory_stats(&self) -> Result<String, String> {
        tracing::info!("memory_stats called");

        self.with_storage("stats", |storage| {
            let kb = storage.load_knowledge();
            let index = storage.load_index();
            Ok(stats::memory_stats(&kb, index.as_ref(), storage.size_bytes()))
        })
        .await
    }

    /// Analyze category, tag and access patterns.
    #[tool(description = "Analyze stored knowledge: category and tag frequencies, co-occurring tag pairs, and most accessed entries. Needs at least 3 entries.")]
    async fn memory_patterns(&self) -> Result<String, String> {
        tracing::info!("memory_patterns called");

        let config = Arc::clone(&self.config);
        self.with_storage("patterns", move |storage| {
            let kb = storage.load_knowledge();
            Ok(patterns::memory_patterns(&kb, &config.patterns))
        })
        .await
    }

    /// Suggest relevant knowledge for a task context.
    #[tool(description = "Suggest stored knowledge relevant to a context, classified as warning, recommendation, best_practice or related.")]
    async fn memory_suggest(
        &self,
        Parameters(params): Parameters<MemorySuggestParams>,
    ) -> Result<String, String> {
        tracing::info!(context_len = params.context.len(), "memory_suggest called");

        let config = Arc::clone(&self.config);
        self.with_storage("suggest", move |storage| {
            let mut kb = storage.load_knowledge();
            let index = storage.index_or_rebuild(&kb);
            let ranking = Ranking::from_config(&config.retrieval);
            let response = suggest::suggest(
                &mut kb,
                &index,
                &params.context,
                &config.suggest,
                &ranking,
                Utc::now(),
            );
            if response.touched_entries() {
                storage.save_knowledge(&kb)?;
            }
            Ok(response)
        })
        .await
    }

    /// Record usefulness feedback for an entry.
    #[tool(description = "Mark an entry as useful or not useful, optionally with a feedback note. Usefulness influences future ranking.")]
    async fn memory_evaluate(
        &self,
        Parameters(params): Parameters<MemoryEvaluateParams>,
    ) -> Result<String, String> {
        tracing::info!(id = params.entry_id, useful = params.useful, "memory_evaluate called");

        self.with_storage("evaluate", move |storage| {
            let mut kb = storage.load_knowledge();
            let result = evaluate::evaluate(
                &mut kb,
                params.entry_id,
                params.useful,
                params.feedback.as_deref(),
                Utc::now(),
            )?;
            storage.save_knowledge(&kb)?;
            Ok(result)
        })
        .await
    }

    /// Inspect a specific entry by ID.
    #[tool(description = "Inspect an entry by ID. Returns full content, metadata, access count and feedback history.")]
    async fn memory_inspect(
        &self,
        Parameters(params): Parameters<MemoryInspectParams>,
    ) -> Result<String, String> {
        tracing::info!(id = params.id, "memory_inspect called");

        self.with_storage("inspect", move |storage| {
            let kb = storage.load_knowledge();
            Ok(EntryDetail::from(inspect_entry(&kb, params.id)?))
        })
        .await
    }
}

impl CairnTools {
    /// Run one load → compute → save cycle on a blocking thread, holding the
    /// storage lock for its whole duration so requests never interleave.
    async fn with_storage<T, F>(&self, op: &'static str, f: F) -> Result<String, String>
    where
        T: Serialize + Send + 'static,
        F: FnOnce(&Storage) -> anyhow::Result<T> + Send + 'static,
    {
        let storage = Arc::clone(&self.storage);
        let result = tokio::task::spawn_blocking(move || {
            let storage = storage
                .lock()
                .map_err(|e| anyhow::anyhow!("storage lock poisoned: {e}"))?;
            f(&storage)
        })
        .await
        .map_err(|e| format!("{op} task failed: {e}"))?
        .map_err(|e| {
            tracing::warn!(op, error = %e, "tool call failed");
            format!("{op} failed: {e}")
        })?;

        serde_json::to_string(&result).map_err(|e| format!("serialization failed: {e}"))
    }
}

#[tool_handler]
impl ServerHandler for CairnTools {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            instructions: Some(
                "Cairn is a local knowledge store. Use memory_learn to save knowledge, \
                 memory_recall to search it, memory_suggest for context-aware hints, and \
                 memory_evaluate to report whether an entry helped."
                    .into(),
            ),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
