//! Context-driven suggestions: a lenient recall whose hits are classified by tag.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::score::Ranking;
use super::search::{recall, RecallHit, RecallQuery};
use super::types::{Index, KnowledgeBase};
use crate::config::SuggestConfig;

/// How a suggested entry relates to the caller's context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Tagged `error` or `failure`.
    Warning,
    /// Tagged `success` or `solution`.
    Recommendation,
    /// Tagged `pattern` or `best-practice`.
    BestPractice,
    Related,
}

impl SuggestionKind {
    /// Classify by tag membership. Rules are checked in priority order and the
    /// first one that matches wins.
    pub fn classify(tags: &[String]) -> Self {
        const RULES: &[(&[&str], SuggestionKind)] = &[
            (&["error", "failure"], SuggestionKind::Warning),
            (&["success", "solution"], SuggestionKind::Recommendation),
            (&["pattern", "best-practice"], SuggestionKind::BestPractice),
        ];

        RULES
            .iter()
            .find(|(names, _)| tags.iter().any(|t| names.contains(&t.as_str())))
            .map_or(SuggestionKind::Related, |(_, kind)| *kind)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    #[serde(flatten)]
    pub hit: RecallHit,
}

/// Response from memory_suggest.
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<Suggestion>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SuggestResponse {
    pub fn touched_entries(&self) -> bool {
        !self.suggestions.is_empty()
    }
}

/// Recall with the suggestion threshold and limit, then classify each hit.
pub fn suggest(
    kb: &mut KnowledgeBase,
    index: &Index,
    context: &str,
    config: &SuggestConfig,
    ranking: &Ranking,
    now: DateTime<Utc>,
) -> SuggestResponse {
    let query = RecallQuery {
        text: context,
        limit: config.limit,
        category: None,
        min_score: config.min_score,
    };
    let response = recall(kb, index, &query, ranking, now);

    SuggestResponse {
        suggestions: response
            .results
            .into_iter()
            .map(|hit| Suggestion {
                kind: SuggestionKind::classify(&hit.tags),
                hit,
            })
            .collect(),
        total: response.total,
        message: response.message,
    }
}
