use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::KnowledgeError;
use super::types::{Feedback, KnowledgeBase};

/// Result returned from an evaluate operation.
#[derive(Debug, Serialize)]
pub struct EvaluateResult {
    pub id: u64,
    pub usefulness: i64,
    pub feedback_count: usize,
}

/// Record whether an entry was useful, optionally with a note.
///
/// Usefulness moves by exactly one step and is unbounded in both directions.
/// An unknown id fails without touching the collection.
pub fn evaluate(
    kb: &mut KnowledgeBase,
    id: u64,
    useful: bool,
    feedback: Option<&str>,
    now: DateTime<Utc>,
) -> Result<EvaluateResult> {
    let entry = kb.get_mut(id).ok_or(KnowledgeError::EntryNotFound(id))?;

    entry.usefulness += if useful { 1 } else { -1 };
    if let Some(text) = feedback.map(str::trim).filter(|t| !t.is_empty()) {
        entry.feedback.push(Feedback {
            text: text.to_string(),
            timestamp: now,
        });
    }

    Ok(EvaluateResult {
        id,
        usefulness: entry.usefulness,
        feedback_count: entry.feedback.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::store::{learn, NewEntry};

    fn kb_with_entry() -> KnowledgeBase {
        let mut kb = KnowledgeBase::default();
        learn(
            &mut kb,
            NewEntry {
                content: "Evaluate me".into(),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap();
        kb
    }

    #[test]
    fn test_useful_increments() {
        let mut kb = kb_with_entry();
        let result = evaluate(&mut kb, 1, true, None, Utc::now()).unwrap();
        assert_eq!(result.usefulness, 1);
        assert_eq!(kb.entries[0].usefulness, 1);
        assert_eq!(result.feedback_count, 0);
    }

    #[test]
    fn test_not_useful_decrements_below_zero() {
        let mut kb = kb_with_entry();
        evaluate(&mut kb, 1, false, None, Utc::now()).unwrap();
        let result = evaluate(&mut kb, 1, false, None, Utc::now()).unwrap();
        assert_eq!(result.usefulness, -2);
    }

    #[test]
    fn test_feedback_appended_in_order() {
        let mut kb = kb_with_entry();
        let now = Utc::now();
        evaluate(&mut kb, 1, true, Some("worked for me"), now).unwrap();
        evaluate(&mut kb, 1, true, Some("   "), now).unwrap();
        let result = evaluate(&mut kb, 1, false, Some("outdated now"), now).unwrap();

        assert_eq!(result.feedback_count, 2);
        let texts: Vec<&str> = kb.entries[0].feedback.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["worked for me", "outdated now"]);
        assert_eq!(kb.entries[0].feedback[0].timestamp, now);
    }

    #[test]
    fn test_unknown_id_fails_without_mutation() {
        let mut kb = kb_with_entry();
        let before = kb.clone();
        let err = evaluate(&mut kb, 99, true, Some("note"), Utc::now()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<KnowledgeError>(),
            Some(&KnowledgeError::EntryNotFound(99))
        );
        assert_eq!(kb, before);
    }
}
