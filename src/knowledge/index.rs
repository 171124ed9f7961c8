//! Inverted index construction over the full entry collection.

use std::collections::{BTreeMap, BTreeSet};

use super::tokenizer::tokenize;
use super::types::{Entry, Index};
use super::vectorize::idf;

/// Text an entry is indexed and scored by: content, space-joined tags, category.
pub fn searchable_text(entry: &Entry) -> String {
    format!("{} {} {}", entry.content, entry.tags.join(" "), entry.category)
}

/// Build a fresh [`Index`] from every entry.
///
/// Each entry counts at most once towards a token's document frequency.
pub fn build_index(entries: &[Entry]) -> Index {
    let mut terms: BTreeMap<String, Vec<u64>> = BTreeMap::new();

    for entry in entries {
        let distinct: BTreeSet<String> = tokenize(&searchable_text(entry)).into_iter().collect();
        for token in distinct {
            terms.entry(token).or_default().push(entry.id);
        }
    }

    let doc_count = entries.len();
    let idf = terms
        .iter()
        .map(|(token, ids)| (token.clone(), idf(doc_count, ids.len())))
        .collect();

    Index {
        terms,
        idf,
        doc_count,
    }
}
