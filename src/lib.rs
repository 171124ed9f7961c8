//! Local knowledge store with relevance-ranked recall, served over MCP.
//!
//! Cairn keeps short text entries (content, category, tags, source) in a
//! local JSON document and retrieves them by approximate relevance instead of
//! exact keyword match:
//!
//! | Stage | What happens |
//! |-------|--------------|
//! | **Tokenize** | lower-case, strip punctuation, drop short tokens and English/German stop words |
//! | **Weigh** | max-normalized term frequency × smoothed IDF |
//! | **Score** | cosine similarity, plus a recency bonus and a usefulness weight |
//! | **Track** | every returned entry has its access count bumped |
//!
//! On top of the same collection it derives pattern statistics (category and
//! tag histograms, tag co-occurrence, most-recalled entries), classified
//! suggestions, and usefulness feedback.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from TOML files and environment variables
//! - [`storage`]: JSON persistence of the collection and its index
//! - [`knowledge`]: Core engine: tokenizer, index, scoring, recall, patterns, evaluation

pub mod config;
pub mod knowledge;
pub mod storage;
