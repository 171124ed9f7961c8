pub mod error;
pub mod evaluate;
pub mod index;
pub mod patterns;
pub mod score;
pub mod search;
pub mod stats;
pub mod store;
pub mod suggest;
pub mod tokenizer;
pub mod types;
pub mod vectorize;
