//! Natural Language Processing components
//!
//! This module provides tokenization, sentence splitting, stopword filtering
//! and markup cleanup.

pub mod clean;
pub mod stopwords;
pub mod tokenizer;
