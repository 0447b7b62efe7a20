//! Screening — the evaluation pipeline: PDF text extraction, word-set
//! tokenization, and job/resume overlap scoring.

pub mod extractor;
pub mod handlers;
pub mod matcher;
pub mod tokenizer;
