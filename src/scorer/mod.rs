//! Sentiment scorer implementations

mod keyword;

pub use keyword::KeywordScorer;
