//! FAQ responder for the chat widget.

mod knowledge;
mod matcher;

pub use knowledge::{FaqEntry, KnowledgeBase};
pub use matcher::{match_query, normalize, MatchResult, FALLBACK_RESPONSE, MATCH_THRESHOLD};
