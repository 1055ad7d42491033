//! Scores a free-text question against the FAQ table.

use super::knowledge::{CompiledEntry, KnowledgeBase, Trigger};

/// Reply used when nothing scores at least [`MATCH_THRESHOLD`].
pub const FALLBACK_RESPONSE: &str = "I'm not sure about that specific question. \n\nHere are some topics I can help with:\n\n• Who is Shahab? (background, education)\n• What does he do? (work, skills, technologies)\n• Projects and research\n• Experience and jobs\n• Contact information\n• How to collaborate\n\nTry asking about any of these topics!";

/// Lowest score that counts as a match.
pub const MATCH_THRESHOLD: u32 = 3;

const EXACT_SCORE: u32 = 10;
const CONTAINS_SCORE: u32 = 5;
const BOUNDARY_SCORE: u32 = 3;
const SUBSTRING_BONUS: u32 = 1;

/// Outcome of one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub response: &'a str,
    /// Winning entry's score, or 0 for the fallback.
    pub score: u32,
}

impl MatchResult<'_> {
    pub fn is_fallback(&self) -> bool {
        self.score == 0
    }
}

/// Lowercase and trim. Borrowed input is left untouched.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Points one trigger earns against an already-normalized query.
///
/// A whole-phrase hit earns 10 for an exact match, 5 if the query contains
/// the trigger, 3 otherwise. Any raw substring occurrence earns a
/// further 1, so a contained phrase counts twice.
fn trigger_score(trigger: &Trigger, query: &str) -> u32 {
    let contains = query.contains(trigger.phrase.as_str());
    let mut score = 0;
    if trigger.whole_word.is_match(query) {
        score += if query == trigger.phrase {
            EXACT_SCORE
        } else if contains {
            CONTAINS_SCORE
        } else {
            BOUNDARY_SCORE
        };
    }
    if contains {
        score += SUBSTRING_BONUS;
    }
    score
}

fn entry_score(entry: &CompiledEntry, query: &str) -> u32 {
    entry.triggers.iter().map(|t| trigger_score(t, query)).sum()
}

impl KnowledgeBase {
    /// Score every entry and return the best response, or the fallback.
    /// Ties go to the entry declared first.
    pub fn match_query(&self, query: &str) -> MatchResult<'_> {
        let query = normalize(query);

        let mut best: Option<(&CompiledEntry, u32)> = None;
        let mut best_score = 0;
        for entry in &self.entries {
            let score = entry_score(entry, &query);
            if score > best_score {
                best_score = score;
                best = Some((entry, score));
            }
        }

        match best {
            Some((entry, score)) if score >= MATCH_THRESHOLD => {
                log::debug!("chat: matched with score {score}");
                MatchResult {
                    response: &entry.response,
                    score,
                }
            }
            _ => {
                log::debug!("chat: no match (best score {best_score})");
                MatchResult {
                    response: FALLBACK_RESPONSE,
                    score: 0,
                }
            }
        }
    }

    /// Per-entry scores in declared order. For tuning the table.
    pub fn scores(&self, query: &str) -> Vec<u32> {
        let query = normalize(query);
        self.entries.iter().map(|e| entry_score(e, &query)).collect()
    }
}

/// Free-function form of [`KnowledgeBase::match_query`].
pub fn match_query<'a>(kb: &'a KnowledgeBase, query: &str) -> MatchResult<'a> {
    kb.match_query(query)
}
