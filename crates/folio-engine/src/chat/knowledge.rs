//! Static FAQ table: trigger phrases mapped to canned responses.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::api::error::{ConfigError, Result};

/// The site's own FAQ table, embedded at compile time.
const PORTFOLIO_FAQ_JSON: &str = include_str!("../../data/faq.json");

/// One row of the FAQ table as written by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Phrases that signal this topic. Lowercased at load, so matching is
    /// case-insensitive throughout.
    pub triggers: Vec<String>,
    pub response: String,
}

impl FaqEntry {
    pub fn new<S: Into<String>>(triggers: impl IntoIterator<Item = S>, response: impl Into<String>) -> Self {
        Self {
            triggers: triggers.into_iter().map(Into::into).collect(),
            response: response.into(),
        }
    }
}

/// A lowercased trigger phrase with its whole-phrase matcher built once at
/// load. Word boundaries are ASCII-only, the way a browser `\b` behaves, so
/// a phrase that starts or ends on an accented letter never earns the
/// boundary score.
#[derive(Debug, Clone)]
pub(crate) struct Trigger {
    pub(crate) phrase: String,
    pub(crate) whole_word: Regex,
}

impl Trigger {
    fn compile(phrase: &str) -> Result<Self> {
        let phrase = phrase.to_lowercase();
        let whole_word = Regex::new(&format!(r"(?i)(?-u:\b){}(?-u:\b)", regex::escape(&phrase)))?;
        Ok(Self { phrase, whole_word })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CompiledEntry {
    pub(crate) triggers: Vec<Trigger>,
    pub(crate) response: String,
}

/// Immutable, precompiled FAQ table. Entry order is the tie-break order.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub(crate) entries: Vec<CompiledEntry>,
}

impl KnowledgeBase {
    /// A knowledge base with no entries; every query falls back.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile a table of entries. Every entry needs at least one trigger
    /// and no trigger may be blank.
    pub fn from_entries(entries: Vec<FaqEntry>) -> Result<Self> {
        let mut compiled = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            if entry.triggers.is_empty() {
                return Err(ConfigError::EmptyTriggers { entry: index });
            }
            let mut triggers = Vec::with_capacity(entry.triggers.len());
            for phrase in entry.triggers {
                if phrase.trim().is_empty() {
                    return Err(ConfigError::BlankTrigger { entry: index });
                }
                triggers.push(Trigger::compile(&phrase)?);
            }
            compiled.push(CompiledEntry {
                triggers,
                response: entry.response,
            });
        }
        log::debug!("knowledge base: {} entries", compiled.len());
        Ok(Self { entries: compiled })
    }

    /// Parse a JSON array of `{ "triggers": [...], "response": "..." }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<FaqEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Build from an already-parsed JSON value (e.g. a config override).
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let entries: Vec<FaqEntry> = serde_json::from_value(value)?;
        Self::from_entries(entries)
    }

    /// The portfolio's built-in FAQ table.
    pub fn portfolio() -> Result<Self> {
        Self::from_json(PORTFOLIO_FAQ_JSON)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Response text of entry `index`, in declared order.
    pub fn response(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.response.as_str())
    }

    /// Trigger phrases of entry `index`, lowercased, in declared order.
    pub fn triggers(&self, index: usize) -> impl Iterator<Item = &str> {
        self.entries
            .get(index)
            .into_iter()
            .flat_map(|e| e.triggers.iter().map(|t| t.phrase.as_str()))
    }
}
