// SPDX-License-Identifier: PMPL-1.0-or-later

//! Ordered, validated FAQ table

use anyhow::{Context, Result as AnyResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{AssistError, Result};
use crate::faq::builtin::builtin_entries;
use crate::faq::entry::FaqEntry;
use crate::i18n::Lang;
use crate::types::Category;

/// On-disk layout of an authored FAQ file
#[derive(Debug, Serialize, Deserialize)]
struct FaqFile {
    entries: Vec<FaqEntry>,
}

/// Entries in match order. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FaqTable {
    entries: Vec<FaqEntry>,
}

/// First entry whose keyword occurs in the input
#[derive(Debug, Clone, Copy)]
pub struct KeywordHit<'a> {
    pub entry: &'a FaqEntry,
    pub keyword: &'a str,
}

/// Admin search over the table
#[derive(Debug, Clone, Default)]
pub struct FaqFilter {
    pub search: Option<String>,
    pub category: Option<Category>,
    pub language: Lang,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub entries: usize,
}

impl FaqTable {
    /// Build a table, lower-casing and trimming keywords.
    ///
    /// Rejects entries with a blank id, a duplicate id, a blank default
    /// question or answer, a blank localized text, or no usable keywords.
    /// A blank keyword would match every input, so it is an error rather
    /// than something to skip.
    pub fn new(entries: Vec<FaqEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(entries.len());

        for mut entry in entries {
            let id = entry.id.trim().to_string();
            if id.is_empty() {
                return Err(invalid(&entry.question, "id is empty"));
            }
            if !seen.insert(id.clone()) {
                return Err(invalid(&id, "duplicate id"));
            }
            if entry.question.trim().is_empty() || entry.answer.trim().is_empty() {
                return Err(invalid(&id, "default question and answer are required"));
            }
            for (lang, text) in &entry.localized {
                if text.question.trim().is_empty() || text.answer.trim().is_empty() {
                    return Err(invalid(&id, &format!("{} translation is incomplete", lang)));
                }
            }

            let mut keywords: Vec<String> = Vec::with_capacity(entry.keywords.len());
            for keyword in &entry.keywords {
                let keyword = keyword.trim().to_lowercase();
                if keyword.is_empty() {
                    return Err(invalid(&id, "blank keyword"));
                }
                if !keywords.contains(&keyword) {
                    keywords.push(keyword);
                }
            }
            if keywords.is_empty() {
                return Err(invalid(&id, "at least one keyword is required"));
            }

            entry.id = id;
            entry.keywords = keywords;
            normalized.push(entry);
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// The five entries shipped with the assistant.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
        }
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let file: FaqFile = serde_yaml::from_str(source)?;
        Self::new(file.entries)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        let file: FaqFile = serde_json::from_str(source)?;
        Self::new(file.entries)
    }

    /// Load an authored table; `.json` is parsed as JSON, anything else as YAML.
    pub fn load(path: &Path) -> AnyResult<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("reading FAQ file {}", path.display()))?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let table = if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_yaml_str(&source)
        }
        .with_context(|| format!("parsing FAQ file {}", path.display()))?;

        info!(path = %path.display(), entries = table.len(), "FAQ table loaded");
        Ok(table)
    }

    pub fn to_yaml(&self) -> Result<String> {
        let file = FaqFile {
            entries: self.entries.clone(),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&FaqEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Scan entries in table order; the first one with a keyword inside
    /// the (case-folded) input wins. No scoring, no tie-breaks.
    pub fn find_match(&self, input: &str) -> Option<KeywordHit<'_>> {
        let lowered = input.to_lowercase();
        self.entries.iter().find_map(|entry| {
            entry
                .matched_keyword(&lowered)
                .map(|keyword| KeywordHit { entry, keyword })
        })
    }

    /// Entries matching the filter, in table order.
    ///
    /// The search term is compared case-insensitively against the question
    /// and answer as shown in `filter.language`, and against the keywords.
    pub fn filter(&self, filter: &FaqFilter) -> Vec<&FaqEntry> {
        let term = filter
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        self.entries
            .iter()
            .filter(|entry| filter.category.is_none_or(|c| entry.category == c))
            .filter(|entry| match &term {
                None => true,
                Some(term) => {
                    let text = entry.text(filter.language);
                    text.question.to_lowercase().contains(term.as_str())
                        || text.answer.to_lowercase().contains(term.as_str())
                        || entry.keywords.iter().any(|k| k.contains(term.as_str()))
                }
            })
            .collect()
    }

    /// Entry counts per category, in category order, skipping empty ones.
    pub fn categories(&self) -> Vec<CategoryCount> {
        let mut counts: BTreeMap<Category, usize> = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.category).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(category, entries)| CategoryCount { category, entries })
            .collect()
    }

    /// SHA-256 over the canonical JSON form of the table.
    ///
    /// Identical content yields the same digest regardless of the source
    /// format, so YAML and JSON copies of one table compare equal.
    pub fn fingerprint(&self) -> Result<String> {
        let canonical = serde_json::to_vec(&self.entries)?;
        Ok(hex::encode(Sha256::digest(&canonical)))
    }
}

impl Default for FaqTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn invalid(id: &str, reason: &str) -> AssistError {
    AssistError::InvalidFaq {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}
