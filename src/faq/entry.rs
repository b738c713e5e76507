// SPDX-License-Identifier: PMPL-1.0-or-later

//! A single authored FAQ record

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::i18n::Lang;
use crate::types::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub question: String,
    pub answer: String,
}

/// One question/answer pair with its match keywords.
///
/// `question` and `answer` are the English defaults; `localized` holds
/// per-language overrides. Always read through [`FaqEntry::text`] so a
/// missing override falls back to the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: String,
    pub category: Category,
    pub keywords: Vec<String>,
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub localized: BTreeMap<Lang, LocalizedText>,
}

/// Borrowed question/answer in one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextView<'a> {
    pub question: &'a str,
    pub answer: &'a str,
}

impl FaqEntry {
    /// Question and answer in `lang`, or the defaults when not translated.
    pub fn text(&self, lang: Lang) -> TextView<'_> {
        match self.localized.get(&lang) {
            Some(text) => TextView {
                question: &text.question,
                answer: &text.answer,
            },
            None => TextView {
                question: &self.question,
                answer: &self.answer,
            },
        }
    }

    pub fn answer(&self, lang: Lang) -> &str {
        self.text(lang).answer
    }

    /// First keyword contained in `lowered_input`.
    ///
    /// Plain substring containment, not word boundaries: `fee` is found in
    /// `coffee`, and `exam` covers `examination`. The caller lower-cases the
    /// input; keywords are lower-cased when the table is built.
    pub fn matched_keyword(&self, lowered_input: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|keyword| lowered_input.contains(keyword.as_str()))
            .map(String::as_str)
    }

    pub fn is_localized(&self, lang: Lang) -> bool {
        lang == Lang::En || self.localized.contains_key(&lang)
    }
}
