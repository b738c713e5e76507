// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for campus-assist
//!
//! Messages and conversations use camelCase on the wire so transcripts
//! written by the chat widget load unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::Lang;

/// FAQ topic areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Admissions,
    #[serde(rename = "Fees & Scholarships")]
    FeesAndScholarships,
    #[serde(rename = "Academic Calendar")]
    AcademicCalendar,
    Examinations,
    Library,
    Hostel,
    Transportation,
    #[serde(rename = "General Queries")]
    GeneralQueries,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Admissions,
            Category::FeesAndScholarships,
            Category::AcademicCalendar,
            Category::Examinations,
            Category::Library,
            Category::Hostel,
            Category::Transportation,
            Category::GeneralQueries,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Admissions => "Admissions",
            Category::FeesAndScholarships => "Fees & Scholarships",
            Category::AcademicCalendar => "Academic Calendar",
            Category::Examinations => "Examinations",
            Category::Library => "Library",
            Category::Hostel => "Hostel",
            Category::Transportation => "Transportation",
            Category::GeneralQueries => "General Queries",
        }
    }

    /// Lenient parse for CLI filters: accepts display names and short slugs.
    pub fn parse(value: &str) -> Option<Self> {
        let folded: String = value
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match folded.as_str() {
            "admissions" | "admission" => Some(Category::Admissions),
            "feesscholarships" | "feesandscholarships" | "fees" | "fee" | "scholarships" => {
                Some(Category::FeesAndScholarships)
            }
            "academiccalendar" | "calendar" => Some(Category::AcademicCalendar),
            "examinations" | "examination" | "exams" => Some(Category::Examinations),
            "library" => Some(Category::Library),
            "hostel" => Some(Category::Hostel),
            "transportation" | "transport" => Some(Category::Transportation),
            "generalqueries" | "general" => Some(Category::GeneralQueries),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Which responder rule produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Keyword,
    FollowUp,
    Greeting,
    Fallback,
}

/// Responder output for one user turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub content: String,
    pub suggestions: Vec<String>,
    pub needs_human_help: bool,
    pub rule: RuleKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// One chat turn, from the user or the assistant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub id: String,
    pub content: String,
    pub is_bot: bool,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub language: Lang,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_human_help: Option<bool>,
}

impl Message {
    pub fn user(content: impl Into<String>, language: Lang) -> Self {
        Self {
            id: new_message_id(),
            content: content.into(),
            is_bot: false,
            timestamp: Utc::now(),
            language,
            suggestions: None,
            needs_human_help: None,
        }
    }

    pub fn bot(content: impl Into<String>, language: Lang) -> Self {
        Self {
            is_bot: true,
            ..Self::user(content, language)
        }
    }

    /// Bot message carrying a responder reply
    pub fn from_reply(reply: &Reply, language: Lang) -> Self {
        Self {
            suggestions: (!reply.suggestions.is_empty()).then(|| reply.suggestions.clone()),
            needs_human_help: Some(reply.needs_human_help),
            ..Self::bot(reply.content.clone(), language)
        }
    }

    pub fn escalated(&self) -> bool {
        self.needs_human_help.unwrap_or(false)
    }
}

/// A stored chat session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub session_id: String,
    pub messages: Vec<Message>,
    pub language: Lang,
    #[serde(default)]
    pub user_satisfaction: Option<u8>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Random message/conversation id: `msg-` plus 16 hex digits.
///
/// Falls back to the clock when the OS RNG is unavailable; ids only need to
/// be unique within one transcript.
pub fn new_message_id() -> String {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => format!("msg-{}", hex::encode(buf)),
        Err(_) => format!(
            "msg-{:016x}",
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serde_uses_display_names() {
        let json = serde_json::to_string(&Category::FeesAndScholarships).unwrap();
        assert_eq!(json, "\"Fees & Scholarships\"");
        let parsed: Category = serde_json::from_str("\"General Queries\"").unwrap();
        assert_eq!(parsed, Category::GeneralQueries);
    }

    #[test]
    fn category_parse_is_lenient() {
        assert_eq!(Category::parse("Fees & Scholarships"), Some(Category::FeesAndScholarships));
        assert_eq!(Category::parse("academic-calendar"), Some(Category::AcademicCalendar));
        assert_eq!(Category::parse("HOSTEL"), Some(Category::Hostel));
        assert_eq!(Category::parse("cafeteria"), None);
        for category in Category::all() {
            assert_eq!(Category::parse(category.display_name()), Some(*category));
        }
    }

    #[test]
    fn message_wire_format_is_camel_case() {
        let msg = Message {
            needs_human_help: Some(true),
            ..Message::bot("hi", Lang::Hi)
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["isBot"], true);
        assert_eq!(value["needsHumanHelp"], true);
        assert_eq!(value["language"], "hi");
        assert!(value.get("suggestions").is_none());
    }

    #[test]
    fn minimal_message_deserializes_with_defaults() {
        let msg: Message = serde_json::from_str(r#"{"content":"hello","isBot":false}"#).unwrap();
        assert_eq!(msg.language, Lang::En);
        assert!(msg.id.is_empty());
        assert!(!msg.escalated());
    }

    #[test]
    fn message_ids_are_distinct() {
        let a = new_message_id();
        let b = new_message_id();
        assert!(a.starts_with("msg-"));
        assert_eq!(a.len(), 20);
        assert_ne!(a, b);
    }
}
