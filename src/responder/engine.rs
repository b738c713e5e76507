// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reply selection over the FAQ table and the fixed utterances

use tracing::debug;

use crate::faq::FaqTable;
use crate::i18n::{category_suggestions, general_suggestions, t, Lang};
use crate::responder::rules::{self, RULE_ORDER};
use crate::types::{Message, Reply, RuleKind};

/// Answers one user turn at a time.
///
/// Holds nothing but the read-only FAQ table, so one instance can serve any
/// number of conversations from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Responder {
    table: FaqTable,
}

impl Responder {
    pub fn new(table: FaqTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &FaqTable {
        &self.table
    }

    /// Produce the reply for `input` given the turns before it.
    ///
    /// Rules are tried in [`RULE_ORDER`] and the first that fires wins;
    /// they are never combined. The last rule always fires.
    pub fn respond(&self, input: &str, lang: Lang, history: &[Message]) -> Reply {
        let lowered = input.to_lowercase();
        for rule in RULE_ORDER {
            if let Some(reply) = self.apply(*rule, &lowered, lang, history) {
                debug!(
                    rule = ?reply.rule,
                    category = ?reply.category,
                    language = %lang,
                    escalate = reply.needs_human_help,
                    "reply selected"
                );
                return reply;
            }
        }
        self.fallback(lang)
    }

    fn apply(&self, rule: RuleKind, lowered: &str, lang: Lang, history: &[Message]) -> Option<Reply> {
        match rule {
            RuleKind::Keyword => self.keyword_answer(lowered, lang),
            RuleKind::FollowUp => self.follow_up(lowered, lang, history),
            RuleKind::Greeting => self.greeting(lowered, lang),
            RuleKind::Fallback => Some(self.fallback(lang)),
        }
    }

    /// Rule 1: first FAQ entry with a keyword inside the input.
    fn keyword_answer(&self, lowered: &str, lang: Lang) -> Option<Reply> {
        let hit = self.table.find_match(lowered)?;
        debug!(entry = %hit.entry.id, keyword = hit.keyword, "keyword matched");
        Some(Reply {
            content: hit.entry.answer(lang).to_string(),
            suggestions: category_suggestions(hit.entry.category, lang),
            needs_human_help: false,
            rule: RuleKind::Keyword,
            category: Some(hit.entry.category),
        })
    }

    /// Rule 2: "tell me more" right after an admissions answer.
    ///
    /// Only the most recent bot message counts, and only the admissions
    /// topic has an expanded answer. The marker is matched as written, so a
    /// capitalized "Admission" does not count.
    fn follow_up(&self, lowered: &str, lang: Lang, history: &[Message]) -> Option<Reply> {
        let last_bot = history.iter().rev().find(|msg| msg.is_bot)?;
        if !rules::asks_for_more(lowered) {
            return None;
        }
        if !rules::mentions_admissions(&last_bot.content) {
            return None;
        }
        Some(Reply {
            content: t(lang, "chat.admissions_detail").to_string(),
            suggestions: Vec::new(),
            needs_human_help: false,
            rule: RuleKind::FollowUp,
            category: None,
        })
    }

    /// Rule 3
    fn greeting(&self, lowered: &str, lang: Lang) -> Option<Reply> {
        rules::is_greeting(lowered).then(|| Reply {
            content: t(lang, "chat.greeting").to_string(),
            suggestions: general_suggestions(lang),
            needs_human_help: false,
            rule: RuleKind::Greeting,
            category: None,
        })
    }

    /// Rule 4: nothing matched, offer a human.
    fn fallback(&self, lang: Lang) -> Reply {
        Reply {
            content: t(lang, "chat.fallback").to_string(),
            suggestions: general_suggestions(lang),
            needs_human_help: true,
            rule: RuleKind::Fallback,
            category: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn bot(content: &str) -> Message {
        Message::bot(content, Lang::En)
    }

    #[test]
    fn keyword_beats_greeting() {
        let responder = Responder::default();
        let reply = responder.respond("hi, what is the fee?", Lang::En, &[]);
        assert_eq!(reply.rule, RuleKind::Keyword);
        assert_eq!(reply.category, Some(Category::FeesAndScholarships));
    }

    #[test]
    fn keyword_beats_follow_up() {
        let responder = Responder::default();
        let history = [bot("I can help with admissions.")];
        let reply = responder.respond("more about the library", Lang::En, &history);
        assert_eq!(reply.rule, RuleKind::Keyword);
        assert_eq!(reply.category, Some(Category::Library));
    }

    #[test]
    fn follow_up_uses_most_recent_bot_message() {
        let responder = Responder::default();
        let history = [
            bot("Your admission needs 75% marks."),
            Message::user("ok", Lang::En),
            bot("The canteen is near gate 2."),
            Message::user("thanks", Lang::En),
        ];
        let reply = responder.respond("tell me more", Lang::En, &history);
        assert_ne!(reply.rule, RuleKind::FollowUp);
    }

    #[test]
    fn follow_up_needs_a_bot_message() {
        let responder = Responder::default();
        let history = [Message::user("admission info", Lang::En)];
        let reply = responder.respond("tell me more", Lang::En, &history);
        assert_eq!(reply.rule, RuleKind::Fallback);
    }

    #[test]
    fn follow_up_in_hindi() {
        let responder = Responder::default();
        let history = [Message::bot("प्रवेश के लिए 75% अंक चाहिए।", Lang::Hi)];
        let reply = responder.respond("अधिक बताइए", Lang::Hi, &history);
        assert_eq!(reply.rule, RuleKind::FollowUp);
        assert_eq!(reply.content, t(Lang::Hi, "chat.admissions_detail"));
        assert!(reply.suggestions.is_empty());
    }

    #[test]
    fn follow_up_marker_is_case_sensitive() {
        let responder = Responder::default();
        let history = [bot("Admission needs 75% marks.")];
        let reply = responder.respond("tell me more", Lang::Gu, &history);
        assert_eq!(reply.rule, RuleKind::Fallback);

        let history = [bot("Your admission needs 75% marks.")];
        let reply = responder.respond("tell me more", Lang::Gu, &history);
        assert_eq!(reply.rule, RuleKind::FollowUp);
        assert_eq!(reply.content, t(Lang::En, "chat.admissions_detail"));
    }

    #[test]
    fn keyword_answer_without_translation_uses_default() {
        let responder = Responder::default();
        let reply = responder.respond("hostel rooms?", Lang::Mr, &[]);
        assert_eq!(reply.category, Some(Category::Hostel));
        assert!(reply.content.starts_with("We have separate hostels"));
        assert!(reply.suggestions.is_empty());
    }

    #[test]
    fn greeting_localized() {
        let responder = Responder::default();
        let reply = responder.respond("नमस्ते", Lang::Ta, &[]);
        assert_eq!(reply.rule, RuleKind::Greeting);
        assert_eq!(reply.content, t(Lang::Ta, "chat.greeting"));
        assert_eq!(reply.suggestions, general_suggestions(Lang::Ta));
        assert!(!reply.needs_human_help);
    }

    #[test]
    fn custom_table_is_used() {
        let table = FaqTable::from_yaml_str(
            "entries:\n  - id: bus\n    category: Transportation\n    keywords: [bus]\n    question: Bus?\n    answer: Every 30 minutes.\n",
        )
        .unwrap();
        let responder = Responder::new(table);
        let reply = responder.respond("When is the BUS", Lang::En, &[]);
        assert_eq!(reply.content, "Every 30 minutes.");
        // the built-in entries are gone
        assert_eq!(responder.respond("fee", Lang::En, &[]).rule, RuleKind::Fallback);
    }
}
