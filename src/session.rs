// SPDX-License-Identifier: PMPL-1.0-or-later

//! Caller-side conversation handling
//!
//! The responder never fails and never stores anything; this module is the
//! layer around it that owns the transcript, substitutes the
//! "service unavailable" message when something outside the responder
//! breaks, and records the satisfaction rating.

use chrono::Utc;
use tracing::{error, info};

use crate::error::{AssistError, Result};
use crate::i18n::{t, Lang};
use crate::responder::Responder;
use crate::types::{new_message_id, Conversation, Message, Reply};

impl Conversation {
    /// New session seeded with the localized welcome message.
    pub fn start(session_id: impl Into<String>, language: Lang) -> Self {
        let now = Utc::now();
        Self {
            id: new_message_id().replacen("msg-", "conv-", 1),
            session_id: session_id.into(),
            messages: vec![Message::bot(t(language, "chat.welcome"), language)],
            language,
            user_satisfaction: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Send one user turn and append the reply.
    ///
    /// Blank input is ignored and yields `None`. The responder sees the
    /// history as it was before this input.
    pub fn send(&mut self, responder: &Responder, input: &str) -> Option<Reply> {
        if input.trim().is_empty() {
            return None;
        }
        let reply = responder.respond(input, self.language, &self.messages);
        self.messages.push(Message::user(input, self.language));
        self.messages.push(Message::from_reply(&reply, self.language));
        self.touch();

        info!(
            session = %self.session_id,
            language = %self.language,
            messages = self.messages.len(),
            rule = ?reply.rule,
            escalate = reply.needs_human_help,
            "conversation updated"
        );
        Some(reply)
    }

    /// Append the escalating apology used when the surrounding service fails.
    pub fn push_unavailable(&mut self, cause: &dyn std::fmt::Display) {
        error!(session = %self.session_id, error = %cause, "reply unavailable");
        let mut message = Message::bot(t(self.language, "chat.unavailable"), self.language);
        message.needs_human_help = Some(true);
        self.messages.push(message);
        self.touch();
    }

    /// Later turns are answered in `language`; earlier messages keep theirs.
    pub fn set_language(&mut self, language: Lang) {
        self.language = language;
        self.touch();
    }

    pub fn rate(&mut self, rating: u8) -> Result<()> {
        if !(1..=5).contains(&rating) {
            return Err(AssistError::InvalidRating(rating));
        }
        self.user_satisfaction = Some(rating);
        self.touch();
        info!(session = %self.session_id, rating, "satisfaction recorded");
        Ok(())
    }

    pub fn escalations(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.is_bot && m.escalated())
            .count()
    }

    pub fn user_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| !m.is_bot)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RuleKind;

    #[test]
    fn start_seeds_welcome() {
        let conv = Conversation::start("s1", Lang::Mr);
        assert_eq!(conv.messages.len(), 1);
        assert!(conv.messages[0].is_bot);
        assert_eq!(conv.messages[0].content, t(Lang::Mr, "chat.welcome"));
        assert!(conv.id.starts_with("conv-"));
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut conv = Conversation::start("s1", Lang::En);
        assert!(conv.send(&Responder::default(), "   ").is_none());
        assert_eq!(conv.messages.len(), 1);
    }

    #[test]
    fn send_appends_user_and_bot() {
        let mut conv = Conversation::start("s1", Lang::Hi);
        let reply = conv.send(&Responder::default(), "फीस कितनी है?").unwrap();
        assert_eq!(reply.rule, RuleKind::Keyword);
        assert_eq!(conv.messages.len(), 3);
        assert!(!conv.messages[1].is_bot);
        let bot = &conv.messages[2];
        assert_eq!(bot.content, reply.content);
        assert_eq!(bot.suggestions.as_ref().map(Vec::len), Some(3));
        assert_eq!(bot.needs_human_help, Some(false));
    }

    #[test]
    fn unavailable_escalates() {
        let mut conv = Conversation::start("s1", Lang::En);
        conv.push_unavailable(&"upstream timeout");
        assert_eq!(conv.escalations(), 1);
        assert_eq!(conv.messages.last().unwrap().content, t(Lang::En, "chat.unavailable"));
    }

    #[test]
    fn rating_bounds() {
        let mut conv = Conversation::start("s1", Lang::En);
        assert!(matches!(conv.rate(0), Err(AssistError::InvalidRating(0))));
        assert!(conv.rate(6).is_err());
        conv.rate(4).unwrap();
        assert_eq!(conv.user_satisfaction, Some(4));
    }

    #[test]
    fn language_switch_applies_to_new_turns() {
        let responder = Responder::default();
        let mut conv = Conversation::start("s1", Lang::En);
        conv.set_language(Lang::Gu);
        let reply = conv.send(&responder, "hello").unwrap();
        assert_eq!(reply.content, t(Lang::Gu, "chat.greeting"));
        assert_eq!(conv.messages[0].language, Lang::En);
        assert_eq!(conv.user_messages().count(), 1);
    }
}
