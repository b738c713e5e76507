// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal rendering for replies, FAQ listings, logs and analytics

use colored::*;

use crate::analytics::Analytics;
use crate::faq::{CategoryCount, FaqEntry};
use crate::i18n::{t_or_key, Lang};
use crate::types::{Conversation, Message, Reply};

pub struct ReportFormatter {
    lang: Lang,
}

impl ReportFormatter {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn print_reply(&self, reply: &Reply) {
        println!("{} {}", format!("{}:", t_or_key(self.lang, "label.assistant")).bold().cyan(), reply.content);
        self.print_suggestions(&reply.suggestions);
        if reply.needs_human_help {
            println!("  {}", t_or_key(self.lang, "label.escalate").yellow());
        }
    }

    pub fn print_message(&self, message: &Message) {
        let who = if message.is_bot {
            t_or_key(self.lang, "label.assistant").cyan()
        } else {
            t_or_key(self.lang, "label.you").green()
        };
        println!(
            "  [{}] {}: {}",
            message.timestamp.format("%H:%M").to_string().dimmed(),
            who.bold(),
            message.content
        );
        if message.escalated() {
            println!("        {}", t_or_key(self.lang, "label.escalate").yellow());
        }
    }

    fn print_suggestions(&self, suggestions: &[String]) {
        if suggestions.is_empty() {
            return;
        }
        println!("  {}:", t_or_key(self.lang, "label.suggestions").bold());
        for suggestion in suggestions {
            println!("    - {}", suggestion);
        }
    }

    pub fn print_faq_entries(&self, entries: &[&FaqEntry]) {
        if entries.is_empty() {
            println!("{}", "No FAQ entries match".yellow());
            return;
        }
        for entry in entries {
            let text = entry.text(self.lang);
            let marker = if entry.is_localized(self.lang) {
                "".normal()
            } else {
                " (en)".dimmed()
            };
            println!("{} {}{}", format!("[{}]", entry.id).bold(), text.question, marker);
            println!("  {}", text.answer);
            println!(
                "  {}: {}  {}: {}",
                t_or_key(self.lang, "label.category"),
                entry.category.to_string().blue(),
                t_or_key(self.lang, "label.keywords"),
                entry.keywords.join(", ").dimmed()
            );
            println!();
        }
    }

    pub fn print_table_summary(&self, counts: &[CategoryCount], fingerprint: &str) {
        let total: usize = counts.iter().map(|c| c.entries).sum();
        println!("{}", "FAQ TABLE".bold().yellow());
        println!("  Entries: {}", total);
        for count in counts {
            println!("    {:22} {}", count.category.to_string(), count.entries);
        }
        println!("  Fingerprint: {}", fingerprint.dimmed());
    }

    pub fn print_conversations(&self, conversations: &[&Conversation]) {
        println!("{} conversations found", conversations.len().to_string().bold());
        for conversation in conversations {
            println!();
            let rating = conversation
                .user_satisfaction
                .map(|r| format!("{}/5", r))
                .unwrap_or_else(|| "unrated".to_string());
            println!(
                "{} session {} ({}, {}, {})",
                "●".cyan(),
                conversation.session_id.bold(),
                conversation.language,
                conversation.created_at.format("%Y-%m-%d %H:%M"),
                rating
            );
            for message in &conversation.messages {
                self.print_message(message);
            }
        }
    }

    pub fn print_analytics(&self, analytics: &Analytics) {
        println!("\n{}", "=== CAMPUS ASSIST ANALYTICS ===".bold().cyan());
        println!();
        println!("  Conversations: {}", analytics.total_conversations);
        println!("  Messages: {}", analytics.total_messages);
        println!("  User queries: {}", analytics.user_queries);

        let rate = analytics.escalation_rate * 100.0;
        let rate_color = if rate <= 10.0 {
            "green"
        } else if rate <= 30.0 {
            "yellow"
        } else {
            "red"
        };
        println!(
            "  Escalations: {} ({})",
            analytics.escalations,
            format!("{:.1}%", rate).color(rate_color).bold()
        );
        match analytics.average_satisfaction {
            Some(avg) => println!(
                "  Satisfaction: {:.2}/5 over {} rated",
                avg, analytics.rated_conversations
            ),
            None => println!("  Satisfaction: {}", "no ratings".dimmed()),
        }

        if !analytics.language_distribution.is_empty() {
            println!();
            println!("{}", "LANGUAGES".bold().yellow());
            for share in &analytics.language_distribution {
                println!(
                    "  {:10} {:>5} {:>6.1}%",
                    share.language.native_name(),
                    share.count,
                    share.percentage
                );
            }
        }

        if !analytics.popular_queries.is_empty() {
            println!();
            println!("{}", "POPULAR QUERIES".bold().yellow());
            for (i, query) in analytics.popular_queries.iter().enumerate() {
                let category = query
                    .category
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "unmatched".to_string());
                println!(
                    "  {}. {} x{} {}",
                    i + 1,
                    query.query,
                    query.count,
                    format!("[{}]", category).dimmed()
                );
            }
        }

        if !analytics.conversation_trends.is_empty() {
            println!();
            println!("{}", "DAILY CONVERSATIONS".bold().yellow());
            for day in &analytics.conversation_trends {
                println!("  {} {}", day.date, "#".repeat(day.conversations.min(60)));
            }
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(Lang::En)
    }
}
