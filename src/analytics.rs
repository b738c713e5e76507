// SPDX-License-Identifier: PMPL-1.0-or-later

//! Usage analytics over conversation transcripts
//!
//! Everything is computed from the transcripts handed in; nothing is stored.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::faq::FaqTable;
use crate::i18n::Lang;
use crate::types::{Category, Conversation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimeRange {
    #[value(name = "7d")]
    Week,
    #[default]
    #[value(name = "30d")]
    Month,
    #[value(name = "90d")]
    Quarter,
    All,
}

impl TimeRange {
    /// Earliest creation time included, or `None` for no bound.
    pub fn since(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let days = match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
            TimeRange::All => return None,
        };
        Some(now - Duration::days(days))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageShare {
    pub language: Lang,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularQuery {
    pub query: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCount {
    pub date: NaiveDate,
    pub conversations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_conversations: usize,
    pub total_messages: usize,
    pub user_queries: usize,
    pub escalations: usize,
    /// Escalated replies per user query, 0.0 with no queries
    pub escalation_rate: f64,
    pub rated_conversations: usize,
    pub average_satisfaction: Option<f64>,
    pub language_distribution: Vec<LanguageShare>,
    pub popular_queries: Vec<PopularQuery>,
    pub conversation_trends: Vec<DailyCount>,
}

/// Aggregate the conversations created within `range` of `now`.
///
/// Popular queries group user messages by their trimmed, lower-cased text
/// and carry the category the FAQ table would answer them from.
pub fn summarize(
    table: &FaqTable,
    conversations: &[Conversation],
    range: TimeRange,
    now: DateTime<Utc>,
    popular_limit: usize,
) -> Analytics {
    let since = range.since(now);
    let selected: Vec<&Conversation> = conversations
        .iter()
        .filter(|c| since.is_none_or(|s| c.created_at >= s))
        .collect();

    let total_messages = selected.iter().map(|c| c.messages.len()).sum();
    let escalations = selected.iter().map(|c| c.escalations()).sum();

    let mut query_counts: HashMap<String, usize> = HashMap::new();
    for conversation in &selected {
        for message in conversation.user_messages() {
            let query = message.content.trim().to_lowercase();
            if !query.is_empty() {
                *query_counts.entry(query).or_default() += 1;
            }
        }
    }
    let user_queries: usize = query_counts.values().sum();

    let ratings: Vec<u8> = selected.iter().filter_map(|c| c.user_satisfaction).collect();
    let average_satisfaction = (!ratings.is_empty())
        .then(|| ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64);

    Analytics {
        total_conversations: selected.len(),
        total_messages,
        user_queries,
        escalations,
        escalation_rate: ratio(escalations, user_queries),
        rated_conversations: ratings.len(),
        average_satisfaction,
        language_distribution: language_distribution(&selected),
        popular_queries: popular_queries(table, query_counts, popular_limit),
        conversation_trends: trends(&selected),
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

fn language_distribution(selected: &[&Conversation]) -> Vec<LanguageShare> {
    let mut counts: BTreeMap<Lang, usize> = BTreeMap::new();
    for conversation in selected {
        *counts.entry(conversation.language).or_default() += 1;
    }
    let mut shares: Vec<LanguageShare> = counts
        .into_iter()
        .map(|(language, count)| LanguageShare {
            language,
            count,
            percentage: (ratio(count, selected.len()) * 1000.0).round() / 10.0,
        })
        .collect();
    // stable sort keeps language order among equal counts
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

fn popular_queries(table: &FaqTable, counts: HashMap<String, usize>, limit: usize) -> Vec<PopularQuery> {
    let mut queries: Vec<PopularQuery> = counts
        .into_iter()
        .map(|(query, count)| PopularQuery {
            category: table.find_match(&query).map(|hit| hit.entry.category),
            query,
            count,
        })
        .collect();
    queries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.query.cmp(&b.query)));
    queries.truncate(limit);
    queries
}

fn trends(selected: &[&Conversation]) -> Vec<DailyCount> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for conversation in selected {
        *days.entry(conversation.created_at.date_naive()).or_default() += 1;
    }
    days.into_iter()
        .map(|(date, conversations)| DailyCount {
            date,
            conversations,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::Responder;
    use chrono::TimeZone;

    fn conversation_at(lang: Lang, created: DateTime<Utc>, inputs: &[&str], rating: Option<u8>) -> Conversation {
        let responder = Responder::default();
        let mut conv = Conversation::start("s", lang);
        for input in inputs {
            conv.send(&responder, input);
        }
        conv.created_at = created;
        conv.user_satisfaction = rating;
        conv
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 31, 12, 0, 0).unwrap()
    }

    #[test]
    fn time_range_bounds() {
        assert_eq!(TimeRange::Week.since(now()), Some(now() - Duration::days(7)));
        assert_eq!(TimeRange::All.since(now()), None);
    }

    #[test]
    fn empty_input_gives_zeroes() {
        let analytics = summarize(&FaqTable::builtin(), &[], TimeRange::All, now(), 5);
        assert_eq!(analytics.total_conversations, 0);
        assert_eq!(analytics.escalation_rate, 0.0);
        assert_eq!(analytics.average_satisfaction, None);
        assert!(analytics.language_distribution.is_empty());
    }

    #[test]
    fn old_conversations_fall_outside_range() {
        let recent = conversation_at(Lang::En, now() - Duration::days(2), &["fee"], None);
        let old = conversation_at(Lang::Hi, now() - Duration::days(45), &["fee"], None);
        let analytics = summarize(&FaqTable::builtin(), &[recent, old], TimeRange::Month, now(), 5);
        assert_eq!(analytics.total_conversations, 1);
        assert_eq!(analytics.language_distribution[0].language, Lang::En);
        assert_eq!(analytics.language_distribution[0].percentage, 100.0);
    }

    #[test]
    fn aggregates_queries_and_escalations() {
        let day = now() - Duration::days(1);
        let convs = vec![
            conversation_at(Lang::En, day, &["Fee structure", "asdkjasnd"], Some(4)),
            conversation_at(Lang::En, day, &["  fee structure "], Some(5)),
            conversation_at(Lang::Hi, now(), &["hostel"], None),
        ];
        let analytics = summarize(&FaqTable::builtin(), &convs, TimeRange::Week, now(), 2);

        assert_eq!(analytics.total_conversations, 3);
        assert_eq!(analytics.user_queries, 4);
        assert_eq!(analytics.escalations, 1);
        assert_eq!(analytics.escalation_rate, 0.25);
        assert_eq!(analytics.rated_conversations, 2);
        assert_eq!(analytics.average_satisfaction, Some(4.5));

        assert_eq!(analytics.popular_queries.len(), 2);
        assert_eq!(analytics.popular_queries[0].query, "fee structure");
        assert_eq!(analytics.popular_queries[0].count, 2);
        assert_eq!(
            analytics.popular_queries[0].category,
            Some(Category::FeesAndScholarships)
        );
        // ties sorted by query text
        assert_eq!(analytics.popular_queries[1].query, "asdkjasnd");
        assert_eq!(analytics.popular_queries[1].category, None);

        let en = &analytics.language_distribution[0];
        assert_eq!((en.language, en.count), (Lang::En, 2));
        assert_eq!(en.percentage, 66.7);

        assert_eq!(analytics.conversation_trends.len(), 2);
        assert_eq!(analytics.conversation_trends[0].conversations, 2);
    }
}
