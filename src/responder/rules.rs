// SPDX-License-Identifier: PMPL-1.0-or-later

//! Token sets behind the non-FAQ rules
//!
//! All tokens are lower case and matched as substrings of the lower-cased
//! text, exactly like FAQ keywords. That makes `hi` fire inside `this`; see
//! the tests for the cases this produces.

use crate::types::RuleKind;

/// Words a user types to ask for more on the previous answer.
pub const MORE_DETAIL_TOKENS: &[&str] = &["more", "detail", "और", "अधिक"];

/// Markers that the previous bot message was about admissions.
pub const ADMISSION_MARKERS: &[&str] = &["admission", "प्रवेश"];

pub const GREETING_TOKENS: &[&str] = &["hello", "hi", "hey", "namaste", "नमस्ते", "हैलो"];

/// Rules in priority order; the first that fires produces the reply.
pub const RULE_ORDER: &[RuleKind] = &[
    RuleKind::Keyword,
    RuleKind::FollowUp,
    RuleKind::Greeting,
    RuleKind::Fallback,
];

pub fn contains_any(lowered: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| lowered.contains(token))
}

pub fn asks_for_more(lowered_input: &str) -> bool {
    contains_any(lowered_input, MORE_DETAIL_TOKENS)
}

/// Case-sensitive, unlike the input predicates.
pub fn mentions_admissions(content: &str) -> bool {
    contains_any(content, ADMISSION_MARKERS)
}

pub fn is_greeting(lowered_input: &str) -> bool {
    contains_any(lowered_input, GREETING_TOKENS)
}
