// SPDX-License-Identifier: PMPL-1.0-or-later

//! Campus Assist: a multilingual FAQ responder for campus support.
//!
//! Given a user query, a language and the prior conversation, the
//! responder picks one reply from four ordered rules:
//!
//! 1. **Keyword**: the first FAQ entry with a keyword inside the query.
//! 2. **Follow-up**: "more details" right after an admissions answer.
//! 3. **Greeting**: hello/namaste and friends.
//! 4. **Fallback**: an apology that asks for a human.
//!
//! Around it sit the conversation session, a JSON-lines service boundary,
//! transcript files and analytics over them.

pub mod analytics;
pub mod config;
pub mod error;
pub mod faq;
pub mod i18n;
pub mod report;
pub mod responder;
pub mod service;
pub mod session;
pub mod transcript;
pub mod types;

pub use error::{AssistError, Result};
pub use faq::{FaqEntry, FaqTable};
pub use i18n::Lang;
pub use responder::{respond, Responder};
pub use types::{Category, Conversation, Message, Reply, RuleKind};
