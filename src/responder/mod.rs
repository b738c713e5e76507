// SPDX-License-Identifier: PMPL-1.0-or-later

//! Query matching and localized replies
//!
//! A greedy, order-sensitive matcher: FAQ keywords, then the admissions
//! follow-up, then greetings, then a fallback that escalates to staff.
//! There is no scoring. The first rule that fires produces the reply.

pub mod engine;
pub mod rules;

use std::sync::LazyLock;

use crate::i18n::Lang;
use crate::types::{Message, Reply};

pub use engine::Responder;

static BUILTIN: LazyLock<Responder> = LazyLock::new(Responder::default);

/// Reply to `input` using the built-in FAQ table.
pub fn respond(input: &str, lang: Lang, history: &[Message]) -> Reply {
    BUILTIN.respond(input, lang, history)
}
