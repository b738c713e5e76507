// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for campus-assist.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | hi   | Hindi    | हिंदी        |
//! | mr   | Marathi  | मराठी        |
//! | gu   | Gujarati | ગુજરાતી      |
//! | ta   | Tamil    | தமிழ்        |
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"chat.greeting"`,
//! `"label.suggestions"`. Lookups fall back to English when a key is missing
//! in the requested language. Suggestion lists follow the same rule through
//! [`suggestions`].
//!
//! Everything here is static data: no file I/O, and `t` never allocates.

mod catalog;
mod detect;
mod iso639;
pub mod suggestions;

pub use catalog::{t, t_or_key, Lang};
pub use detect::detect_language;
pub use iso639::{is_valid_iso639_1, language_name};
pub use suggestions::{category_suggestions, general_suggestions, MAX_CATEGORY_SUGGESTIONS};
