// SPDX-License-Identifier: PMPL-1.0-or-later

//! Script-based language guess for free text.
//!
//! Marathi shares the Devanagari block with Hindi and is reported as Hindi;
//! the guess is only meant to pre-select a language, never to override one
//! the user picked.

use crate::i18n::Lang;

/// Guess the language of `text` from the Unicode blocks it uses.
///
/// Devanagari wins over Gujarati, which wins over Tamil; anything else is
/// English.
pub fn detect_language(text: &str) -> Lang {
    if text.chars().any(is_devanagari) {
        Lang::Hi
    } else if text.chars().any(is_gujarati) {
        Lang::Gu
    } else if text.chars().any(is_tamil) {
        Lang::Ta
    } else {
        Lang::En
    }
}

fn is_devanagari(c: char) -> bool {
    matches!(c, '\u{0900}'..='\u{097F}')
}

fn is_gujarati(c: char) -> bool {
    matches!(c, '\u{0A80}'..='\u{0AFF}')
}

fn is_tamil(c: char) -> bool {
    matches!(c, '\u{0B80}'..='\u{0BFF}')
}
