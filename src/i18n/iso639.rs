// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 code validation and English language names.
//!
//! Used to tell a user who typed `--lang fr` that French is a real language
//! the assistant does not speak, as opposed to `--lang xx` which is a typo.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Validates whether a string is a known ISO 639-1 two-letter language code.
///
/// # Examples
/// ```
/// assert!(campus_assist::i18n::is_valid_iso639_1("gu"));
/// assert!(campus_assist::i18n::is_valid_iso639_1("fr"));
/// assert!(!campus_assist::i18n::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    matches!(
        code,
        "aa" | "ab" | "af" | "ak" | "am" | "an" | "ar" | "as" | "av" | "ay" | "az"
            | "ba" | "be" | "bg" | "bh" | "bi" | "bm" | "bn" | "bo" | "br" | "bs"
            | "ca" | "ce" | "ch" | "co" | "cr" | "cs" | "cu" | "cv" | "cy"
            | "da" | "de" | "dv" | "dz"
            | "ee" | "el" | "en" | "eo" | "es" | "et" | "eu"
            | "fa" | "ff" | "fi" | "fj" | "fo" | "fr" | "fy"
            | "ga" | "gd" | "gl" | "gn" | "gu" | "gv"
            | "ha" | "he" | "hi" | "ho" | "hr" | "ht" | "hu" | "hy" | "hz"
            | "ia" | "id" | "ie" | "ig" | "ii" | "ik" | "io" | "is" | "it" | "iu"
            | "ja" | "jv"
            | "ka" | "kg" | "ki" | "kj" | "kk" | "kl" | "km" | "kn" | "ko" | "kr" | "ks" | "ku" | "kv" | "kw" | "ky"
            | "la" | "lb" | "lg" | "li" | "ln" | "lo" | "lt" | "lu" | "lv"
            | "mg" | "mh" | "mi" | "mk" | "ml" | "mn" | "mr" | "ms" | "mt" | "my"
            | "na" | "nb" | "nd" | "ne" | "ng" | "nl" | "nn" | "no" | "nr" | "nv" | "ny"
            | "oc" | "oj" | "om" | "or" | "os"
            | "pa" | "pi" | "pl" | "ps" | "pt"
            | "qu"
            | "rm" | "rn" | "ro" | "ru" | "rw"
            | "sa" | "sc" | "sd" | "se" | "sg" | "si" | "sk" | "sl" | "sm" | "sn" | "so" | "sq" | "sr" | "ss" | "st" | "su" | "sv" | "sw"
            | "ta" | "te" | "tg" | "th" | "ti" | "tk" | "tl" | "tn" | "to" | "tr" | "ts" | "tt" | "tw" | "ty"
            | "ug" | "uk" | "ur" | "uz"
            | "ve" | "vi" | "vo"
            | "wa" | "wo"
            | "xh"
            | "yi" | "yo"
            | "za" | "zh" | "zu"
    )
}

/// English name of an ISO 639-1 code.
///
/// Covers the supported languages and the other scheduled languages of
/// India that students most often ask for; `None` otherwise.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "hi" => Some("Hindi"),
        "mr" => Some("Marathi"),
        "gu" => Some("Gujarati"),
        "ta" => Some("Tamil"),
        "bn" => Some("Bengali"),
        "te" => Some("Telugu"),
        "kn" => Some("Kannada"),
        "ml" => Some("Malayalam"),
        "pa" => Some("Punjabi"),
        "or" => Some("Odia"),
        "as" => Some("Assamese"),
        "ur" => Some("Urdu"),
        "ne" => Some("Nepali"),
        "sa" => Some("Sanskrit"),
        _ => None,
    }
}
