// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for campus-assist.
//!
//! Embeds every fixed assistant utterance and CLI label for the supported
//! languages as compile-time static tables. Lookup is a linear scan over a
//! dozen keys per language, which is nothing next to formatting a reply.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add arms to `Lang::code()`, `Lang::from_code()` and `Lang::native_name()`
//! 3. Create a `const XX: &[(&str, &str)]` table below
//! 4. Add `Lang::Xx => XX` to the match in `catalog_for()`
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add translations where available (missing keys fall back to English)

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AssistError;
use crate::i18n::iso639::{is_valid_iso639_1, language_name};

/// Languages the assistant answers in.
///
/// Serialized as the lowercase ISO 639-1 code. Parsing goes through
/// [`FromStr`] everywhere, so `--lang`, config files and the service wire
/// format all accept the code in any case with surrounding blanks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Lang {
    #[default]
    En,
    Hi,
    Mr,
    Gu,
    Ta,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hi => "hi",
            Lang::Mr => "mr",
            Lang::Gu => "gu",
            Lang::Ta => "ta",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive (codes must be
    /// lowercase per ISO 639-1).
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "hi" => Some(Lang::Hi),
            "mr" => Some(Lang::Mr),
            "gu" => Some(Lang::Gu),
            "ta" => Some(Lang::Ta),
            _ => None,
        }
    }

    /// All supported languages, in selector order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Hi, Lang::Mr, Lang::Gu, Lang::Ta]
    }

    /// Name of the language written in its own script.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Hi => "हिंदी",
            Lang::Mr => "मराठी",
            Lang::Gu => "ગુજરાતી",
            Lang::Ta => "தமிழ்",
        }
    }

    /// English name, from the ISO 639-1 table.
    pub fn english_name(&self) -> &'static str {
        language_name(self.code()).unwrap_or("")
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Lang {
    type Err = AssistError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let code = value.trim().to_ascii_lowercase();
        if let Some(lang) = Lang::from_code(&code) {
            return Ok(lang);
        }
        if is_valid_iso639_1(&code) {
            Err(AssistError::UnsupportedLanguage(code))
        } else {
            Err(AssistError::UnknownLanguageCode(value.to_string()))
        }
    }
}

impl TryFrom<String> for Lang {
    type Error = AssistError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a translation key in the specified language.
///
/// Falls back to English if the key is not found in the requested language,
/// and to `""` when English lacks it too (never panics).
///
/// # Examples
///
/// ```
/// use campus_assist::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "label.suggestions"), "Suggestions");
/// assert_eq!(t(Lang::Hi, "label.suggestions"), "सुझाव");
/// // Marathi has no expanded admissions text, so English is used.
/// assert_eq!(t(Lang::Mr, "chat.admissions_detail"), t(Lang::En, "chat.admissions_detail"));
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::En {
        if let Some(value) = lookup(EN, key) {
            return value;
        }
    }
    ""
}

/// Returns the translation or the key itself if missing.
pub fn t_or_key<'a>(lang: Lang, key: &'a str) -> &'a str {
    let result = t(lang, key);
    if result.is_empty() {
        key
    } else {
        result
    }
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Hi => HI,
        Lang::Mr => MR,
        Lang::Gu => GU,
        Lang::Ta => TA,
    }
}

// ─── English (source language, every key defined here) ──────────────

const EN: &[(&str, &str)] = &[
    // Assistant utterances
    ("chat.welcome", "Hello! I'm your campus assistant. How can I help you today?"),
    (
        "chat.greeting",
        "Hello! I'm your campus assistant. I can help you with admissions, fees, hostel facilities, examinations, library information, and more. What would you like to know?",
    ),
    (
        "chat.fallback",
        "I'm sorry, I don't have specific information about that. Our office staff can provide more detailed assistance. Would you like me to connect you with human support?",
    ),
    (
        "chat.admissions_detail",
        "For more detailed admission information: You can apply online through our website. Required documents include 12th mark sheet, transfer certificate, and entrance exam scorecard. Application fee is ₹500.",
    ),
    (
        "chat.unavailable",
        "I'm sorry, I'm having trouble right now. Please try again or contact our office directly.",
    ),
    // CLI labels
    ("label.you", "You"),
    ("label.assistant", "Assistant"),
    ("label.suggestions", "Suggestions"),
    ("label.escalate", "Our office staff will follow up"),
    ("label.category", "Category"),
    ("label.keywords", "Keywords"),
];

// ─── Hindi ──────────────────────────────────────────────────────────

const HI: &[(&str, &str)] = &[
    ("chat.welcome", "नमस्ते! मैं आपका कैंपस सहायक हूं। आज मैं आपकी कैसे मदद कर सकता हूं?"),
    (
        "chat.greeting",
        "नमस्ते! मैं आपका कैंपस सहायक हूं। मैं प्रवेश, फीस, छात्रावास सुविधाएं, परीक्षा, पुस्तकालय जानकारी आदि में आपकी मदद कर सकता हूं। आप क्या जानना चाहते हैं?",
    ),
    // Opens with an apology; an earlier wording opened with "मुझे खुशी है"
    // ("I am glad"), which contradicted the rest of the sentence.
    (
        "chat.fallback",
        "क्षमा करें, मेरे पास इसके बारे में विशिष्ट जानकारी नहीं है। हमारे कार्यालय स्टाफ अधिक विस्तृत सहायता प्रदान कर सकते हैं। क्या आप चाहते हैं कि मैं आपको मानवीय सहायता से जोड़ूं?",
    ),
    (
        "chat.admissions_detail",
        "अधिक विस्तृत प्रवेश जानकारी के लिए: आप हमारी वेबसाइट के माध्यम से ऑनलाइन आवेदन कर सकते हैं। आवश्यक दस्तावेजों में 12वीं की मार्कशीट, स्थानांतरण प्रमाणपत्र और प्रवेश परीक्षा स्कोरकार्ड शामिल हैं। आवेदन शुल्क ₹500 है।",
    ),
    (
        "chat.unavailable",
        "क्षमा करें, मुझे अभी कुछ समस्या हो रही है। कृपया पुनः प्रयास करें या सीधे हमारे कार्यालय से संपर्क करें।",
    ),
    ("label.you", "आप"),
    ("label.assistant", "सहायक"),
    ("label.suggestions", "सुझाव"),
    ("label.escalate", "हमारे कार्यालय स्टाफ आपसे संपर्क करेंगे"),
    ("label.category", "श्रेणी"),
    ("label.keywords", "कीवर्ड"),
];

// ─── Marathi ────────────────────────────────────────────────────────

const MR: &[(&str, &str)] = &[
    ("chat.welcome", "नमस्कार! मी तुमचा कॅम्पस सहाय्यक आहे। आज मी तुम्हाला कशी मदत करू शकतो?"),
    (
        "chat.greeting",
        "नमस्कार! मी तुमचा कॅम्पस सहाय्यक आहे। मी प्रवेश, फी, वसतिगृह सुविधा, परीक्षा, ग्रंथालय माहिती इत्यादीमध्ये तुम्हाला मदत करू शकतो. तुम्हाला काय जाणून घ्यायचे आहे?",
    ),
    (
        "chat.fallback",
        "मला माफ करा, माझ्याकडे त्याबद्दल विशिष्ट माहिती नाही. आमचे कार्यालयीन कर्मचारी अधिक तपशीलवार मदत देऊ शकतात. तुम्हाला मी तुम्हाला मानवी समर्थनाशी जोडावे असे वाटते का?",
    ),
    ("label.you", "तुम्ही"),
    ("label.assistant", "सहाय्यक"),
    ("label.suggestions", "सूचना"),
    ("label.category", "वर्ग"),
];

// ─── Gujarati ───────────────────────────────────────────────────────

const GU: &[(&str, &str)] = &[
    ("chat.welcome", "નમસ્તે! હું તમારો કેમ્પસ સહાયક છું. આજે હું તમારી કેવી રીતે મદદ કરી શકું?"),
    (
        "chat.greeting",
        "નમસ્તે! હું તમારો કેમ્પસ સહાયક છું. હું પ્રવેશ, ફી, હોસ્ટેલ સુવિધાઓ, પરીક્ષા, પુસ્તકાલય માહિતી વગેરેમાં તમારી મદદ કરી શકું છું. તમે શું જાણવા માંગો છો?",
    ),
    (
        "chat.fallback",
        "માફ કરજો, મારી પાસે તે વિશે વિશિષ્ટ માહિતી નથી. અમારો ઓફિસ સ્ટાફ વધુ વિગતવાર સહાય પૂરી પાડી શકે છે. શું તમે ઇચ્છો છો કે હું તમને માનવ સહાય સાથે જોડું?",
    ),
    ("label.you", "તમે"),
    ("label.assistant", "સહાયક"),
    ("label.suggestions", "સૂચનો"),
    ("label.category", "શ્રેણી"),
];

// ─── Tamil ──────────────────────────────────────────────────────────

const TA: &[(&str, &str)] = &[
    ("chat.welcome", "வணக்கம்! நான் உங்கள் கேம்பஸ் உதவியாளர். இன்று நான் உங்களுக்கு எவ்வாறு உதவ முடியும்?"),
    (
        "chat.greeting",
        "வணக்கம்! நான் உங்கள் கேம்பஸ் உதவியாளர். நான் சேர்க்கை, கட்டணம், விடுதி வசதிகள், தேர்வுகள், நூலக தகவல் போன்றவற்றில் உங்களுக்கு உதவ முடியும். நீங்கள் என்ன அறிய விரும்புகிறீர்கள்?",
    ),
    (
        "chat.fallback",
        "மன்னிக்கவும், அதைப் பற்றி எனக்கு குறிப்பிட்ட தகவல் இல்லை. எங்கள் அலுவலக ஊழியர்கள் மிக விரிவான உதவியை வழங்க முடியும். நான் உங்களை மனித ஆதரவுடன் இணைக்க வேண்டுமா?",
    ),
    ("label.you", "நீங்கள்"),
    ("label.assistant", "உதவியாளர்"),
    ("label.suggestions", "பரிந்துரைகள்"),
    ("label.category", "வகை"),
];
