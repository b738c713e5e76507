// SPDX-License-Identifier: PMPL-1.0-or-later

//! Follow-up suggestion lists.
//!
//! General suggestions (one per main topic) accompany greetings and
//! fallbacks. Category suggestions accompany keyword answers and exist only
//! for the categories registered in `category_table()`; the rest get none.

use crate::i18n::Lang;
use crate::types::Category;

/// Upper bound on suggestions attached to a keyword answer.
pub const MAX_CATEGORY_SUGGESTIONS: usize = 3;

type SuggestionTable = &'static [(Lang, &'static [&'static str])];

/// The five-topic list for greetings and fallbacks, English if untranslated.
pub fn general_suggestions(lang: Lang) -> Vec<String> {
    pick(GENERAL, lang)
        .map(to_owned_list)
        .unwrap_or_default()
}

/// Up to [`MAX_CATEGORY_SUGGESTIONS`] suggestions for `category`.
///
/// Uses the English list when the language has none, and returns an empty
/// list for categories without registered suggestions.
pub fn category_suggestions(category: Category, lang: Lang) -> Vec<String> {
    let Some(table) = category_table(category) else {
        return Vec::new();
    };
    pick(table, lang)
        .map(|list| {
            list.iter()
                .take(MAX_CATEGORY_SUGGESTIONS)
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

fn pick(table: SuggestionTable, lang: Lang) -> Option<&'static [&'static str]> {
    let find = |wanted: Lang| {
        table
            .iter()
            .find(|(l, _)| *l == wanted)
            .map(|(_, list)| *list)
    };
    find(lang).or_else(|| find(Lang::En))
}

fn to_owned_list(list: &'static [&'static str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn category_table(category: Category) -> Option<SuggestionTable> {
    match category {
        Category::Admissions => Some(ADMISSIONS),
        Category::FeesAndScholarships => Some(FEES),
        _ => None,
    }
}

const GENERAL: SuggestionTable = &[
    (
        Lang::En,
        &["Admission requirements", "Fee structure", "Hostel facilities", "Library timings", "Exam schedule"],
    ),
    (
        Lang::Hi,
        &["प्रवेश आवश्यकताएं", "फीस संरचना", "छात्रावास सुविधाएं", "पुस्तकालय समय", "परीक्षा कार्यक्रम"],
    ),
    (
        Lang::Mr,
        &["प्रवेश आवश्यकता", "फी रचना", "वसतिगृह सुविधा", "ग्रंथालय वेळ", "परीक्षा वेळापत्रक"],
    ),
    (
        Lang::Gu,
        &["પ્રવેશ આવશ્યકતાઓ", "ફી માળખું", "હોસ્ટેલ સુવિધાઓ", "પુસ્તકાલય સમય", "પરીક્ષા સમયપત્રક"],
    ),
    (
        Lang::Ta,
        &["சேர்க்கை தேவைகள்", "கட்டண கட்டமைப்பு", "விடுதி வசதிகள்", "நூலக நேரங்கள்", "தேர்வு அட்டவணை"],
    ),
];

const ADMISSIONS: SuggestionTable = &[
    (
        Lang::En,
        &["What documents are needed?", "When is the admission deadline?", "How to apply online?"],
    ),
    (
        Lang::Hi,
        &["कौन से दस्तावेज़ चाहिए?", "प्रवेश की अंतिम तारीख कब है?", "ऑनलाइन आवेदन कैसे करें?"],
    ),
    (
        Lang::Mr,
        &["कोणती कागदपत्रे लागतात?", "प्रवेशाची शेवटची तारीख केव्हा आहे?", "ऑनलाइन अर्ज कसा करावा?"],
    ),
    (
        Lang::Gu,
        &["કયા દસ્તાવેજોની જરૂર છે?", "પ્રવેશની અંતિમ તારીખ ક્યારે છે?", "ઓનલાઇન અરજી કેવી રીતે કરવી?"],
    ),
    (
        Lang::Ta,
        &["என்ன ஆவணங்கள் தேவை?", "சேர்க்கைக்கான கடைசி தேதி எப்போது?", "ஆன்லைனில் எவ்வாறு விண்ணப்பிப்பது?"],
    ),
];

const FEES: SuggestionTable = &[
    (
        Lang::En,
        &["What scholarships are available?", "Can I pay fees in installments?", "How to apply for financial aid?"],
    ),
    (
        Lang::Hi,
        &["कौन सी छात्रवृत्तियां उपलब्ध हैं?", "क्या मैं किश्तों में फीस दे सकता हूं?", "वित्तीय सहायता के लिए कैसे आवेदन करें?"],
    ),
    (
        Lang::Mr,
        &["कोणती शिष्यवृत्ती उपलब्ध आहे?", "मी हप्त्यांमध्ये फी भरू शकतो का?", "आर्थिक मदतीसाठी अर्ज कसा करावा?"],
    ),
    (
        Lang::Gu,
        &["કયા શિષ્યવૃત્તિ ઉપલબ્ધ છે?", "શું હું હપ્તામાં ફી ભરી શકું?", "નાણાકીય સહાય માટે કેવી રીતે અરજી કરવી?"],
    ),
    (
        Lang::Ta,
        // "உதவித்தொகைகள்" replaces a stray Hindi "छात्रवृत्ति" in the first item
        &["என்ன உதவித்தொகைகள் கிடைக்கும்?", "கட்டணத்தை தவணையில் செலுத்த முடியுமா?", "நிதி உதவிக்கு எவ்வாறு விண்ணப்பிப்பது?"],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_list_has_five_topics_everywhere() {
        for lang in Lang::all() {
            assert_eq!(general_suggestions(*lang).len(), 5, "{:?}", lang);
        }
        assert_eq!(general_suggestions(Lang::En)[1], "Fee structure");
    }

    #[test]
    fn category_lists_are_capped_and_localized() {
        let hi = category_suggestions(Category::FeesAndScholarships, Lang::Hi);
        assert_eq!(hi.len(), MAX_CATEGORY_SUGGESTIONS);
        assert_eq!(hi[0], "कौन सी छात्रवृत्तियां उपलब्ध हैं?");
    }

    #[test]
    fn tamil_fee_suggestions_stay_in_tamil_script() {
        let ta = category_suggestions(Category::FeesAndScholarships, Lang::Ta);
        assert_eq!(ta[0], "என்ன உதவித்தொகைகள் கிடைக்கும்?");
        let devanagari = |c: char| ('\u{0900}'..='\u{097F}').contains(&c);
        assert!(ta.iter().all(|s| !s.chars().any(devanagari)), "{:?}", ta);
    }

    #[test]
    fn unregistered_category_has_no_suggestions() {
        assert!(category_suggestions(Category::Hostel, Lang::En).is_empty());
        assert!(category_suggestions(Category::Library, Lang::Ta).is_empty());
    }

    #[test]
    fn every_registered_table_has_english() {
        for category in Category::all() {
            if let Some(table) = category_table(*category) {
                assert!(table.iter().any(|(l, _)| *l == Lang::En), "{:?}", category);
            }
        }
    }
}
