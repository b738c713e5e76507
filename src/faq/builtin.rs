// SPDX-License-Identifier: PMPL-1.0-or-later

//! The FAQ entries shipped with the assistant
//!
//! Order matters: the responder takes the first entry with a matching
//! keyword, so broad keywords belong in later entries.

use std::collections::BTreeMap;

use crate::faq::entry::{FaqEntry, LocalizedText};
use crate::i18n::Lang;
use crate::types::Category;

pub(crate) fn builtin_entries() -> Vec<FaqEntry> {
    vec![
        entry(
            "admissions",
            Category::Admissions,
            &["admission", "requirements", "eligibility", "प्रवेश", "योग्यता"],
            "What are the admission requirements?",
            "For undergraduate programs, you need to have completed 12th grade with a minimum of 75% marks. You also need to clear our entrance examination.",
            (
                "प्रवेश की आवश्यकताएं क्या हैं?",
                "स्नातक कार्यक्रमों के लिए, आपको न्यूनतम 75% अंकों के साथ 12वीं कक्षा पूरी करनी होगी। आपको हमारी प्रवेश परीक्षा भी उत्तीर्ण करनी होगी।",
            ),
        ),
        entry(
            "fees",
            Category::FeesAndScholarships,
            &["fee", "cost", "fees", "money", "scholarship", "फीस", "शुल्क", "छात्रवृत्ति"],
            "What is the fee structure?",
            "The annual fee for undergraduate programs is ₹50,000. We also offer merit-based scholarships and financial aid for deserving students.",
            (
                "फीस कितनी है?",
                "स्नातक कार्यक्रमों के लिए वार्षिक शुल्क ₹50,000 है। हम योग्यता आधारित छात्रवृत्ति और योग्य छात्रों के लिए वित्तीय सहायता भी प्रदान करते हैं।",
            ),
        ),
        entry(
            "hostel",
            Category::Hostel,
            &["hostel", "accommodation", "room", "stay", "छात्रावास", "कमरा"],
            "What are the hostel facilities?",
            "We have separate hostels for boys and girls with 24/7 security, WiFi, mess facilities, recreation room, and study halls. AC and non-AC rooms are available.",
            (
                "छात्रावास की सुविधाएं क्या हैं?",
                "हमारे पास लड़कों और लड़कियों के लिए अलग छात्रावास हैं जिनमें 24/7 सुरक्षा, WiFi, मेस सुविधाएं, मनोरंजन कक्ष और अध्ययन हॉल हैं। AC और non-AC कमरे उपलब्ध हैं।",
            ),
        ),
        entry(
            "examinations",
            Category::Examinations,
            &["exam", "examination", "test", "schedule", "परीक्षा", "समय सारणी"],
            "When are the examinations?",
            "Mid-term exams are in October and March. Final exams are in December and May. The detailed schedule is published 1 month in advance.",
            (
                "परीक्षाएं कब होती हैं?",
                "मध्यावधि परीक्षाएं अक्टूबर और मार्च में होती हैं। फाइनल परीक्षाएं दिसंबर और मई में होती हैं। विस्तृत समय सारणी 1 महीने पहले प्रकाशित की जाती है।",
            ),
        ),
        entry(
            "library",
            Category::Library,
            &["library", "books", "study", "timings", "पुस्तकालय", "किताबें"],
            "What are the library timings and facilities?",
            "The library is open from 8 AM to 10 PM on weekdays and 9 AM to 6 PM on weekends. We have over 50,000 books, digital resources, and quiet study areas.",
            (
                "पुस्तकालय का समय और सुविधाएं क्या हैं?",
                "पुस्तकालय सप्ताह के दिनों में सुबह 8 बजे से रात 10 बजे तक और सप्ताहांत में सुबह 9 बजे से शाम 6 बजे तक खुला रहता है। हमारे पास 50,000 से अधिक किताबें, डिजिटल संसाधन और शांत अध्ययन क्षेत्र हैं।",
            ),
        ),
    ]
}

fn entry(
    id: &str,
    category: Category,
    keywords: &[&str],
    question: &str,
    answer: &str,
    hindi: (&str, &str),
) -> FaqEntry {
    let mut localized = BTreeMap::new();
    localized.insert(
        Lang::Hi,
        LocalizedText {
            question: hindi.0.to_string(),
            answer: hindi.1.to_string(),
        },
    );
    FaqEntry {
        id: id.to_string(),
        category,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        question: question.to_string(),
        answer: answer.to_string(),
        localized,
    }
}
