// SPDX-License-Identifier: PMPL-1.0-or-later

//! Responder behaviour against the built-in FAQ table

use campus_assist::i18n::{general_suggestions, t};
use campus_assist::{respond, Category, FaqTable, Lang, Message, Responder, RuleKind};

#[test]
fn test_every_keyword_in_any_casing_answers_its_entry() {
    let table = FaqTable::builtin();
    let responder = Responder::new(table.clone());

    for entry in table.entries() {
        for keyword in &entry.keywords {
            for query in [keyword.clone(), keyword.to_uppercase(), format!("Tell me: {}?", keyword)] {
                let reply = responder.respond(&query, Lang::Hi, &[]);
                let hit = table.find_match(&query).expect("keyword should match");
                assert_eq!(reply.rule, RuleKind::Keyword, "query {:?}", query);
                // an earlier entry may own a shorter keyword inside this one
                assert_eq!(reply.content, hit.entry.answer(Lang::Hi), "query {:?}", query);
                assert!(!reply.needs_human_help);
            }
        }
    }
}

#[test]
fn test_fee_structure_in_english() {
    let reply = respond("What is the fee structure?", Lang::En, &[]);
    assert_eq!(reply.category, Some(Category::FeesAndScholarships));
    assert!(reply.content.contains("₹50,000"));
    assert!(reply.content.starts_with("The annual fee"));
    assert!(!reply.needs_human_help);
    assert!(!reply.suggestions.is_empty());
}

#[test]
fn test_fee_query_in_hindi() {
    let reply = respond("फीस कितनी है?", Lang::Hi, &[]);
    assert_eq!(reply.category, Some(Category::FeesAndScholarships));
    assert!(reply.content.contains("वार्षिक शुल्क"));
    assert!(!reply.needs_human_help);
}

#[test]
fn test_untranslated_language_uses_default_answer() {
    let reply = respond("library", Lang::Ta, &[]);
    assert_eq!(reply.category, Some(Category::Library));
    assert!(reply.content.starts_with("The library is open"));
}

#[test]
fn test_hello_gets_greeting_with_five_suggestions() {
    let reply = respond("hello", Lang::En, &[]);
    assert_eq!(reply.rule, RuleKind::Greeting);
    assert_eq!(reply.content, t(Lang::En, "chat.greeting"));
    assert_eq!(reply.suggestions.len(), 5);
    assert!(!reply.needs_human_help);
}

#[test]
fn test_follow_up_after_admissions_message() {
    let history = vec![
        Message::user("hello", Lang::En),
        Message::bot("I can tell you about admission requirements.", Lang::En),
    ];
    let reply = respond("tell me more details", Lang::En, &history);
    assert_eq!(reply.rule, RuleKind::FollowUp);
    assert_eq!(reply.content, t(Lang::En, "chat.admissions_detail"));
    assert!(!reply.needs_human_help);
}

#[test]
fn test_follow_up_only_looks_at_latest_bot_message() {
    let history = vec![
        Message::bot("Your admission needs 75% marks.", Lang::En),
        Message::user("and the library?", Lang::En),
        Message::bot("The library is open until 10 PM.", Lang::En),
    ];
    let reply = respond("tell me more details", Lang::En, &history);
    assert_eq!(reply.rule, RuleKind::Fallback);
    assert!(reply.needs_human_help);
}

#[test]
fn test_capitalized_admission_marker_does_not_follow_up() {
    let history = vec![Message::bot("Admission needs 75% marks.", Lang::En)];
    let reply = respond("tell me more", Lang::En, &history);
    assert_eq!(reply.rule, RuleKind::Fallback);
    assert!(reply.needs_human_help);
}

#[test]
fn test_follow_up_needs_history() {
    let reply = respond("tell me more details", Lang::En, &[]);
    assert_eq!(reply.rule, RuleKind::Fallback);
}

#[test]
fn test_hindi_follow_up() {
    let history = vec![Message::bot("प्रवेश के लिए 75% अंक चाहिए।", Lang::Hi)];
    let reply = respond("और बताइए", Lang::Hi, &history);
    assert_eq!(reply.rule, RuleKind::FollowUp);
    assert_eq!(reply.content, t(Lang::Hi, "chat.admissions_detail"));
}

#[test]
fn test_gibberish_falls_back_and_escalates() {
    let reply = respond("asdkjasnd", Lang::En, &[]);
    assert_eq!(reply.rule, RuleKind::Fallback);
    assert!(reply.needs_human_help);
    assert_eq!(reply.suggestions, general_suggestions(Lang::En));
    assert_eq!(reply.suggestions.len(), 5);
}

#[test]
fn test_substring_matching_quirk() {
    // "coffee" contains the fees keyword "fee"
    let reply = respond("coffee", Lang::En, &[]);
    assert_eq!(reply.category, Some(Category::FeesAndScholarships));

    // "this" contains the greeting "hi"
    let reply = respond("this", Lang::En, &[]);
    assert_eq!(reply.rule, RuleKind::Greeting);
}

#[test]
fn test_same_inputs_same_reply() {
    let history = vec![Message::bot("admission info", Lang::En)];
    let first = respond("more please", Lang::Gu, &history);
    let second = respond("more please", Lang::Gu, &history);
    assert_eq!(first, second);
}

#[test]
fn test_every_language_has_greeting_and_fallback() {
    for lang in Lang::all() {
        let greeting = respond("namaste", *lang, &[]);
        assert!(!greeting.content.is_empty());
        assert_eq!(greeting.suggestions.len(), 5);

        let fallback = respond("qwxz", *lang, &[]);
        assert!(!fallback.content.is_empty());
        assert!(fallback.needs_human_help);
    }
}

#[test]
fn test_shared_responder_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Responder>();

    let responder = std::sync::Arc::new(Responder::default());
    let handles: Vec<_> = Lang::all()
        .iter()
        .map(|lang| {
            let responder = std::sync::Arc::clone(&responder);
            let lang = *lang;
            std::thread::spawn(move || responder.respond("fee", lang, &[]).category)
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(Category::FeesAndScholarships));
    }
}
