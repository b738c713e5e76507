// SPDX-License-Identifier: PMPL-1.0-or-later

//! Authored FAQ tables loaded from disk

use campus_assist::faq::{FaqFilter, FaqTable};
use campus_assist::{Category, Lang, Responder, RuleKind};
use std::fs;

const TRANSPORT_YAML: &str = r#"
entries:
  - id: bus
    category: Transportation
    keywords: ["  Bus ", "shuttle", "bus"]
    question: Is there a campus bus?
    answer: Campus shuttles leave the main gate every 20 minutes from 7 AM.
    localized:
      hi:
        question: क्या कैंपस बस है?
        answer: कैंपस शटल मुख्य द्वार से सुबह 7 बजे से हर 20 मिनट में चलती है।
  - id: calendar
    category: Academic Calendar
    keywords: [semester, holiday]
    question: When does the semester start?
    answer: The odd semester starts in the first week of August.
"#;

#[test]
fn test_load_yaml_table_and_answer_from_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("faq.yaml");
    fs::write(&path, TRANSPORT_YAML).unwrap();

    let table = FaqTable::load(&path).expect("table should load");
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("bus").unwrap().keywords, vec!["bus", "shuttle"]);

    let responder = Responder::new(table);
    let reply = responder.respond("Which BUS goes to the station?", Lang::Hi, &[]);
    assert_eq!(reply.rule, RuleKind::Keyword);
    assert_eq!(reply.category, Some(Category::Transportation));
    assert!(reply.content.contains("शटल"));
    // no suggestions registered for transportation
    assert!(reply.suggestions.is_empty());

    // the built-in fees entry is gone
    let reply = responder.respond("fee", Lang::En, &[]);
    assert_eq!(reply.rule, RuleKind::Fallback);
}

#[test]
fn test_json_and_yaml_copies_share_fingerprint() {
    let dir = tempfile::tempdir().unwrap();
    let builtin = FaqTable::builtin();

    let yaml_path = dir.path().join("faq.yml");
    fs::write(&yaml_path, builtin.to_yaml().unwrap()).unwrap();

    let entries = serde_json::to_string(&serde_json::json!({ "entries": builtin.entries() })).unwrap();
    let json_path = dir.path().join("faq.json");
    fs::write(&json_path, entries).unwrap();

    let from_yaml = FaqTable::load(&yaml_path).unwrap();
    let from_json = FaqTable::load(&json_path).unwrap();
    assert_eq!(from_yaml, builtin);
    assert_eq!(from_yaml.fingerprint().unwrap(), from_json.fingerprint().unwrap());
    assert_eq!(from_json.fingerprint().unwrap().len(), 64);
}

#[test]
fn test_invalid_table_reports_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(
        &path,
        "entries:\n  - id: x\n    category: Library\n    keywords: ['']\n    question: q\n    answer: a\n",
    )
    .unwrap();

    let err = FaqTable::load(&path).unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.contains("broken.yaml"), "{}", chain);
    assert!(chain.contains("blank keyword"), "{}", chain);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(FaqTable::load(&dir.path().join("absent.yaml")).is_err());
}

#[test]
fn test_filter_builtin_table() {
    let table = FaqTable::builtin();

    let fees = table.filter(&FaqFilter {
        category: Some(Category::FeesAndScholarships),
        ..Default::default()
    });
    assert_eq!(fees.len(), 1);
    assert_eq!(fees[0].id, "fees");

    let hindi = table.filter(&FaqFilter {
        search: Some("पुस्तकालय".to_string()),
        language: Lang::Hi,
        ..Default::default()
    });
    assert_eq!(hindi.len(), 1);
    assert_eq!(hindi[0].id, "library");

    assert_eq!(table.filter(&FaqFilter::default()).len(), table.len());
}

#[test]
fn test_builtin_categories() {
    let counts = FaqTable::builtin().categories();
    assert_eq!(counts.len(), 5);
    assert!(counts.iter().all(|c| c.entries == 1));
}
