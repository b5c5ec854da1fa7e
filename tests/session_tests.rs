// SPDX-License-Identifier: PMPL-1.0-or-later

//! Scripted runs of the interactive session

use country_translator::i18n::LanguageCodeConverter;
use country_translator::session::{self, Session};
use country_translator::store::TranslationStore;
use std::io::Cursor;

fn transcript(store: &TranslationStore, lines: &[&str]) -> String {
    let input = lines.iter().map(|line| format!("{}\n", line)).collect::<String>();
    let mut output = Vec::new();
    Session::new(store, Cursor::new(input), &mut output)
        .run()
        .expect("session should finish");
    String::from_utf8(output).expect("transcript should be UTF-8")
}

fn bundled() -> TranslationStore {
    TranslationStore::embedded().expect("bundled dataset should load")
}

#[test]
fn test_translates_selection() {
    let out = transcript(&bundled(), &["Canada", "French", "", "quit"]);
    assert!(
        out.lines().any(|line| line == "Canada in French is Canada"),
        "transcript:\n{}",
        out
    );
    // Enter after a result goes back to the country prompt.
    assert_eq!(
        out.matches("Select a country from above or type 'quit' to exit:").count(),
        2
    );
}

#[test]
fn test_invalid_country_reprompts() {
    let out = transcript(&bundled(), &["Nowhere", "quit"]);
    assert!(out.contains("Invalid country selected."));
    assert_eq!(
        out.matches("Select a country from above or type 'quit' to exit:").count(),
        2
    );
    assert!(!out.contains("Select a language"));
}

#[test]
fn test_invalid_language_returns_to_country_prompt() {
    let out = transcript(&bundled(), &["Canada", "Klingon", "quit"]);
    assert!(out.contains("Invalid language selected."));
    assert_eq!(
        out.matches("Select a country from above or type 'quit' to exit:").count(),
        2
    );
}

#[test]
fn test_quit_at_each_prompt() {
    let store = bundled();

    let out = transcript(&store, &["QUIT"]);
    assert!(!out.contains("Select a language"));

    let out = transcript(&store, &["canada", "Quit"]);
    assert!(out.contains("Select a language from above or type 'quit' to exit:"));
    assert!(!out.contains(" is "));

    let out = transcript(&store, &["Canada", "German", "quit", "Canada"]);
    assert!(out.contains("Canada in German is Kanada"));
    assert_eq!(
        out.matches("Select a country from above or type 'quit' to exit:").count(),
        1
    );
}

#[test]
fn test_end_of_input_ends_session() {
    let out = transcript(&bundled(), &[]);
    assert!(out.contains("Select a country from above or type 'quit' to exit:"));
}

#[test]
fn test_country_list_is_sorted_english_names() {
    let store = bundled();
    let out = transcript(&store, &["quit"]);
    let listed: Vec<&str> = out
        .lines()
        .take_while(|line| !line.starts_with("Select a country"))
        .collect();
    let mut sorted = listed.clone();
    sorted.sort();
    assert_eq!(listed, sorted);
    assert_eq!(listed.len(), store.len());
    assert!(listed.contains(&"Canada"));
}

#[test]
fn test_language_list_skips_first_language() {
    let store = bundled();
    let names = session::language_names(&store, &LanguageCodeConverter::new(), "can");
    assert!(names.contains(&"French"));
    assert!(names.contains(&"English"));
    assert!(!names.contains(&"Arabic"));
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_country_without_languages_ends_session() {
    let store = TranslationStore::from_json_str(r#"[{"alpha3": "abc", "en": "Abcland"}]"#)
        .expect("dataset should load");
    let out = transcript(&store, &["Abcland", "English"]);
    assert!(out.contains("No available languages for this country."));
    assert!(!out.contains("Select a language"));
}

#[test]
fn test_unknown_language_codes_are_not_listed() {
    let store = TranslationStore::from_json_str(
        r#"[{"alpha3": "xyz", "en": "Xyzland", "qq": "Qqland", "fr": "Pays XYZ"}]"#,
    )
    .expect("dataset should load");
    let names = session::language_names(&store, &LanguageCodeConverter::new(), "xyz");
    assert_eq!(names, vec!["French"]);
}

#[test]
fn test_resolve_country() {
    let store = bundled();
    assert_eq!(session::resolve_country(&store, "united kingdom").as_deref(), Some("gbr"));
    assert_eq!(session::resolve_country(&store, "  GERMANY ").as_deref(), Some("deu"));
    assert_eq!(session::resolve_country(&store, "Atlantis"), None);
}

#[test]
fn test_non_utf8_line_is_an_invalid_country() {
    let store = bundled();
    let mut output = Vec::new();
    Session::new(&store, Cursor::new(&b"Cura\xe7ao\nquit\n"[..]), &mut output)
        .run()
        .expect("undecodable input should not end the session with an error");
    let out = String::from_utf8(output).expect("transcript should be UTF-8");
    assert!(out.contains("Invalid country selected."), "transcript:\n{}", out);
    assert_eq!(
        out.matches("Select a country from above or type 'quit' to exit:").count(),
        2
    );
}

#[test]
fn test_non_utf8_line_is_an_invalid_language() {
    let store = bundled();
    let mut output = Vec::new();
    Session::new(&store, Cursor::new(&b"Canada\nFren\xe7h\nquit\n"[..]), &mut output)
        .run()
        .expect("undecodable input should not end the session with an error");
    let out = String::from_utf8(output).expect("transcript should be UTF-8");
    assert!(out.contains("Invalid language selected."), "transcript:\n{}", out);
}

#[test]
fn test_translate_once() {
    let store = bundled();
    let line = session::translate_once(&store, "Canada", "German").expect("lookup should succeed");
    assert_eq!(line, "Canada in German is Kanada");
}

#[test]
fn test_translate_once_trims_names() {
    let store = bundled();
    let line = session::translate_once(&store, " Canada ", "\tFrench ").expect("lookup should succeed");
    assert_eq!(line, "Canada in French is Canada");
}

#[test]
fn test_translate_once_unknown_country() {
    let err = session::translate_once(&bundled(), "Atlantis", "French").unwrap_err();
    assert!(err.to_string().contains("unknown country: Atlantis"));
}

#[test]
fn test_translate_once_unknown_language() {
    let err = session::translate_once(&bundled(), "Canada", "Klingon").unwrap_err();
    assert!(err.to_string().contains("unknown language: Klingon"));
}

#[test]
fn test_translate_once_missing_translation() {
    let store = TranslationStore::from_json_str(
        r#"[{"alpha3": "abc", "en": "Abcland", "fr": "Abcpays"}]"#,
    )
    .expect("dataset should load");
    let err = session::translate_once(&store, "Abcland", "Zulu").unwrap_err();
    assert!(err.to_string().contains("no Zulu name for Abcland"));
}

#[test]
fn test_country_names_for_listing() {
    let store = TranslationStore::from_json_str(
        r#"[{"alpha3": "zzz", "en": "Zedland"}, {"alpha3": "aaa", "en": "Ayland"}, {"alpha3": "nne", "fr": "Sans nom"}]"#,
    )
    .expect("dataset should load");
    assert_eq!(session::country_names(&store), vec!["Ayland", "Zedland"]);
}
