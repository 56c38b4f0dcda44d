use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::field::{FormField, InputKind, TextConfig};
use crate::store::{FieldStore, FormStore};
use crate::sync::FieldCore;

const DELAY: Duration = Duration::from_millis(300);

fn text_field(initial: Option<&str>) -> FormField {
    FormField::text(
        FieldCore::new("clientName", initial, DELAY),
        TextConfig::new("Client name").with_placeholder("Acme Inc."),
    )
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn typed_characters_land_in_the_buffer_immediately() {
    let mut field = text_field(Some("Acme"));
    let now = Instant::now();
    assert!(field.handle_key(&key(KeyCode::Char(' ')), now));
    assert!(field.handle_key(&key(KeyCode::Char('I')), now));
    assert_eq!(field.display_value(), "Acme I");
    assert!(field.is_pending());
}

#[test]
fn control_characters_are_rejected() {
    let mut field = text_field(None);
    let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
    assert!(!field.handle_key(&ctrl_a, Instant::now()));
    assert_eq!(field.display_value(), "");
}

#[test]
fn backspace_pops_and_delete_clears() {
    let mut field = text_field(Some("ab"));
    let now = Instant::now();
    assert!(field.handle_key(&key(KeyCode::Backspace), now));
    assert_eq!(field.display_value(), "a");
    assert!(field.handle_key(&key(KeyCode::Delete), now));
    assert_eq!(field.display_value(), "");
}

#[test]
fn enter_inserts_a_newline_only_in_multiline_fields() {
    let mut single = text_field(Some("a"));
    assert!(!single.handle_key(&key(KeyCode::Enter), Instant::now()));

    let mut multi = FormField::text(
        FieldCore::new("notes", Some("a"), DELAY),
        TextConfig::new("Notes").with_kind(InputKind::Multiline { rows: 3 }),
    );
    assert!(multi.handle_key(&key(KeyCode::Enter), Instant::now()));
    assert_eq!(multi.display_value(), "a\n");
}

#[test]
fn debounced_edit_commits_into_the_store() {
    let mut field = text_field(Some("Acme"));
    let mut store = FormStore::new();
    let start = Instant::now();
    assert!(field.handle_key(&key(KeyCode::Char('!')), start));
    assert!(!field.tick(start + Duration::from_millis(299), &mut store));
    assert!(field.tick(start + Duration::from_millis(300), &mut store));
    assert_eq!(store.get("clientName"), Some("Acme!"));
    assert!(!store.is_touched("clientName"));
}

#[test]
fn dropping_a_pending_field_never_commits() {
    let store = FormStore::new();
    {
        let mut field = text_field(Some("Acme"));
        field.handle_key(&key(KeyCode::Char('!')), Instant::now());
        // Field goes away before its delay elapses.
    }
    assert_eq!(store.get("clientName"), None);
}

#[test]
fn blur_commits_synchronously_and_touches() {
    let mut field = text_field(Some("Acme"));
    let mut store = FormStore::new();
    let start = Instant::now();
    field.handle_key(&key(KeyCode::Char('!')), start);
    assert!(field.blur(&mut store));
    assert_eq!(store.get("clientName"), Some("Acme!"));
    assert!(store.is_touched("clientName"));
    // The deferred commit was cancelled; nothing fires later.
    assert!(!field.tick(start + Duration::from_millis(400), &mut store));
}

#[test]
fn blur_without_divergence_still_touches() {
    let mut field = text_field(Some("Acme"));
    let mut store = FormStore::new();
    assert!(!field.blur(&mut store));
    assert_eq!(store.get("clientName"), None);
    assert!(store.is_touched("clientName"));
}

#[test]
fn extra_attributes_pass_through_untouched() {
    let config = TextConfig::new("Client name")
        .with_attr("autocomplete", "organization")
        .with_attr("maxlength", "120");
    assert_eq!(
        config.extra.get("autocomplete").map(String::as_str),
        Some("organization")
    );
    assert_eq!(config.extra.get("maxlength").map(String::as_str), Some("120"));
}
