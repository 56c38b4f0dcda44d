use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::field::{FieldPhase, FormField, SelectControl, SelectOption};
use crate::store::{FieldStore, FormStore};
use crate::sync::FieldCore;

const DELAY: Duration = Duration::from_millis(300);

fn status_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("lead", "Lead"),
        SelectOption::new("active", "Active"),
        SelectOption::new("archived", "Archived"),
    ]
}

fn select_field(initial: Option<&str>) -> FormField {
    FormField::select(
        FieldCore::new("status", initial, DELAY),
        SelectControl::new("Status", status_options()).with_loading_label("Loading statuses..."),
    )
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn arrows_cycle_through_options_with_wrap() {
    let mut field = select_field(Some("lead"));
    let now = Instant::now();
    assert!(field.handle_key(&key(KeyCode::Right), now));
    assert_eq!(field.display_value(), "Active");
    assert!(field.handle_key(&key(KeyCode::Right), now));
    assert!(field.handle_key(&key(KeyCode::Right), now));
    assert_eq!(field.display_value(), "Lead");
    assert!(field.handle_key(&key(KeyCode::Left), now));
    assert_eq!(field.display_value(), "Archived");
}

#[test]
fn display_shows_the_label_not_the_value() {
    let field = select_field(Some("active"));
    assert_eq!(field.display_value(), "Active");
}

#[test]
fn unknown_buffer_value_is_shown_raw() {
    let field = select_field(Some("draft"));
    assert_eq!(field.display_value(), "draft");
}

#[test]
fn pick_then_blur_commits_once_with_the_option_value() {
    let mut field = select_field(Some("active"));
    let mut store = FormStore::new();
    let start = Instant::now();
    field.handle_key(&key(KeyCode::Left), start);
    assert_eq!(field.display_value(), "Lead");
    // Blur at t=50, before the 300 ms window elapses.
    assert!(field.blur(&mut store));
    assert_eq!(store.get("status"), Some("lead"));
    assert!(!field.tick(start + Duration::from_millis(400), &mut store));
}

#[test]
fn debounced_pick_commits_the_option_value() {
    let mut field = select_field(Some("lead"));
    let mut store = FormStore::new();
    let start = Instant::now();
    field.handle_key(&key(KeyCode::Right), start);
    assert!(field.tick(start + Duration::from_millis(300), &mut store));
    assert_eq!(store.get("status"), Some("active"));
}

#[test]
fn loading_forces_an_empty_projection() {
    let mut field = select_field(Some("active"));
    field.set_loading(true);
    assert_eq!(field.display_value(), "");
}

#[test]
fn loading_replaces_options_with_one_disabled_placeholder() {
    let mut field = select_field(Some("active"));
    field.set_loading(true);
    let crate::field::FieldControl::Select(control) = field.control() else {
        panic!("expected a select control");
    };
    let views = control.visible_options();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].value, "");
    assert_eq!(views[0].label, "Loading statuses...");
    assert!(views[0].disabled);
}

#[test]
fn keys_are_ignored_while_loading() {
    let mut field = select_field(Some("active"));
    field.set_loading(true);
    assert!(!field.handle_key(&key(KeyCode::Right), Instant::now()));
}

#[test]
fn entering_loading_cancels_a_pending_commit() {
    let mut field = select_field(Some("lead"));
    let mut store = FormStore::new();
    let start = Instant::now();
    field.handle_key(&key(KeyCode::Right), start);
    assert_eq!(field.phase(), FieldPhase::PendingCommit);
    field.set_loading(true);
    assert_eq!(field.phase(), FieldPhase::Loading);
    // No commit from the stale pick while loading.
    assert!(!field.tick(start + Duration::from_millis(400), &mut store));
    assert_eq!(store.get("status"), None);
}

#[test]
fn leaving_loading_resumes_normal_semantics() {
    let mut field = select_field(Some("active"));
    field.set_loading(true);
    field.set_loading(false);
    assert_eq!(field.phase(), FieldPhase::Idle);
    assert_eq!(field.display_value(), "Active");

    let mut store = FormStore::new();
    let start = Instant::now();
    assert!(field.handle_key(&key(KeyCode::Right), start));
    assert!(field.tick(start + Duration::from_millis(300), &mut store));
    assert_eq!(store.get("status"), Some("archived"));
}

#[test]
fn blur_is_ignored_while_loading() {
    let mut field = select_field(Some("lead"));
    let mut store = FormStore::new();
    field.handle_key(&key(KeyCode::Right), Instant::now());
    field.set_loading(true);
    assert!(!field.blur(&mut store));
    assert_eq!(store.get("status"), None);
    assert!(!store.is_touched("status"));
}

#[test]
fn set_loading_is_refused_for_text_fields() {
    let mut field = FormField::text(
        FieldCore::new("clientName", None, DELAY),
        crate::field::TextConfig::new("Client name"),
    );
    assert!(!field.set_loading(true));
}

#[test]
fn phase_walks_idle_pending_idle() {
    let mut field = select_field(Some("lead"));
    let mut store = FormStore::new();
    let start = Instant::now();
    assert_eq!(field.phase(), FieldPhase::Idle);
    field.handle_key(&key(KeyCode::Right), start);
    assert_eq!(field.phase(), FieldPhase::PendingCommit);
    field.tick(start + Duration::from_millis(300), &mut store);
    assert_eq!(field.phase(), FieldPhase::Idle);
}
