use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::field::FormField;
use crate::store::FieldStore;

/// Ordered set of fields bound to one store, with a focus cursor.
///
/// The model is the binding layer: it routes keys to the focused
/// field, polls every deferred-commit deadline on [`FormModel::tick`],
/// and blurs the departing field when focus moves so its value is
/// committed (and the field touched) before anything else observes the
/// store.
#[derive(Debug, Clone, Default)]
pub struct FormModel {
    fields: Vec<FormField>,
    focus: usize,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: FormField) {
        self.fields.push(field);
    }

    pub fn with_field(mut self, field: FormField) -> Self {
        self.push(field);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|field| field.name() == name)
    }

    /// Overwrite every field's buffer from the store. Used once after
    /// the fields are bound; absent slots read as empty.
    pub fn seed(&mut self, store: &dyn FieldStore) {
        for field in &mut self.fields {
            let value = store.get(field.name()).map(str::to_string);
            field.sync_external(value.as_deref());
        }
    }

    /// External push for one slot: write the store, then overwrite the
    /// field's buffer unconditionally. Any in-flight edit of that field
    /// is discarded.
    pub fn set_value(&mut self, name: &str, value: &str, store: &mut dyn FieldStore) -> bool {
        let Some(field) = self.field_mut(name) else {
            return false;
        };
        store.set(name, value.to_string());
        field.sync_external(Some(value));
        true
    }

    pub fn set_loading(&mut self, name: &str, loading: bool) -> bool {
        match self.field_mut(name) {
            Some(field) => field.set_loading(loading),
            None => false,
        }
    }

    /// Route a key to the focused field.
    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> bool {
        match self.fields.get_mut(self.focus) {
            Some(field) => field.handle_key(key, now),
            None => false,
        }
    }

    /// Poll every deferred-commit deadline; returns how many commits
    /// landed in the store.
    pub fn tick(&mut self, now: Instant, store: &mut dyn FieldStore) -> usize {
        let mut fired = 0;
        for field in &mut self.fields {
            if field.tick(now, store) {
                fired += 1;
            }
        }
        fired
    }

    pub fn focus_next(&mut self, store: &mut dyn FieldStore) {
        self.move_focus(1, store);
    }

    pub fn focus_prev(&mut self, store: &mut dyn FieldStore) {
        self.move_focus(-1, store);
    }

    fn move_focus(&mut self, delta: i32, store: &mut dyn FieldStore) {
        if self.fields.is_empty() {
            return;
        }
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.blur(store);
        }
        let len = self.fields.len() as i32;
        let next = (self.focus as i32 + delta).rem_euclid(len);
        self.focus = next as usize;
    }

    /// Blur every field: commit all divergences immediately. Used on
    /// save so the snapshot reflects what the user sees.
    pub fn flush_all(&mut self, store: &mut dyn FieldStore) -> usize {
        let mut committed = 0;
        for field in &mut self.fields {
            if field.blur(store) {
                committed += 1;
            }
        }
        committed
    }

    pub fn is_dirty(&self) -> bool {
        self.fields.iter().any(|field| field.is_dirty())
    }

    pub fn pending_count(&self) -> usize {
        self.fields.iter().filter(|field| field.is_pending()).count()
    }
}
