mod select;
mod text;

use std::time::Instant;

use crossterm::event::KeyEvent;

pub use select::{FieldPhase, OptionView, SelectControl, SelectOption};
pub use text::{InputKind, TextConfig};

use crate::store::FieldStore;
use crate::sync::FieldCore;

/// What kind of control a field renders as. Both variants share the
/// same synchronization core; the control only shapes input handling
/// and display.
#[derive(Debug, Clone)]
pub enum FieldControl {
    Text(TextConfig),
    Select(SelectControl),
}

/// A named field: one synchronization core plus its control.
#[derive(Debug, Clone)]
pub struct FormField {
    core: FieldCore,
    control: FieldControl,
}

impl FormField {
    pub fn text(core: FieldCore, config: TextConfig) -> Self {
        Self {
            core,
            control: FieldControl::Text(config),
        }
    }

    pub fn select(core: FieldCore, control: SelectControl) -> Self {
        Self {
            core,
            control: FieldControl::Select(control),
        }
    }

    pub fn name(&self) -> &str {
        self.core.name()
    }

    pub fn label(&self) -> &str {
        match &self.control {
            FieldControl::Text(config) => &config.label,
            FieldControl::Select(control) => &control.label,
        }
    }

    pub fn control(&self) -> &FieldControl {
        &self.control
    }

    pub fn core(&self) -> &FieldCore {
        &self.core
    }

    /// The value shown in the control. For selects this is a projection:
    /// empty while options are loading, otherwise the label of the
    /// matching option.
    pub fn display_value(&self) -> String {
        match &self.control {
            FieldControl::Text(_) => self.core.local().to_string(),
            FieldControl::Select(control) => control.display_value(self.core.local()),
        }
    }

    /// Route a key to the control. Returns whether the key was consumed.
    /// Accepted edits update the buffer synchronously and re-arm the
    /// deferred commit.
    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> bool {
        match &mut self.control {
            FieldControl::Text(config) => {
                let mut buffer = self.core.local().to_string();
                if text::handle_text_edit(&mut buffer, config, key) {
                    self.core.edit(buffer, now);
                    true
                } else {
                    false
                }
            }
            FieldControl::Select(control) => {
                if control.loading() {
                    return false;
                }
                match control.next_value(self.core.local(), key) {
                    Some(value) => {
                        self.core.edit(value, now);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// The store pushed a new committed value from outside; overwrite
    /// the buffer unconditionally.
    pub fn sync_external(&mut self, value: Option<&str>) {
        self.core.sync_external(value);
    }

    /// Fire the deferred commit into the store if its delay has elapsed.
    pub fn tick(&mut self, now: Instant, store: &mut dyn FieldStore) -> bool {
        match self.core.poll_commit(now) {
            Some(value) => {
                store.set(self.core.name(), value);
                true
            }
            None => false,
        }
    }

    /// Losing focus: commit any divergence immediately, then mark the
    /// field touched. The commit lands strictly before the touch so
    /// blur-time validation sees the committed value. A loading select
    /// is non-interactive and ignores the blur entirely.
    pub fn blur(&mut self, store: &mut dyn FieldStore) -> bool {
        if let FieldControl::Select(control) = &self.control
            && control.loading()
        {
            return false;
        }
        let committed = match self.core.flush() {
            Some(value) => {
                store.set(self.core.name(), value);
                true
            }
            None => false,
        };
        store.touch(self.core.name());
        committed
    }

    /// Loading transition for selects; entering the loading state
    /// cancels any pending commit so no stale edit lands mid-load.
    /// Returns false for text fields.
    pub fn set_loading(&mut self, loading: bool) -> bool {
        match &mut self.control {
            FieldControl::Select(control) => {
                if loading && !control.loading() {
                    self.core.cancel_pending();
                }
                control.set_loading(loading);
                true
            }
            FieldControl::Text(_) => false,
        }
    }

    pub fn phase(&self) -> FieldPhase {
        if let FieldControl::Select(control) = &self.control
            && control.loading()
        {
            return FieldPhase::Loading;
        }
        if self.core.is_pending() {
            FieldPhase::PendingCommit
        } else {
            FieldPhase::Idle
        }
    }

    pub fn is_pending(&self) -> bool {
        self.core.is_pending()
    }

    pub fn is_dirty(&self) -> bool {
        self.core.is_dirty()
    }
}
