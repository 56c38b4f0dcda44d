use crossterm::event::{KeyCode, KeyEvent};
use serde::Deserialize;

/// One choice in a select control: the committed `value` and the text
/// shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A row as the control wants it rendered. While the option set is
/// loading this is a single disabled placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

/// Interactive surface of a select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPhase {
    Idle,
    PendingCommit,
    Loading,
}

/// Select control: an externally supplied ordered option set plus a
/// loading flag. While loading the field is non-interactive, shows no
/// selection, and renders exactly one disabled placeholder row.
#[derive(Debug, Clone)]
pub struct SelectControl {
    pub label: String,
    options: Vec<SelectOption>,
    loading: bool,
    loading_label: String,
}

impl SelectControl {
    pub fn new(label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            label: label.into(),
            options,
            loading: false,
            loading_label: "Loading...".to_string(),
        }
    }

    pub fn with_loading_label(mut self, label: impl Into<String>) -> Self {
        self.loading_label = label.into();
        self
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Projection of the buffer onto the option set. Forced empty while
    /// loading; an unmatched buffer value is shown raw.
    pub fn display_value(&self, local: &str) -> String {
        if self.loading {
            return String::new();
        }
        self.options
            .iter()
            .find(|option| option.value == local)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| local.to_string())
    }

    /// The rows to render: the real option set, or one disabled
    /// placeholder while loading.
    pub fn visible_options(&self) -> Vec<OptionView> {
        if self.loading {
            return vec![OptionView {
                value: String::new(),
                label: self.loading_label.clone(),
                disabled: true,
            }];
        }
        self.options
            .iter()
            .map(|option| OptionView {
                value: option.value.clone(),
                label: option.label.clone(),
                disabled: false,
            })
            .collect()
    }

    pub fn selected_index(&self, local: &str) -> Option<usize> {
        self.options.iter().position(|option| option.value == local)
    }

    /// The option value a key moves the selection to, with wrap-around.
    /// A buffer that matches no option starts from the first entry.
    pub(crate) fn next_value(&self, local: &str, key: &KeyEvent) -> Option<String> {
        if self.options.is_empty() {
            return None;
        }
        let selected = self.selected_index(local);
        let next = match key.code {
            KeyCode::Up | KeyCode::Left => match selected {
                Some(0) | None => self.options.len() - 1,
                Some(index) => index - 1,
            },
            KeyCode::Down | KeyCode::Right => match selected {
                Some(index) => (index + 1) % self.options.len(),
                None => 0,
            },
            _ => return None,
        };
        Some(self.options[next].value.clone())
    }
}
