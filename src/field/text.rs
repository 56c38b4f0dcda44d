use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use indexmap::IndexMap;

/// Presentation shape of a text control. None of this affects
/// synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Date,
    Multiline {
        rows: u16,
    },
}

impl InputKind {
    pub fn hint(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Date => "date (YYYY-MM-DD)",
            InputKind::Multiline { .. } => "text, multi-line",
        }
    }
}

/// Pass-through presentation configuration for a text field. The
/// `extra` map carries arbitrary string attributes the consumer wants
/// forwarded to its own rendering; this layer never interprets them.
#[derive(Debug, Clone)]
pub struct TextConfig {
    pub label: String,
    pub placeholder: Option<String>,
    pub kind: InputKind,
    pub extra: IndexMap<String, String>,
}

impl TextConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: None,
            kind: InputKind::Text,
            extra: IndexMap::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

pub(crate) fn handle_text_edit(buffer: &mut String, config: &TextConfig, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            buffer.push(ch);
            true
        }
        KeyCode::Enter => {
            if matches!(config.kind, InputKind::Multiline { .. }) {
                buffer.push('\n');
                true
            } else {
                false
            }
        }
        KeyCode::Backspace => {
            buffer.pop();
            true
        }
        KeyCode::Delete => {
            buffer.clear();
            true
        }
        _ => false,
    }
}
