use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::field::{FormField, InputKind, SelectControl, SelectOption, TextConfig};
use crate::form::FormModel;
use crate::sync::FieldCore;

/// A form described as data: an ordered list of field entries. This is
/// the document the CLI accepts.
#[derive(Debug, Clone, Deserialize)]
pub struct FormDefinition {
    #[serde(default)]
    pub title: Option<String>,
    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub kind: KindDef,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub rows: Option<u16>,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub loading_label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindDef {
    #[default]
    Text,
    Email,
    Date,
    Multiline,
    Select,
}

/// A definition entry that cannot be turned into a field.
#[derive(Debug, Clone)]
pub struct DefinitionError {
    pub field: String,
    pub message: String,
}

impl DefinitionError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for DefinitionError {}

pub fn parse_form_definition(value: &Value) -> Result<FormDefinition, DefinitionError> {
    let definition: FormDefinition = serde_json::from_value(value.clone())
        .map_err(|err| DefinitionError::new("<document>", err.to_string()))?;
    validate(&definition)?;
    Ok(definition)
}

fn validate(definition: &FormDefinition) -> Result<(), DefinitionError> {
    if definition.fields.is_empty() {
        return Err(DefinitionError::new(
            "<document>",
            "a form needs at least one field",
        ));
    }
    for (index, field) in definition.fields.iter().enumerate() {
        if field.name.is_empty() {
            return Err(DefinitionError::new(
                &format!("fields[{index}]"),
                "field name must not be empty",
            ));
        }
        let duplicate = definition.fields[..index]
            .iter()
            .any(|earlier| earlier.name == field.name);
        if duplicate {
            return Err(DefinitionError::new(
                &field.name,
                "duplicate field name",
            ));
        }
        match field.kind {
            KindDef::Select => {
                if field.options.is_empty() {
                    return Err(DefinitionError::new(
                        &field.name,
                        "select fields need at least one option",
                    ));
                }
            }
            KindDef::Multiline => {}
            _ => {
                if field.rows.is_some() {
                    return Err(DefinitionError::new(
                        &field.name,
                        "rows only applies to multiline fields",
                    ));
                }
                if !field.options.is_empty() {
                    return Err(DefinitionError::new(
                        &field.name,
                        "options only apply to select fields",
                    ));
                }
            }
        }
    }
    Ok(())
}

impl FormDefinition {
    /// Instantiate the fields with the given deferred-commit delay.
    /// Buffers start empty; seed the model from a store afterwards.
    pub fn build(&self, delay: Duration) -> FormModel {
        let mut model = FormModel::new();
        for def in &self.fields {
            let core = FieldCore::new(&def.name, None, delay);
            let field = match def.kind {
                KindDef::Select => {
                    let mut control =
                        SelectControl::new(&def.label, def.options.clone());
                    if let Some(label) = &def.loading_label {
                        control = control.with_loading_label(label);
                    }
                    FormField::select(core, control)
                }
                kind => {
                    let mut config = TextConfig::new(&def.label).with_kind(match kind {
                        KindDef::Email => InputKind::Email,
                        KindDef::Date => InputKind::Date,
                        KindDef::Multiline => InputKind::Multiline {
                            rows: def.rows.unwrap_or(3),
                        },
                        _ => InputKind::Text,
                    });
                    if let Some(placeholder) = &def.placeholder {
                        config = config.with_placeholder(placeholder);
                    }
                    FormField::text(core, config)
                }
            };
            model.push(field);
        }
        model
    }
}
