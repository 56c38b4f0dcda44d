use anyhow::Result;
use serde_json::Value;

use crate::{form::FormModel, store::FormStore};

use super::{App, UiOptions};

/// Entry point for running a form as a full-screen terminal UI.
///
/// ```no_run
/// use std::time::Duration;
/// use fieldsync::{FieldCore, FormField, FormModel, FormUi, SelectControl, SelectOption, TextConfig};
///
/// let model = FormModel::new()
///     .with_field(FormField::text(
///         FieldCore::new("client", None, Duration::from_millis(300)),
///         TextConfig::new("Client name").with_placeholder("Acme Inc."),
///     ))
///     .with_field(FormField::select(
///         FieldCore::new("status", Some("active"), Duration::from_millis(300)),
///         SelectControl::new(
///             "Status",
///             vec![
///                 SelectOption::new("active", "Active"),
///                 SelectOption::new("inactive", "Inactive"),
///             ],
///         ),
///     ));
///
/// let committed = FormUi::new(model).with_title("New client").run()?;
/// println!("{committed}");
/// # anyhow::Ok(())
/// ```
#[derive(Debug)]
pub struct FormUi {
    model: FormModel,
    title: Option<String>,
    description: Option<String>,
    seed: Option<Value>,
    options: UiOptions,
}

impl FormUi {
    pub fn new(model: FormModel) -> Self {
        Self {
            model,
            title: None,
            description: None,
            seed: None,
            options: UiOptions::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Pre-fill the store with committed values from a JSON object
    /// before the fields bind to it.
    pub fn with_seed(mut self, seed: Value) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the event loop until save or quit. Returns the committed
    /// values as a JSON object on save.
    pub fn run(self) -> Result<Value> {
        let FormUi {
            mut model,
            title,
            description,
            seed,
            options,
        } = self;

        let mut store = FormStore::new();
        if let Some(seed) = &seed {
            store.seed_from_value(seed);
        }
        model.seed(&store);

        let mut app = App::new(model, store, title, description, options);
        app.run()
    }
}
