#![deny(rust_2018_idioms)]

mod app;
mod definition;
mod field;
mod form;
mod presentation;
mod store;
mod sync;

#[cfg(test)]
mod tests;

pub use app::{FormUi, UiOptions};
pub use definition::{DefinitionError, FieldDef, FormDefinition, KindDef, parse_form_definition};
pub use field::{
    FieldControl, FieldPhase, FormField, InputKind, OptionView, SelectControl, SelectOption,
    TextConfig,
};
pub use form::FormModel;
pub use store::{FieldStore, FormStore};
pub use sync::{DEFAULT_COMMIT_DELAY, FieldCore};

pub mod prelude {
    pub use super::{
        FieldCore, FormField, FormModel, FormUi, SelectControl, SelectOption, TextConfig, UiOptions,
    };
}
