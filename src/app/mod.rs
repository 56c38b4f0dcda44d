mod form_ui;
mod options;
mod runtime;
mod status;

pub use form_ui::FormUi;
pub use options::UiOptions;
pub(crate) use runtime::App;
