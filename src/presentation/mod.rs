mod fields;
mod view;

pub use view::{UiContext, draw};
