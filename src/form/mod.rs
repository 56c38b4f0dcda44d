mod model;

pub use model::FormModel;
