mod input;
mod options;
mod popup;
mod runtime;
mod status;
mod studio;
mod terminal;

pub use options::UiOptions;
pub use runtime::Session;
pub use studio::FormStudio;
