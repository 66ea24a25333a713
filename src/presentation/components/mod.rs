mod editor;
mod footer;
mod form;
mod popup;

pub use editor::render_editor;
pub use footer::render_footer;
pub use form::render_form;
pub use popup::render_popup;
