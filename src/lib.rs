#![deny(rust_2018_idioms)]

mod app;
pub mod domain;
pub mod editor;
pub mod form;
pub mod io;
mod presentation;
pub mod store;

pub use app::{FormStudio, Session, UiOptions};
pub use domain::{
    FieldKind, FormField, FormFieldOption, FormFieldValidation, FormSchema, SchemaError,
    SchemaErrorKind, parse_schema_str, project_survey,
};
pub use form::{FormState, SubmissionRecord};
pub use store::SchemaStore;

pub mod prelude {
    pub use super::{
        FormSchema, FormState, FormStudio, SchemaError, SchemaStore, Session, SubmissionRecord,
        UiOptions, parse_schema_str,
    };
}

#[cfg(test)]
mod tests;
