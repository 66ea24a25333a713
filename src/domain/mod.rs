mod error;
mod parser;
pub(crate) mod sample;
mod schema;

pub use error::{STRUCTURE_MESSAGE, SchemaError, SchemaErrorKind};
pub use parser::{parse_schema_str, validate};
pub use sample::project_survey;
pub use schema::{FieldKind, FormField, FormFieldOption, FormFieldValidation, FormSchema, Pattern};
