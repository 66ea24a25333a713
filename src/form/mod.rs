mod error;
mod field;
mod rules;
mod state;
mod submission;

pub use error::SubmitError;
pub use field::FieldState;
pub use field::components::{ChoiceStateRef, ComponentKind};
pub use rules::FieldRules;
pub use state::FormState;
pub use submission::SubmissionRecord;
