use super::schema::{
    FieldKind, FormField, FormFieldOption, FormFieldValidation, FormSchema, Pattern,
};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// The document the editor opens with when no schema is supplied.
pub fn project_survey() -> FormSchema {
    FormSchema {
        form_title: "Project Requirements Survey".to_string(),
        form_description: "Please fill out this survey about your project needs".to_string(),
        fields: vec![
            FormField {
                id: "name".to_string(),
                kind: FieldKind::Text,
                label: "Full Name".to_string(),
                required: true,
                placeholder: Some("Enter your full name".to_string()),
                options: None,
                validation: None,
            },
            FormField {
                id: "email".to_string(),
                kind: FieldKind::Email,
                label: "Email Address".to_string(),
                required: true,
                placeholder: Some("you@example.com".to_string()),
                options: None,
                validation: Pattern::new(EMAIL_PATTERN)
                    .ok()
                    .map(|pattern| FormFieldValidation {
                        pattern,
                        message: "Please enter a valid email address".to_string(),
                    }),
            },
            FormField {
                id: "companySize".to_string(),
                kind: FieldKind::Select,
                label: "Company Size".to_string(),
                required: true,
                placeholder: None,
                options: Some(vec![
                    FormFieldOption::new("1-50", "1-50 employees"),
                    FormFieldOption::new("51-200", "51-200 employees"),
                    FormFieldOption::new("201-1000", "201-1000 employees"),
                    FormFieldOption::new("1000+", "1000+ employees"),
                ]),
                validation: None,
            },
        ],
    }
}
