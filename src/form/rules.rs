use crate::domain::{FormField, Pattern};

/// The checks one field's value must pass. Built once per schema version so
/// patterns are never recompiled while typing.
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    required: Option<String>,
    pattern: Option<(Pattern, String)>,
}

impl FieldRules {
    pub fn for_field(field: &FormField) -> Self {
        let required = field
            .required
            .then(|| format!("{} is required", field.display_label()));
        let pattern = field
            .validation
            .as_ref()
            .filter(|_| field.kind.accepts_pattern())
            .map(|rule| (rule.pattern.clone(), rule.message.clone()));
        Self { required, pattern }
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    /// An empty value only fails the required rule; the pattern applies to
    /// non-empty values.
    pub fn check(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            return match &self.required {
                Some(message) => Err(message.clone()),
                None => Ok(()),
            };
        }
        if let Some((pattern, message)) = &self.pattern
            && !pattern.is_match(value)
        {
            return Err(message.clone());
        }
        Ok(())
    }
}
