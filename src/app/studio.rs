use anyhow::Result;

use crate::{
    domain::FormSchema,
    io::{self, OutputOptions},
};

use super::{
    options::UiOptions,
    runtime::{App, Session},
};

/// Split-screen terminal UI: schema text on the left, the live form on the right.
#[derive(Debug)]
pub struct FormStudio {
    schema: FormSchema,
    title: Option<String>,
    options: UiOptions,
    output: Option<OutputOptions>,
}

impl FormStudio {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            title: None,
            options: UiOptions::default(),
            output: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Write the last submission record here once the UI closes.
    pub fn with_output(mut self, output: OutputOptions) -> Self {
        self.output = Some(output);
        self
    }

    pub fn run(self) -> Result<Session> {
        let FormStudio {
            schema,
            title,
            options,
            output,
        } = self;

        let mut app = App::new(schema, title, options);
        app.run()?;
        let session = app.into_session();

        if let (Some(output), Some(record)) = (output.as_ref(), session.submission.as_ref()) {
            io::emit(record, output)?;
        }
        Ok(session)
    }
}
