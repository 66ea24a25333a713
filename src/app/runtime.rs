use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::debug;

use crate::{
    domain::FormSchema,
    editor::{EditOutcome, SchemaEditor},
    form::{FormState, SubmissionRecord, SubmitError},
    presentation::{self, Pane, UiContext},
    store::SchemaStore,
};

use super::{
    input::{HELP_TEXT, KeyCommand, classify},
    options::UiOptions,
    popup::ConfirmationPopup,
    status::{Status, StatusLine},
    terminal::StudioTerminal,
};

/// What a finished session leaves behind.
#[derive(Debug, Clone)]
pub struct Session {
    /// The last schema that passed validation.
    pub schema: Arc<FormSchema>,
    /// The editor text as it was on exit, valid or not.
    pub schema_text: String,
    /// The most recent successful submission, if any.
    pub submission: Option<SubmissionRecord>,
}

pub(crate) struct App {
    store: SchemaStore,
    editor: SchemaEditor,
    form: FormState,
    options: UiOptions,
    title: Option<String>,
    status: StatusLine,
    pane: Pane,
    popup: Option<ConfirmationPopup>,
    exit_armed: bool,
    should_quit: bool,
    last_submission: Option<SubmissionRecord>,
}

impl App {
    pub fn new(schema: FormSchema, title: Option<String>, options: UiOptions) -> Self {
        let editor = SchemaEditor::from_schema(&schema).with_tab_width(options.editor_tab_width);
        let form = FormState::from_schema(&schema).with_live_validation(options.live_validation);
        Self {
            store: SchemaStore::new(schema),
            editor,
            form,
            options,
            title,
            status: StatusLine::default(),
            pane: Pane::Editor,
            popup: None,
            exit_armed: false,
            should_quit: false,
            last_submission: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = StudioTerminal::enter()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(self.options.tick_rate)? {
                self.handle_event(event::read()?);
            }
        }
        Ok(())
    }

    pub fn into_session(self) -> Session {
        Session {
            schema: self.store.current(),
            schema_text: self.editor.text(),
            submission: self.last_submission,
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = self.options.show_help.then_some(HELP_TEXT);
        presentation::draw(
            frame,
            UiContext {
                title: self.title.as_deref(),
                editor: &self.editor,
                form: &self.form,
                pane: self.pane,
                status_message: self.status.message(),
                help,
                popup: self.popup.as_ref().map(ConfirmationPopup::as_render),
            },
        );
    }

    pub(crate) fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Paste(text) => self.on_paste(&text),
            Event::Resize(_, _) | Event::Mouse(_) => {}
            Event::FocusGained | Event::FocusLost => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.popup.is_some() {
            let command = classify(&key, self.pane);
            if matches!(command, KeyCommand::Quit) {
                self.popup = None;
                self.on_exit();
            } else {
                self.popup = None;
                self.status.set(Status::Ready);
            }
            return;
        }

        match classify(&key, self.pane) {
            KeyCommand::Submit => {
                self.exit_armed = false;
                self.on_submit();
            }
            KeyCommand::Quit => self.on_exit(),
            KeyCommand::SwitchPane => {
                self.exit_armed = false;
                self.pane = match self.pane {
                    Pane::Editor => {
                        self.status.set(Status::FillingForm);
                        Pane::Form
                    }
                    Pane::Form => {
                        self.status.set(Status::EditingSchema);
                        Pane::Editor
                    }
                };
            }
            KeyCommand::ResetStatus => {
                self.exit_armed = false;
                self.status.set(Status::Ready);
            }
            KeyCommand::NextField => self.form.focus_next_field(),
            KeyCommand::PrevField => self.form.focus_prev_field(),
            KeyCommand::Edit(key) => match self.pane {
                Pane::Editor => {
                    let outcome = self.editor.handle_key(&key, &mut self.store);
                    self.after_schema_edit(outcome);
                }
                Pane::Form => self.on_form_key(&key),
            },
            KeyCommand::None => {}
        }
    }

    fn on_paste(&mut self, text: &str) {
        match self.pane {
            Pane::Editor => {
                let outcome = self.editor.paste(text, &mut self.store);
                self.after_schema_edit(outcome);
            }
            Pane::Form => {
                let index = self.form.focus_index();
                let current = self
                    .form
                    .focused_field()
                    .map(|field| field.value().to_string())
                    .unwrap_or_default();
                if self.form.set_value_at(index, &(current + text)) {
                    self.exit_armed = false;
                }
            }
        }
    }

    fn on_form_key(&mut self, key: &KeyEvent) {
        if self.form.handle_key(key) {
            self.exit_armed = false;
            if let Some(field) = self.form.focused_field() {
                self.status
                    .set(Status::EditingField(field.field.display_label().to_string()));
            }
        }
    }

    /// Rebuild the preview whenever the editor committed a new schema.
    fn after_schema_edit(&mut self, outcome: EditOutcome) {
        match outcome {
            EditOutcome::Committed { revision } => {
                let schema = self.store.current();
                self.form = self.form.rebuild(&schema);
                self.status.set(Status::SchemaApplied {
                    revision,
                    fields: schema.fields.len(),
                });
            }
            EditOutcome::Rejected => self.status.set(Status::SchemaRejected),
            EditOutcome::Unchanged => {}
        }
    }

    pub(crate) fn on_submit(&mut self) {
        match self.form.submit() {
            Ok(record) => {
                self.status.set(Status::Submitted(record.len()));
                self.popup = Some(ConfirmationPopup::from_record(&record));
                self.last_submission = Some(record);
            }
            Err(SubmitError::Blocked { issues }) => {
                self.pane = Pane::Form;
                self.status.set(Status::IssuesRemaining(issues));
            }
        }
    }

    pub(crate) fn on_exit(&mut self) {
        if self.options.confirm_exit && self.form.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.set(Status::PendingExit);
            return;
        }
        debug!(submitted = self.last_submission.is_some(), "leaving form studio");
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::domain::project_survey;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn chord(app: &mut App, ch: char) {
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char(ch),
            KeyModifiers::CONTROL,
        )));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn app() -> App {
        App::new(project_survey(), None, UiOptions::default())
    }

    #[test]
    fn typing_in_editor_keeps_last_valid_preview() {
        let mut app = app();
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.editor.is_valid());
        assert_eq!(
            app.status.message(),
            "Schema has errors; preview shows the last valid version"
        );
        assert_eq!(app.form.title(), "Project Requirements Survey");
        assert_eq!(app.form.fields().len(), 3);
    }

    #[test]
    fn committed_schema_rebuilds_preview() {
        let mut app = app();
        let outcome = app.editor.set_text(
            r#"{"formTitle": "Feedback", "fields": [{"id": "msg", "type": "textarea", "label": "Message", "required": true}]}"#,
            &mut app.store,
        );
        app.after_schema_edit(outcome);
        assert_eq!(app.form.title(), "Feedback");
        assert_eq!(app.form.fields().len(), 1);
        assert_eq!(app.status.message(), "Schema applied (revision 1, 1 field(s))");
    }

    #[test]
    fn submit_blocks_then_succeeds() {
        let mut app = app();
        chord(&mut app, 's');
        assert_eq!(app.pane, Pane::Form);
        assert_eq!(app.status.message(), "3 issue(s) remaining");
        assert!(app.popup.is_none());

        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ada@example.com");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        chord(&mut app, 's');

        assert!(app.popup.is_some());
        let record = app.last_submission.clone().unwrap();
        assert_eq!(record.get("companySize"), Some("1-50"));

        press(&mut app, KeyCode::Esc);
        assert!(app.popup.is_none());
        chord(&mut app, 'q');
        assert!(app.should_quit, "submitted form quits without confirmation");
        let session = app.into_session();
        assert_eq!(session.submission, Some(record));
    }

    #[test]
    fn quitting_with_unsubmitted_input_needs_confirmation() {
        let mut app = app();
        chord(&mut app, 'w');
        type_text(&mut app, "A");
        chord(&mut app, 'q');
        assert!(!app.should_quit);
        assert_eq!(
            app.status.message(),
            "Unsubmitted form input. Press Ctrl+Q again to quit."
        );
        chord(&mut app, 'q');
        assert!(app.should_quit);
        assert!(app.into_session().submission.is_none());
    }

    #[test]
    fn paste_into_form_appends_to_focused_field() {
        let mut app = app();
        chord(&mut app, 'w');
        type_text(&mut app, "Ada ");
        app.handle_event(Event::Paste("Lovelace".to_string()));
        assert_eq!(app.form.fields()[0].value(), "Ada Lovelace");
    }
}
