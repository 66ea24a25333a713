mod components;
mod view;

pub use view::{Pane, PopupRender, UiContext, draw};

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::{
        domain::project_survey, editor::SchemaEditor, form::FormState, store::SchemaStore,
    };

    fn render(ctx: impl FnOnce() -> (SchemaEditor, FormState), pane: Pane) -> Buffer {
        let (editor, form) = ctx();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| {
                draw(
                    frame,
                    UiContext {
                        title: Some("Survey studio"),
                        editor: &editor,
                        form: &form,
                        pane,
                        status_message: "Ready",
                        help: Some("Ctrl+S submit"),
                        popup: None,
                    },
                )
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen(buffer: &Buffer) -> String {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn survey() -> (SchemaEditor, FormState) {
        let schema = project_survey();
        (
            SchemaEditor::from_schema(&schema),
            FormState::from_schema(&schema),
        )
    }

    #[test]
    fn draws_editor_and_preview_side_by_side() {
        let text = screen(&render(survey, Pane::Editor));
        assert!(text.contains("Survey studio"));
        assert!(text.contains("JSON Schema"));
        assert!(text.contains("\"formTitle\": \"Project Requirements Survey\""));
        assert!(text.contains("Form Preview"));
        assert!(text.contains("Full Name *"));
        assert!(text.contains("Enter your full name"));
        assert!(text.contains("Actions: Ctrl+S submit"));
        assert!(text.contains("Status: Ready [ok]"));
    }

    #[test]
    fn invalid_text_shows_error_and_last_valid_preview() {
        let text = screen(&render(
            || {
                let schema = project_survey();
                let mut store = SchemaStore::new(schema.clone());
                let mut editor = SchemaEditor::from_schema(&schema);
                editor.set_text(r#"{"formTitle": "Broken"}"#, &mut store);
                (editor, FormState::from_schema(&store.current()))
            },
            Pane::Editor,
        ));
        assert!(text.contains("invalid"));
        assert!(text.contains("Invalid schema structure"));
        assert!(text.contains("Project Requirements Survey"));
        assert!(text.contains("schema: invalid"));
    }

    #[test]
    fn popup_lists_submitted_values() {
        let (editor, form) = survey();
        let lines = vec!["name: Ada".to_string(), "companySize: 1-50".to_string()];
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                draw(
                    frame,
                    UiContext {
                        title: None,
                        editor: &editor,
                        form: &form,
                        pane: Pane::Form,
                        status_message: "Submitted",
                        help: None,
                        popup: Some(PopupRender {
                            title: "Form submitted successfully!",
                            lines: &lines,
                        }),
                    },
                )
            })
            .unwrap();
        let text = screen(terminal.backend().buffer());
        assert!(text.contains("Form submitted successfully!"));
        assert!(text.contains("companySize: 1-50"));
        assert!(text.contains("Press any key to close"));
    }
}
