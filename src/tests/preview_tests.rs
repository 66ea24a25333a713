use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    domain::{SchemaErrorKind, project_survey},
    editor::{EditOutcome, SchemaEditor},
    form::FormState,
    store::SchemaStore,
};

/// Editor, store and form wired the way the app shell wires them.
struct Preview {
    editor: SchemaEditor,
    store: SchemaStore,
    form: Rc<RefCell<FormState>>,
}

impl Preview {
    fn new() -> Self {
        let schema = project_survey();
        let form = Rc::new(RefCell::new(FormState::from_schema(&schema)));
        let mut store = SchemaStore::new(schema.clone());
        let sink = Rc::clone(&form);
        store.subscribe(move |schema, _| {
            let next = sink.borrow().rebuild(schema);
            *sink.borrow_mut() = next;
        });
        Self {
            editor: SchemaEditor::from_schema(&schema),
            store,
            form,
        }
    }

    fn type_text(&mut self, text: &str) -> EditOutcome {
        self.editor.set_text(text, &mut self.store)
    }
}

#[test]
fn structural_error_leaves_store_and_preview_alone() {
    let mut preview = Preview::new();
    for text in [
        r#"{"fields": []}"#,
        r#"{"formTitle": "No fields"}"#,
        r#"{"formTitle": "", "fields": []}"#,
    ] {
        assert_eq!(preview.type_text(text), EditOutcome::Rejected);
        assert_eq!(
            preview.editor.error().map(|err| err.kind()),
            Some(SchemaErrorKind::Structural)
        );
    }
    assert_eq!(preview.store.revision(), 0);
    assert_eq!(preview.form.borrow().title(), "Project Requirements Survey");
}

#[test]
fn malformed_text_keeps_previous_schema() {
    let mut preview = Preview::new();
    assert_eq!(
        preview.type_text(r#"{"formTitle": "Half"#),
        EditOutcome::Rejected
    );
    assert_eq!(
        preview.editor.error().map(|err| err.kind()),
        Some(SchemaErrorKind::Syntax)
    );
    assert_eq!(*preview.store.current(), project_survey());
    assert_eq!(preview.form.borrow().fields().len(), 3);
}

#[test]
fn accepted_text_reaches_the_preview_through_the_store() {
    let mut preview = Preview::new();
    preview
        .form
        .borrow_mut()
        .set_value("name", "Ada");

    let outcome = preview.type_text(
        r#"{
  "formTitle": "Contact",
  "fields": [
    {"id": "name", "type": "text", "label": "Name"},
    {"id": "when", "type": "date", "label": "When"}
  ]
}"#,
    );
    assert_eq!(outcome, EditOutcome::Committed { revision: 1 });

    let form = preview.form.borrow();
    assert_eq!(form.title(), "Contact");
    assert_eq!(form.fields().len(), 1);
    assert_eq!(form.fields()[0].value(), "Ada");
}

#[test]
fn recovering_from_an_error_commits_once() {
    let mut preview = Preview::new();
    preview.type_text("{");
    preview.type_text("{\"formTitle\": \"A\"");
    assert_eq!(preview.store.revision(), 0);
    assert_eq!(
        preview.type_text(r#"{"formTitle": "A", "fields": []}"#),
        EditOutcome::Committed { revision: 1 }
    );
    assert!(preview.editor.is_valid());
    assert_eq!(preview.store.revision(), 1);
}
