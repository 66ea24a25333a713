use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::domain::FormSchema;

pub type SchemaListener = Box<dyn FnMut(&Arc<FormSchema>, u64)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Holds the last schema that passed validation.
///
/// The schema is shared as one `Arc` and swapped wholesale on `replace`, so a
/// reader holding a snapshot never observes a half-applied update.
pub struct SchemaStore {
    current: Arc<FormSchema>,
    revision: u64,
    listeners: Vec<(SubscriptionId, SchemaListener)>,
    next_subscription: u64,
}

impl SchemaStore {
    pub fn new(initial: FormSchema) -> Self {
        Self {
            current: Arc::new(initial),
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn current(&self) -> Arc<FormSchema> {
        Arc::clone(&self.current)
    }

    /// Number of replacements applied since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Swap in a new schema and notify subscribers. Returns the new revision.
    pub fn replace(&mut self, schema: FormSchema) -> u64 {
        self.current = Arc::new(schema);
        self.revision += 1;
        trace!(
            revision = self.revision,
            fields = self.current.fields.len(),
            "schema replaced"
        );
        for (_, listener) in &mut self.listeners {
            listener(&self.current, self.revision);
        }
        self.revision
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&Arc<FormSchema>, u64) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

impl fmt::Debug for SchemaStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaStore")
            .field("current", &self.current)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
