use crate::model::{Document, DocumentId, DocumentKind};
use crate::utils::time;

#[cfg(test)]
mod tests;

pub const WELCOME_NOTE_ID: &str = "welcome-note";

const WELCOME_NOTE_NAME: &str = "Welcome to ScribeCanvas";

const WELCOME_NOTE_CONTENT: &str = "# Welcome to ScribeCanvas\n\nCreate notes, drawings, and get AI assistance all in one place.\n\n## Getting Started\n\n- Use the sidebar to create new files\n- Switch between Note and Canvas modes\n- Ask the AI assistant for help";

/// Emitted to subscribers after every successful mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Created {
        id: DocumentId,
        kind: DocumentKind,
        name: String,
    },
    Deleted {
        id: DocumentId,
        name: String,
    },
    Updated {
        id: DocumentId,
    },
    Renamed {
        id: DocumentId,
        name: String,
    },
    ActiveChanged {
        id: Option<DocumentId>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&StoreEvent) + Send + Sync>;

/// In-memory document collection with a single active selection.
///
/// The collection keeps insertion order; presentation order is provided by
/// [`FileStore::sorted_by_recent`]. The active id, when set, always refers to
/// a document that is present.
pub struct FileStore {
    documents: Vec<Document>,
    active: Option<DocumentId>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl FileStore {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            active: None,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// A store holding the welcome note, which is active.
    pub fn with_welcome_note() -> Self {
        let mut store = Self::new();
        let note = Document {
            id: DocumentId::from(WELCOME_NOTE_ID),
            name: WELCOME_NOTE_NAME.to_string(),
            content: WELCOME_NOTE_CONTENT.to_string(),
            kind: DocumentKind::Note,
            last_modified: time::now(),
        };
        store.active = Some(note.id.clone());
        store.documents.push(note);
        store
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn emit(&self, event: StoreEvent) {
        for (_, listener) in &self.listeners {
            listener(&event);
        }
    }

    /// Create a document and make it active. Never fails: empty and
    /// duplicate names are accepted.
    pub fn create_file(&mut self, name: &str, kind: DocumentKind) -> Document {
        let document = Document {
            id: DocumentId::generate(),
            name: name.to_string(),
            content: kind.default_content().to_string(),
            kind,
            last_modified: time::now(),
        };
        log::debug!("create {} {} ({:?})", kind, document.id, name);

        self.documents.push(document.clone());
        self.active = Some(document.id.clone());

        self.emit(StoreEvent::Created {
            id: document.id.clone(),
            kind,
            name: document.name.clone(),
        });
        self.emit(StoreEvent::ActiveChanged {
            id: Some(document.id.clone()),
        });
        document
    }

    /// Remove a document. Returns `None` when the id is unknown.
    ///
    /// If the removed document was active, the first remaining document in
    /// collection order becomes active, or the selection is cleared.
    pub fn delete_file(&mut self, id: &DocumentId) -> Option<Document> {
        let index = self.position(id)?;
        let removed = self.documents.remove(index);
        log::debug!("delete {} ({:?})", removed.id, removed.name);

        let was_active = self.active.as_ref() == Some(id);
        if was_active {
            self.active = self.documents.first().map(|doc| doc.id.clone());
        }

        self.emit(StoreEvent::Deleted {
            id: removed.id.clone(),
            name: removed.name.clone(),
        });
        if was_active {
            self.emit(StoreEvent::ActiveChanged {
                id: self.active.clone(),
            });
        }
        Some(removed)
    }

    /// Replace content and refresh the modification time.
    pub fn update_file(&mut self, id: &DocumentId, content: &str) -> bool {
        let Some(document) = self.documents.iter_mut().find(|doc| &doc.id == id) else {
            return false;
        };
        document.content = content.to_string();
        document.last_modified = time::now();

        self.emit(StoreEvent::Updated { id: id.clone() });
        true
    }

    /// Change the display name. The modification time is left alone.
    pub fn rename_file(&mut self, id: &DocumentId, name: &str) -> bool {
        let Some(document) = self.documents.iter_mut().find(|doc| &doc.id == id) else {
            return false;
        };
        document.name = name.to_string();

        self.emit(StoreEvent::Renamed {
            id: id.clone(),
            name: name.to_string(),
        });
        true
    }

    /// Select a document, or clear the selection with `None`.
    ///
    /// Selecting an unknown id leaves the selection unchanged and returns
    /// `false`.
    pub fn set_active_file(&mut self, id: Option<&DocumentId>) -> bool {
        match id {
            None => {
                if self.active.take().is_some() {
                    self.emit(StoreEvent::ActiveChanged { id: None });
                }
                true
            }
            Some(id) => {
                if self.position(id).is_none() {
                    return false;
                }
                if self.active.as_ref() != Some(id) {
                    self.active = Some(id.clone());
                    self.emit(StoreEvent::ActiveChanged {
                        id: Some(id.clone()),
                    });
                }
                true
            }
        }
    }

    pub fn get(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.iter().find(|doc| &doc.id == id)
    }

    pub fn active_id(&self) -> Option<&DocumentId> {
        self.active.as_ref()
    }

    pub fn active_file(&self) -> Option<&Document> {
        self.active.as_ref().and_then(|id| self.get(id))
    }

    /// Documents in collection (insertion) order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Documents ordered by `last_modified`, newest first
    pub fn sorted_by_recent(&self) -> Vec<&Document> {
        let mut sorted: Vec<&Document> = self.documents.iter().collect();
        sorted.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        sorted
    }

    /// Documents whose name contains `term` (case-insensitive), newest first.
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Document> {
        let term = term.to_lowercase();
        let mut found: Vec<&Document> = self
            .documents
            .iter()
            .filter(|doc| doc.name.to_lowercase().contains(&term))
            .collect();
        found.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        found
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn position(&self, id: &DocumentId) -> Option<usize> {
        self.documents.iter().position(|doc| &doc.id == id)
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore")
            .field("documents", &self.documents)
            .field("active", &self.active)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
