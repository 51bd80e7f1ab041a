use scribe_core::parser::parse_outline;
use scribe_core::{Document, DocumentId, DocumentKind};
use serde::{Deserialize, Serialize};

/// One row of the file list.
/// Must not contain UI fields like icon or selection state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: DocumentId,
    pub name: String,
    pub kind: DocumentKind,
    pub last_modified: u64,

    /// First level-1 heading of a note (None for canvases)
    pub title: Option<String>,
}

impl From<&Document> for DocumentSummary {
    fn from(doc: &Document) -> Self {
        let title = match doc.kind {
            DocumentKind::Note => parse_outline(&doc.content).title,
            DocumentKind::Canvas => None,
        };
        Self {
            id: doc.id.clone(),
            name: doc.name.clone(),
            kind: doc.kind,
            last_modified: doc.last_modified,
            title,
        }
    }
}

/// Pointer input on the drawing surface, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
}
