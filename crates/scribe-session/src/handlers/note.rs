use std::ops::Range;

use scribe_core::markdown::{self, Edit, Format};
use scribe_core::{Document, Result};

use crate::state::GlobalState;

const NO_NOTE: &str = "No note selected";

async fn active_note(state: &GlobalState) -> Result<Document> {
    let store = state.store.read().await;
    match store.active_file() {
        Some(doc) if doc.is_note() => Ok(doc.clone()),
        _ => Err(state.reject(NO_NOTE)),
    }
}

/// Handle a text change in the note editor
pub async fn handle_edit_note(state: &GlobalState, content: &str) -> Result<()> {
    let note = active_note(state).await?;
    state.store.write().await.update_file(&note.id, content);
    Ok(())
}

/// Handle a toolbar formatting action over `selection` (byte offsets).
pub async fn handle_format_note(
    state: &GlobalState,
    selection: Range<usize>,
    format: Format,
) -> Result<Edit> {
    let note = active_note(state).await?;
    let edit = markdown::apply_format(&note.content, selection, format).map_err(|e| {
        state.notifier.error(e.to_string());
        e
    })?;
    state.store.write().await.update_file(&note.id, &edit.content);
    Ok(edit)
}

/// Rendered preview of the active note; `None` when the note is blank.
pub async fn handle_preview_note(state: &GlobalState) -> Result<Option<String>> {
    let note = active_note(state).await?;
    Ok(markdown::preview(&note.content))
}
