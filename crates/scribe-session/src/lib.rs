//! Scribe Session Library
//!
//! Session layer: owns the shared state and turns user actions into Core
//! library calls, reporting outcomes through the notice channel.

use std::ops::Range;

use scribe_core::drawing::Tool;
use scribe_core::markdown::{Edit, Format};
use scribe_core::{Document, DocumentId, DocumentKind, Result, ScribeConfig};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::assistant::{AssistantSettings, ChatMessage, ProviderKind, ProviderRegistry};
use crate::notifications::Notice;
use crate::protocol::{DocumentSummary, PointerEvent};
use crate::state::GlobalState;

pub mod assistant;
pub mod config;
mod handlers;
pub mod notifications;
pub mod protocol;
mod state;


/// Front door of a running workspace. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct Workbench {
    state: GlobalState,
}

impl Workbench {
    pub fn new(config: ScribeConfig) -> (Self, UnboundedReceiver<Notice>) {
        let (state, notices) = GlobalState::new(config);
        (Self { state }, notices)
    }

    /// Like [`Workbench::new`] but with caller-supplied assistant providers.
    pub fn with_providers(
        config: ScribeConfig,
        providers: ProviderRegistry,
    ) -> (Self, UnboundedReceiver<Notice>) {
        let (state, notices) = GlobalState::with_providers(config, providers);
        (Self { state }, notices)
    }

    pub fn config(&self) -> &ScribeConfig {
        &self.state.config
    }

    // files

    pub async fn create_file(&self, name: &str, kind: DocumentKind) -> Document {
        handlers::handle_create_file(&self.state, name, kind).await
    }

    pub async fn delete_file(&self, id: &DocumentId) -> Option<Document> {
        handlers::handle_delete_file(&self.state, id).await
    }

    pub async fn rename_file(&self, id: &DocumentId, name: &str) -> bool {
        handlers::handle_rename_file(&self.state, id, name).await
    }

    pub async fn select_file(&self, id: Option<&DocumentId>) -> bool {
        handlers::handle_select_file(&self.state, id).await
    }

    pub async fn update_file(&self, id: &DocumentId, content: &str) -> bool {
        handlers::handle_update_file(&self.state, id, content).await
    }

    pub async fn active_file(&self) -> Option<Document> {
        handlers::handle_active_file(&self.state).await
    }

    pub async fn list_documents(&self, filter: Option<&str>) -> Vec<DocumentSummary> {
        handlers::handle_list_documents(&self.state, filter).await
    }

    // notes

    pub async fn edit_note(&self, content: &str) -> Result<()> {
        handlers::handle_edit_note(&self.state, content).await
    }

    pub async fn format_note(&self, selection: Range<usize>, format: Format) -> Result<Edit> {
        handlers::handle_format_note(&self.state, selection, format).await
    }

    pub async fn preview_note(&self) -> Result<Option<String>> {
        handlers::handle_preview_note(&self.state).await
    }

    // canvas

    pub async fn open_canvas(&self, size: Option<(u32, u32)>) -> Result<DocumentId> {
        handlers::handle_open_canvas(&self.state, size).await
    }

    pub async fn close_canvas(&self) -> bool {
        handlers::handle_close_canvas(&self.state).await
    }

    pub async fn pointer(&self, event: PointerEvent) -> Result<bool> {
        handlers::handle_pointer(&self.state, event).await
    }

    pub async fn set_tool(&self, tool: Tool) -> Result<()> {
        handlers::handle_set_tool(&self.state, tool).await
    }

    pub async fn set_color(&self, color: &str) -> Result<()> {
        handlers::handle_set_color(&self.state, color).await
    }

    pub async fn set_size(&self, size: u32) -> Result<()> {
        handlers::handle_set_size(&self.state, size).await
    }

    pub async fn undo(&self) -> Result<bool> {
        handlers::handle_undo(&self.state).await
    }

    pub async fn redo(&self) -> Result<bool> {
        handlers::handle_redo(&self.state).await
    }

    pub async fn resize_canvas(&self, width: u32, height: u32) -> Result<()> {
        handlers::handle_resize(&self.state, width, height).await
    }

    pub async fn save_canvas(&self) -> Result<bool> {
        handlers::handle_save_canvas(&self.state).await
    }

    pub async fn canvas_history(&self) -> Option<(usize, usize)> {
        handlers::handle_history_state(&self.state).await
    }

    // assistant

    pub async fn send_prompt(&self, prompt: &str) -> Result<ChatMessage> {
        handlers::handle_send_prompt(&self.state, prompt).await
    }

    pub async fn set_provider(&self, provider: ProviderKind) {
        handlers::handle_set_provider(&self.state, provider).await
    }

    pub async fn set_api_key(&self, api_key: &str) {
        handlers::handle_set_api_key(&self.state, api_key).await
    }

    pub async fn save_settings(&self, settings: AssistantSettings) {
        handlers::handle_save_settings(&self.state, settings).await
    }

    /// Append transcript message `index` to the active note.
    pub async fn insert_into_note(&self, index: usize) -> Result<()> {
        handlers::handle_insert_into_note(&self.state, index).await
    }

    pub async fn transcript(&self) -> Vec<ChatMessage> {
        handlers::handle_transcript(&self.state).await
    }

    pub async fn is_loading(&self) -> bool {
        handlers::handle_is_loading(&self.state).await
    }
}
