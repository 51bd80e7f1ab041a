use std::sync::Arc;

use scribe_core::drawing::DrawingEngine;
use scribe_core::store::StoreEvent;
use scribe_core::{DocumentId, FileStore, ScribeConfig, ScribeError};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::RwLock;

use crate::assistant::{AssistantState, ProviderRegistry};
use crate::notifications::{Notice, Notifier};

/// Drawing session bound to one canvas document.
#[derive(Debug)]
pub struct CanvasSession {
    pub document_id: DocumentId,
    pub engine: DrawingEngine,
}

/// Global state for the session
/// Must be Send + Sync
#[derive(Clone)]
pub struct GlobalState {
    pub config: Arc<ScribeConfig>,
    pub store: Arc<RwLock<FileStore>>,
    /// Open drawing session, if the active document is a canvas being edited
    pub canvas: Arc<RwLock<Option<CanvasSession>>>,
    pub assistant: Arc<RwLock<AssistantState>>,
    pub providers: Arc<ProviderRegistry>,
    pub notifier: Notifier,
}

impl GlobalState {
    pub fn new(config: ScribeConfig) -> (Self, UnboundedReceiver<Notice>) {
        let providers = ProviderRegistry::from_config(&config.assistant);
        Self::with_providers(config, providers)
    }

    pub fn with_providers(
        config: ScribeConfig,
        providers: ProviderRegistry,
    ) -> (Self, UnboundedReceiver<Notice>) {
        let (notifier, receiver) = Notifier::channel();

        let mut store = if config.workspace.seed_welcome_note {
            FileStore::with_welcome_note()
        } else {
            FileStore::new()
        };
        let store_notifier = notifier.clone();
        store.subscribe(move |event| match event {
            StoreEvent::Created { kind, .. } => {
                store_notifier.success(format!("Created new {}", kind));
            }
            StoreEvent::Deleted { name, .. } => {
                store_notifier.success(format!("Deleted {}", name));
            }
            _ => {}
        });

        let assistant = AssistantState::new(providers.resolve_default(&config.assistant));

        let state = Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(store)),
            canvas: Arc::new(RwLock::new(None)),
            assistant: Arc::new(RwLock::new(assistant)),
            providers: Arc::new(providers),
            notifier,
        };
        (state, receiver)
    }

    /// Report a validation failure to the user and hand back the error.
    pub(crate) fn reject(&self, message: &str) -> ScribeError {
        self.notifier.error(message);
        ScribeError::validation(message)
    }
}
