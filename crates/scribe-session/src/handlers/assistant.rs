use scribe_core::{Result, ScribeError};

use crate::assistant::{AssistantSettings, ChatMessage, CompletionRequest, ProviderKind};
use crate::state::GlobalState;

const MISSING_INPUT: &str = "Please enter a prompt and API key";
const REQUEST_FAILED: &str = "Failed to get AI response";
const NOT_A_NOTE: &str = "Can only insert text into notes";
const NOT_INSERTABLE: &str = "Only assistant replies can be inserted";

/// Handle "send" in the assistant panel.
///
/// The user message is recorded and the loading counter raised before the
/// provider is awaited; no lock is held across that await, so several
/// requests may be in flight and each resolves on its own.
pub async fn handle_send_prompt(state: &GlobalState, prompt: &str) -> Result<ChatMessage> {
    let (provider, request) = {
        let mut assistant = state.assistant.write().await;
        let settings = &assistant.settings;
        if prompt.trim().is_empty() || settings.api_key.trim().is_empty() {
            return Err(state.reject(MISSING_INPUT));
        }

        let kind = settings.provider;
        let Some(provider) = state.providers.get(kind) else {
            log::error!("no provider registered for {}", kind);
            state.notifier.error(REQUEST_FAILED);
            return Err(ScribeError::assistant(format!("provider {} unavailable", kind)));
        };
        let request = CompletionRequest {
            prompt: prompt.to_string(),
            api_key: settings.api_key.clone(),
        };

        assistant.push(ChatMessage::user(prompt));
        assistant.begin_request();
        (provider, request)
    };

    log::debug!("sending prompt to {}", provider.kind());
    let outcome = provider.complete(&request).await;

    let mut assistant = state.assistant.write().await;
    assistant.finish_request();
    match outcome {
        Ok(reply) => {
            let message = ChatMessage::assistant(reply);
            assistant.push(message.clone());
            Ok(message)
        }
        Err(e) => {
            log::error!("{} request failed: {}", provider.kind(), e);
            state.notifier.error(REQUEST_FAILED);
            Err(e)
        }
    }
}

pub async fn handle_set_provider(state: &GlobalState, provider: ProviderKind) {
    state.assistant.write().await.settings.provider = provider;
}

pub async fn handle_set_api_key(state: &GlobalState, api_key: &str) {
    state.assistant.write().await.settings.api_key = api_key.to_string();
}

/// Handle "save" in the settings dialog.
/// Settings live for the session only.
pub async fn handle_save_settings(state: &GlobalState, settings: AssistantSettings) {
    log::info!("assistant provider set to {}", settings.provider);
    state.assistant.write().await.settings = settings;
    state.notifier.success("Settings saved");
}

/// Handle "insert" on the transcript message at `index`: append it to the
/// active note. Only messages passing [`ChatMessage::is_insertable`] qualify.
pub async fn handle_insert_into_note(state: &GlobalState, index: usize) -> Result<()> {
    let text = {
        let assistant = state.assistant.read().await;
        match assistant.messages().get(index) {
            Some(message) if message.is_insertable() => message.content.clone(),
            _ => return Err(state.reject(NOT_INSERTABLE)),
        }
    };

    let mut store = state.store.write().await;
    let note = match store.active_file() {
        Some(doc) if doc.is_note() => doc,
        _ => return Err(state.reject(NOT_A_NOTE)),
    };

    let id = note.id.clone();
    let content = format!("{}\n\n{}", note.content, text);
    store.update_file(&id, &content);
    state.notifier.success("Text inserted into note");
    Ok(())
}

pub async fn handle_transcript(state: &GlobalState) -> Vec<ChatMessage> {
    state.assistant.read().await.messages().to_vec()
}

pub async fn handle_is_loading(state: &GlobalState) -> bool {
    state.assistant.read().await.is_loading()
}
