use serde::Serialize;

use super::provider::ProviderKind;

pub const GREETING: &str = "Hello! I'm your AI assistant. How can I help you today?";

/// Replies shorter than this are not offered for insertion into a note.
const MIN_INSERTABLE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn is_insertable(&self) -> bool {
        self.role == Role::Assistant && self.content.chars().count() > MIN_INSERTABLE_LEN
    }
}

#[derive(Clone)]
pub struct AssistantSettings {
    pub provider: ProviderKind,
    pub api_key: String,
}

impl std::fmt::Debug for AssistantSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantSettings")
            .field("provider", &self.provider)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<set>" })
            .finish()
    }
}

/// Transcript, settings and in-flight request count of the panel.
#[derive(Debug)]
pub struct AssistantState {
    pub settings: AssistantSettings,
    messages: Vec<ChatMessage>,
    pending: usize,
}

impl AssistantState {
    pub fn new(provider: ProviderKind) -> Self {
        Self {
            settings: AssistantSettings {
                provider,
                api_key: String::new(),
            },
            messages: vec![ChatMessage::assistant(GREETING)],
            pending: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Loading indicator: true while any request is outstanding
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub(crate) fn begin_request(&mut self) {
        self.pending += 1;
    }

    pub(crate) fn finish_request(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_starts_with_greeting() {
        let state = AssistantState::new(ProviderKind::OpenAi);
        assert_eq!(state.messages(), &[ChatMessage::assistant(GREETING)]);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_only_long_assistant_messages_are_insertable() {
        assert!(ChatMessage::assistant("a reply long enough").is_insertable());
        assert!(!ChatMessage::assistant("too short").is_insertable());
        assert!(!ChatMessage::user("a user message long enough").is_insertable());
    }

    #[test]
    fn test_pending_counter_never_underflows() {
        let mut state = AssistantState::new(ProviderKind::Gemini);
        state.begin_request();
        state.begin_request();
        state.finish_request();
        assert!(state.is_loading());
        state.finish_request();
        state.finish_request();
        assert_eq!(state.pending(), 0);
    }

    #[test]
    fn test_settings_debug_hides_key() {
        let mut state = AssistantState::new(ProviderKind::OpenAi);
        state.settings.api_key = "sk-secret".to_string();
        let rendered = format!("{:?}", state.settings);
        assert!(!rendered.contains("sk-secret"));
    }
}
