//! Chat-style assistant panel.
//!
//! Providers sit behind [`AssistantProvider`] so a real backend can replace
//! the mocks without touching the panel logic.

mod chat;
mod mock;
mod provider;

pub use chat::{AssistantSettings, AssistantState, ChatMessage, Role, GREETING};
pub use mock::MockProvider;
pub use provider::{AssistantProvider, CompletionRequest, ProviderKind, ProviderRegistry};
