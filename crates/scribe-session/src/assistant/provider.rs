use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use scribe_core::config::AssistantConfig;
use scribe_core::{Result, ScribeError};
use serde::{Deserialize, Serialize};

use super::mock::MockProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAi,
    Gemini,
    Mistral,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [ProviderKind::OpenAi, ProviderKind::Gemini, ProviderKind::Mistral];

    /// Config and command-line key
    pub fn id(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
            ProviderKind::Mistral => "mistral",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Gemini => "Google Gemini",
            ProviderKind::Mistral => "Mistral AI",
        }
    }

    /// Name of the vendor API the provider stands in for
    pub fn api_name(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Gemini => "Gemini",
            ProviderKind::Mistral => "Mistral",
        }
    }

    /// Simulated latency of the mock backend
    pub fn default_delay(self) -> Duration {
        match self {
            ProviderKind::OpenAi => Duration::from_millis(1000),
            ProviderKind::Gemini => Duration::from_millis(800),
            ProviderKind::Mistral => Duration::from_millis(1200),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = ScribeError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        ProviderKind::ALL
            .into_iter()
            .find(|kind| kind.id() == key)
            .ok_or_else(|| ScribeError::validation(format!("unknown provider '{}'", s.trim())))
    }
}

#[derive(Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub api_key: String,
}

impl fmt::Debug for CompletionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionRequest")
            .field("prompt", &self.prompt)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
pub trait AssistantProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Produce a plain-text reply for the prompt
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// Providers available to the panel, one per kind.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderKind, Arc<dyn AssistantProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock providers for every kind, with latency overrides from config.
    pub fn from_config(config: &AssistantConfig) -> Self {
        let mut registry = Self::new();
        for kind in ProviderKind::ALL {
            let delay = config
                .delays_ms
                .get(kind.id())
                .map(|ms| Duration::from_millis(*ms))
                .unwrap_or_else(|| kind.default_delay());
            registry.register(Arc::new(MockProvider::new(kind, delay)));
        }
        for key in config.delays_ms.keys() {
            if key.parse::<ProviderKind>().is_err() {
                log::warn!("ignoring delay for unknown provider '{}'", key);
            }
        }
        registry
    }

    /// Install or replace the provider for its kind
    pub fn register(&mut self, provider: Arc<dyn AssistantProvider>) {
        self.providers.insert(provider.kind(), provider);
    }

    pub fn get(&self, kind: ProviderKind) -> Option<Arc<dyn AssistantProvider>> {
        self.providers.get(&kind).cloned()
    }

    /// Configured default provider, falling back to OpenAI when the name is
    /// unknown or nothing is registered for it.
    pub fn resolve_default(&self, config: &AssistantConfig) -> ProviderKind {
        match config.default_provider.parse::<ProviderKind>() {
            Ok(kind) if self.providers.contains_key(&kind) => kind,
            Ok(kind) => {
                log::warn!("no provider registered for {}, using {}", kind, ProviderKind::OpenAi);
                ProviderKind::OpenAi
            }
            Err(e) => {
                log::warn!("{}, using {}", e, ProviderKind::OpenAi);
                ProviderKind::OpenAi
            }
        }
    }
}
