use std::time::Duration;

use async_trait::async_trait;
use scribe_core::Result;

use super::provider::{AssistantProvider, CompletionRequest, ProviderKind};

/// Fabricates a canned reply after a fixed delay. No network access.
#[derive(Debug, Clone)]
pub struct MockProvider {
    kind: ProviderKind,
    delay: Duration,
}

impl MockProvider {
    pub fn new(kind: ProviderKind, delay: Duration) -> Self {
        Self { kind, delay }
    }

    pub fn with_default_delay(kind: ProviderKind) -> Self {
        Self::new(kind, kind.default_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl AssistantProvider for MockProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        Ok(format!(
            "This is a simulated {} response to: \"{}\"\n\nIn a real implementation, this would connect to the {} API using your API key.",
            self.kind.display_name(),
            request.prompt,
            self.kind.api_name()
        ))
    }
}
