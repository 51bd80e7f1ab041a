use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level configuration for Scribe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScribeConfig {
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Workspace-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Start the session with the welcome note
    #[serde(default = "default_true")]
    pub seed_welcome_note: bool,
}

/// Drawing surface defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_canvas_width")]
    pub width: u32,
    #[serde(default = "default_canvas_height")]
    pub height: u32,
    /// Hex colour; the eraser paints with it too
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_pen_color")]
    pub pen_color: String,
    #[serde(default = "default_pen_size")]
    pub pen_size: u32,
    /// Maximum undo depth; unbounded when absent
    #[serde(default)]
    pub history_limit: Option<usize>,
}

/// Assistant panel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// One of "openai", "gemini", "mistral"
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Per-provider simulated latency overrides, keyed like `default_provider`
    #[serde(default)]
    pub delays_ms: BTreeMap<String, u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_true() -> bool {
    true
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_background() -> String {
    "#ffffff".to_string()
}

fn default_pen_color() -> String {
    "#000000".to_string()
}

fn default_pen_size() -> u32 {
    5
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            seed_welcome_note: true,
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
            pen_color: default_pen_color(),
            pen_size: default_pen_size(),
            history_limit: None,
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            delays_ms: BTreeMap::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ScribeConfig {
    fn default() -> Self {
        Self {
            workspace: WorkspaceConfig::default(),
            canvas: CanvasConfig::default(),
            assistant: AssistantConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ScribeConfig {
    /// Parse config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
