use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque document identifier, unique for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn generate() -> Self {
        Self(crate::utils::id::generate_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a document holds. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Markdown text
    Note,
    /// PNG data URI
    Canvas,
}

impl DocumentKind {
    /// Content a freshly created document starts with.
    pub fn default_content(self) -> &'static str {
        match self {
            DocumentKind::Note => "# New Note",
            DocumentKind::Canvas => "",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Note => "note",
            DocumentKind::Canvas => "canvas",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = crate::error::ScribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "note" => Ok(DocumentKind::Note),
            "canvas" => Ok(DocumentKind::Canvas),
            other => Err(crate::error::ScribeError::validation(format!(
                "unknown document kind '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    /// Opaque to the store: markdown for notes, a data URI for canvases.
    pub content: String,
    pub kind: DocumentKind,
    /// Milliseconds since the Unix epoch
    pub last_modified: u64,
}

impl Document {
    pub fn is_note(&self) -> bool {
        self.kind == DocumentKind::Note
    }

    pub fn is_canvas(&self) -> bool {
        self.kind == DocumentKind::Canvas
    }
}

/// Core internal coordinate system (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub line: u32,
    pub col: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub range: TextRange,
}
