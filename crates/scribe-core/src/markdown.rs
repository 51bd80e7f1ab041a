//! Preview renderer for note content.
//!
//! A fixed set of line-oriented substitutions, not a markdown parser: no
//! links, code blocks, nesting or HTML escaping.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ScribeError};

static HEADING_1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").expect("heading 1 pattern"));
static HEADING_2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## (.+)$").expect("heading 2 pattern"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("italic pattern"));
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^- (.+)$").expect("list item pattern"));

/// Render note text to HTML.
///
/// Substitutions run in this order: `# `, `## `, `**..**`, `*..*`, `- `.
/// Consecutive list items share one `<ul>`. Remaining non-blank lines become
/// paragraphs; blank lines are dropped. CRLF line endings are treated as LF.
pub fn render(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let html = HEADING_1.replace_all(&text, "<h1>$1</h1>");
    let html = HEADING_2.replace_all(&html, "<h2>$1</h2>");
    let html = BOLD.replace_all(&html, "<strong>$1</strong>");
    let html = ITALIC.replace_all(&html, "<em>$1</em>");
    let html = LIST_ITEM.replace_all(&html, "<ul><li>$1</li></ul>");
    let html = html.replace("</ul>\n<ul>", "");

    html.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            if line.starts_with("<h1>") || line.starts_with("<h2>") || line.starts_with("<ul>") {
                line.to_string()
            } else {
                format!("<p>{}</p>", line)
            }
        })
        .collect()
}

/// Preview for the editor pane; `None` for blank text.
pub fn preview(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(render(text))
    }
}

/// Toolbar formatting actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Bold,
    Italic,
    Heading1,
    Heading2,
    List,
}

impl Format {
    /// (prefix, suffix) inserted around the selection
    pub fn markers(self) -> (&'static str, &'static str) {
        match self {
            Format::Bold => ("**", "**"),
            Format::Italic => ("*", "*"),
            Format::Heading1 => ("# ", ""),
            Format::Heading2 => ("## ", ""),
            Format::List => ("- ", ""),
        }
    }
}

/// Result of a formatting action: new text and where the selection moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub content: String,
    pub selection: Range<usize>,
}

/// Wrap the byte range `selection` of `content` with the markers of `format`.
pub fn apply_format(content: &str, selection: Range<usize>, format: Format) -> Result<Edit> {
    let Range { start, end } = selection;
    if start > end || end > content.len() {
        return Err(ScribeError::validation(format!(
            "selection {}..{} is outside the text (len {})",
            start,
            end,
            content.len()
        )));
    }
    if !content.is_char_boundary(start) || !content.is_char_boundary(end) {
        return Err(ScribeError::validation(
            "selection does not fall on character boundaries",
        ));
    }

    let (prefix, suffix) = format.markers();
    let mut edited = String::with_capacity(content.len() + prefix.len() + suffix.len());
    edited.push_str(&content[..start]);
    edited.push_str(prefix);
    edited.push_str(&content[start..end]);
    edited.push_str(suffix);
    edited.push_str(&content[end..]);

    Ok(Edit {
        content: edited,
        selection: start + prefix.len()..end + prefix.len(),
    })
}
