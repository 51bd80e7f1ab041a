use super::line_map::LineMap;
use crate::model::{Heading, TextRange};
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Structural summary of a note, used by the file list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    /// First level-1 heading, if any
    pub title: Option<String>,
    pub headings: Vec<Heading>,
}

/// Extract headings from note text with a full CommonMark parse.
///
/// Unlike the preview renderer this understands setext headings, code
/// blocks and inline markup, so headings inside fenced code are ignored.
pub fn parse_outline(text: &str) -> Outline {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options);
    let line_map = LineMap::new(text);

    let mut outline = Outline::default();
    let mut pending: Option<(u8, String, usize)> = None;

    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                pending = Some((heading_depth(level), String::new(), range.start));
            }
            Event::End(TagEnd::Heading(..)) => {
                let Some((level, collected, start)) = pending.take() else {
                    continue;
                };
                let heading_text = collected.trim().to_string();
                if heading_text.is_empty() {
                    continue;
                }
                if level == 1 && outline.title.is_none() {
                    outline.title = Some(heading_text.clone());
                }
                outline.headings.push(Heading {
                    level,
                    text: heading_text,
                    range: TextRange {
                        start: line_map.offset_to_point(text, start),
                        end: line_map.offset_to_point(text, range.end),
                    },
                });
            }
            Event::Text(fragment) | Event::Code(fragment) => {
                if let Some((_, collected, _)) = pending.as_mut() {
                    collected.push_str(&fragment);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, collected, _)) = pending.as_mut() {
                    collected.push(' ');
                }
            }
            _ => {}
        }
    }

    outline
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    #[test]
    fn test_parse_headings() {
        let content = "# Title\n\n## Section";
        let outline = parse_outline(content);

        assert_eq!(outline.title, Some("Title".to_string()));
        assert_eq!(outline.headings.len(), 2);
        assert_eq!(outline.headings[1].text, "Section");
        assert_eq!(outline.headings[1].level, 2);
        assert_eq!(outline.headings[1].range.start, Point { line: 2, col: 0 });
    }

    #[test]
    fn test_inline_markup_is_flattened() {
        let outline = parse_outline("# The **bold** `plan`");
        assert_eq!(outline.title.as_deref(), Some("The bold plan"));
    }

    #[test]
    fn test_setext_and_code_blocks() {
        let content = "Intro\n=====\n\n```\n# not a heading\n```\n";
        let outline = parse_outline(content);

        assert_eq!(outline.headings.len(), 1);
        assert_eq!(outline.title.as_deref(), Some("Intro"));
    }

    #[test]
    fn test_title_is_first_level_one() {
        let outline = parse_outline("## Sub\n\n# Main\n\n# Later");
        assert_eq!(outline.title.as_deref(), Some("Main"));
    }

    #[test]
    fn test_empty_text_has_no_outline() {
        assert_eq!(parse_outline(""), Outline::default());
    }
}
