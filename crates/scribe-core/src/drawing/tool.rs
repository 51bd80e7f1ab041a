use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScribeError};

pub const MIN_PEN_SIZE: u32 = 1;
pub const MAX_PEN_SIZE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Pen,
    Eraser,
    Rectangle,
    Circle,
}

impl Tool {
    /// Freehand tools paint as the pointer moves; shape tools repaint a
    /// preview from the pre-stroke raster instead.
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Pen | Tool::Eraser)
    }
}

impl std::str::FromStr for Tool {
    type Err = ScribeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pen" => Ok(Tool::Pen),
            "eraser" => Ok(Tool::Eraser),
            "rectangle" | "rect" => Ok(Tool::Rectangle),
            "circle" => Ok(Tool::Circle),
            other => Err(ScribeError::validation(format!("unknown tool '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenStyle {
    pub color: Rgba<u8>,
    size: u32,
}

impl PenStyle {
    pub fn new(color: Rgba<u8>, size: u32) -> Self {
        Self {
            color,
            size: size.clamp(MIN_PEN_SIZE, MAX_PEN_SIZE),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = size.clamp(MIN_PEN_SIZE, MAX_PEN_SIZE);
    }

    /// Line width for `tool`; the eraser is twice as wide as the pen.
    pub fn width_for(&self, tool: Tool) -> f64 {
        match tool {
            Tool::Eraser => f64::from(self.size * 2),
            Tool::Pen | Tool::Rectangle | Tool::Circle => f64::from(self.size),
        }
    }
}

impl Default for PenStyle {
    fn default() -> Self {
        Self::new(Rgba([0, 0, 0, 255]), 5)
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex_color(value: &str) -> Result<Rgba<u8>> {
    let invalid = || ScribeError::validation(format!("invalid colour '{}'", value));
    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, digit) in rgb.iter_mut().zip(hex.chars()) {
                let nibble = digit.to_digit(16).ok_or_else(invalid)? as u8;
                *slot = nibble * 17;
            }
            Ok(Rgba([rgb[0], rgb[1], rgb[2], 255]))
        }
        6 => Ok(Rgba([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            255,
        ])),
        8 => Ok(Rgba([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        ])),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_forms() {
        assert_eq!(parse_hex_color("#ffffff").unwrap(), Rgba([255, 255, 255, 255]));
        assert_eq!(parse_hex_color("#f00").unwrap(), Rgba([255, 0, 0, 255]));
        assert_eq!(parse_hex_color("#00ff0080").unwrap(), Rgba([0, 255, 0, 128]));
        assert!(parse_hex_color("ffffff").is_err());
        assert!(parse_hex_color("#ggg").is_err());
        assert!(parse_hex_color("#12345").is_err());
    }

    #[test]
    fn test_size_is_clamped() {
        let mut style = PenStyle::new(Rgba([0, 0, 0, 255]), 0);
        assert_eq!(style.size(), MIN_PEN_SIZE);
        style.set_size(99);
        assert_eq!(style.size(), MAX_PEN_SIZE);
    }

    #[test]
    fn test_eraser_is_twice_pen_width() {
        let style = PenStyle::new(Rgba([0, 0, 0, 255]), 7);
        assert_eq!(style.width_for(Tool::Pen), 7.0);
        assert_eq!(style.width_for(Tool::Eraser), 14.0);
        assert_eq!(style.width_for(Tool::Circle), 7.0);
    }

    #[test]
    fn test_tool_parse() {
        assert_eq!("Rect".parse::<Tool>().unwrap(), Tool::Rectangle);
        assert!(Tool::Eraser.is_freehand());
        assert!(!Tool::Circle.is_freehand());
        assert!("lasso".parse::<Tool>().is_err());
    }
}
