use image::Rgba;
use kurbo::Point;

use super::codec;
use super::surface::{Snapshot, Surface};
use super::tool::{parse_hex_color, PenStyle, Tool};
use crate::config::CanvasConfig;
use crate::error::Result;
use crate::history::HistoryStack;

/// Everything needed to set up a drawing session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    pub width: u32,
    pub height: u32,
    pub background: Rgba<u8>,
    pub style: PenStyle,
    pub history_limit: Option<usize>,
}

impl EngineOptions {
    pub fn from_config(config: &CanvasConfig) -> Result<Self> {
        Ok(Self {
            width: config.width,
            height: config.height,
            background: parse_hex_color(&config.background)?,
            style: PenStyle::new(parse_hex_color(&config.pen_color)?, config.pen_size),
            history_limit: config.history_limit,
        })
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Rgba([255, 255, 255, 255]),
            style: PenStyle::default(),
            history_limit: None,
        }
    }
}

#[derive(Debug)]
struct ActiveStroke {
    tool: Tool,
    style: PenStyle,
    anchor: Point,
    last: Point,
    /// Pre-stroke raster, kept for shape previews only
    scratch: Option<Snapshot>,
}

#[derive(Debug)]
enum StrokeState {
    Idle,
    Active(ActiveStroke),
}

/// Pointer-driven painter over a [`Surface`] with undo/redo.
///
/// A stroke runs from `pointer_down` to `pointer_up` (or `pointer_leave`).
/// Finishing a stroke pushes the resulting raster onto the history.
#[derive(Debug)]
pub struct DrawingEngine {
    surface: Surface,
    history: HistoryStack<Snapshot>,
    tool: Tool,
    style: PenStyle,
    stroke: StrokeState,
}

impl DrawingEngine {
    /// Background-filled surface; the blank raster is the history baseline.
    pub fn blank(options: EngineOptions) -> Self {
        let surface = Surface::new(options.width, options.height, options.background);
        Self::with_surface(surface, options)
    }

    /// Start from persisted content. Empty content gives a blank surface;
    /// otherwise the decoded image is drawn at the origin.
    pub fn open(content: &str, options: EngineOptions) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::blank(options));
        }
        let image = codec::decode_data_uri(content)?;
        let mut surface = Surface::new(options.width, options.height, options.background);
        surface.restore(&image);
        log::debug!(
            "loaded {}x{} canvas onto {}x{} surface",
            image.width(),
            image.height(),
            options.width,
            options.height
        );
        Ok(Self::with_surface(surface, options))
    }

    fn with_surface(surface: Surface, options: EngineOptions) -> Self {
        let baseline = surface.snapshot();
        let history = match options.history_limit {
            Some(limit) => HistoryStack::with_limit(baseline, limit),
            None => HistoryStack::new(baseline),
        };
        Self {
            surface,
            history,
            tool: Tool::default(),
            style: options.style,
            stroke: StrokeState::Idle,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn history(&self) -> &HistoryStack<Snapshot> {
        &self.history
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Takes effect from the next stroke.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn style(&self) -> PenStyle {
        self.style
    }

    pub fn set_color(&mut self, color: Rgba<u8>) {
        self.style.color = color;
    }

    pub fn set_size(&mut self, size: u32) {
        self.style.set_size(size);
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.stroke, StrokeState::Active(_))
    }

    /// Begin a stroke at `at`. Returns `false` if one is already running.
    pub fn pointer_down(&mut self, at: Point) -> bool {
        if self.is_drawing() {
            return false;
        }
        let scratch = (!self.tool.is_freehand()).then(|| self.surface.snapshot());
        self.stroke = StrokeState::Active(ActiveStroke {
            tool: self.tool,
            style: self.style,
            anchor: at,
            last: at,
            scratch,
        });
        true
    }

    /// Extend the running stroke. Returns `false` while idle.
    pub fn pointer_move(&mut self, to: Point) -> bool {
        let StrokeState::Active(stroke) = &mut self.stroke else {
            return false;
        };
        let width = stroke.style.width_for(stroke.tool);

        match stroke.tool {
            Tool::Pen => {
                self.surface
                    .stroke_line(stroke.last, to, width, stroke.style.color);
            }
            Tool::Eraser => {
                let background = self.surface.background();
                self.surface.stroke_line(stroke.last, to, width, background);
            }
            Tool::Rectangle | Tool::Circle => {
                if let Some(scratch) = &stroke.scratch {
                    self.surface.restore(scratch);
                }
                if stroke.tool == Tool::Rectangle {
                    self.surface
                        .stroke_rect(stroke.anchor, to, width, stroke.style.color);
                } else {
                    let radius = stroke.anchor.distance(to);
                    self.surface
                        .stroke_circle(stroke.anchor, radius, width, stroke.style.color);
                }
            }
        }
        stroke.last = to;
        true
    }

    /// Finish the running stroke and record it. Returns `false` while idle.
    pub fn pointer_up(&mut self) -> bool {
        let StrokeState::Active(stroke) = std::mem::replace(&mut self.stroke, StrokeState::Idle)
        else {
            return false;
        };
        self.history.push(self.surface.snapshot());
        log::debug!(
            "{:?} stroke committed, history {}/{}",
            stroke.tool,
            self.history.cursor() + 1,
            self.history.len()
        );
        true
    }

    /// Leaving the surface ends the stroke like a release.
    pub fn pointer_leave(&mut self) -> bool {
        self.pointer_up()
    }

    /// Step back through the history. No-op during a stroke.
    pub fn undo(&mut self) -> bool {
        if self.is_drawing() {
            return false;
        }
        match self.history.undo() {
            Some(snapshot) => {
                self.surface.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Step forward through the history. No-op during a stroke.
    pub fn redo(&mut self) -> bool {
        if self.is_drawing() {
            return false;
        }
        match self.history.redo() {
            Some(snapshot) => {
                self.surface.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Follow a display size change without touching the history.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        if let StrokeState::Active(ActiveStroke {
            scratch: Some(scratch),
            ..
        }) = &mut self.stroke
        {
            let mut resized = Surface::new(width, height, self.surface.background());
            resized.restore(scratch);
            *scratch = resized.snapshot();
        }
    }

    /// Persisted form of the current raster.
    pub fn to_data_uri(&self) -> Result<String> {
        codec::encode_data_uri(self.surface.pixels())
    }
}
