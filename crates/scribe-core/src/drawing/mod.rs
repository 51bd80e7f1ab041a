//! Raster drawing: surface primitives, tools, the stroke state machine and
//! the persisted data-URI form.

pub mod codec;
mod engine;
mod surface;
mod tool;

pub use engine::{DrawingEngine, EngineOptions};
pub use surface::{Snapshot, Surface};
pub use tool::{parse_hex_color, PenStyle, Tool, MAX_PEN_SIZE, MIN_PEN_SIZE};

pub use image::{Rgba, RgbaImage};
pub use kurbo::Point;
