use scribe_core::drawing::{parse_hex_color, DrawingEngine, EngineOptions, Point, Tool};
use scribe_core::{DocumentId, Result};

use crate::protocol::PointerEvent;
use crate::state::{CanvasSession, GlobalState};

const NO_CANVAS_SELECTED: &str = "No canvas selected";
const NO_CANVAS_OPEN: &str = "No canvas open";

/// Handle opening the active canvas for drawing at the given display size
/// (config defaults when absent).
///
/// Content that fails to decode is reported and replaced by a blank surface;
/// the stored document is left untouched until the next save.
pub async fn handle_open_canvas(
    state: &GlobalState,
    size: Option<(u32, u32)>,
) -> Result<DocumentId> {
    let document = {
        let store = state.store.read().await;
        match store.active_file() {
            Some(doc) if doc.is_canvas() => doc.clone(),
            _ => return Err(state.reject(NO_CANVAS_SELECTED)),
        }
    };

    let mut options = EngineOptions::from_config(&state.config.canvas)?;
    if let Some((width, height)) = size {
        options.width = width;
        options.height = height;
    }

    let engine = match DrawingEngine::open(&document.content, options) {
        Ok(engine) => engine,
        Err(e) => {
            log::warn!("canvas {} could not be decoded: {}", document.id, e);
            state.notifier.error("Could not load canvas, starting blank");
            DrawingEngine::blank(options)
        }
    };

    let mut canvas = state.canvas.write().await;
    *canvas = Some(CanvasSession {
        document_id: document.id.clone(),
        engine,
    });
    log::info!(
        "opened canvas {} at {}x{}",
        document.id,
        options.width,
        options.height
    );
    Ok(document.id)
}

pub async fn handle_close_canvas(state: &GlobalState) -> bool {
    state.canvas.write().await.take().is_some()
}

/// Run `f` against the open drawing session.
async fn with_engine<T>(
    state: &GlobalState,
    f: impl FnOnce(&mut DrawingEngine) -> T,
) -> Result<T> {
    let mut canvas = state.canvas.write().await;
    match canvas.as_mut() {
        Some(session) => Ok(f(&mut session.engine)),
        None => Err(state.reject(NO_CANVAS_OPEN)),
    }
}

/// Handle pointer input. Returns whether the event changed the stroke state.
pub async fn handle_pointer(state: &GlobalState, event: PointerEvent) -> Result<bool> {
    with_engine(state, |engine| match event {
        PointerEvent::Down { x, y } => engine.pointer_down(Point::new(x, y)),
        PointerEvent::Move { x, y } => engine.pointer_move(Point::new(x, y)),
        PointerEvent::Up => engine.pointer_up(),
        PointerEvent::Leave => engine.pointer_leave(),
    })
    .await
}

pub async fn handle_set_tool(state: &GlobalState, tool: Tool) -> Result<()> {
    with_engine(state, |engine| engine.set_tool(tool)).await
}

/// Handle the colour picker; expects `#rrggbb`-style input.
pub async fn handle_set_color(state: &GlobalState, color: &str) -> Result<()> {
    let color = parse_hex_color(color).map_err(|e| {
        state.notifier.error(e.to_string());
        e
    })?;
    with_engine(state, |engine| engine.set_color(color)).await
}

/// Handle the size slider; values are clamped to the supported range.
pub async fn handle_set_size(state: &GlobalState, size: u32) -> Result<()> {
    with_engine(state, |engine| engine.set_size(size)).await
}

pub async fn handle_undo(state: &GlobalState) -> Result<bool> {
    with_engine(state, DrawingEngine::undo).await
}

pub async fn handle_redo(state: &GlobalState) -> Result<bool> {
    with_engine(state, DrawingEngine::redo).await
}

/// Handle a display size change
pub async fn handle_resize(state: &GlobalState, width: u32, height: u32) -> Result<()> {
    with_engine(state, |engine| engine.resize(width, height)).await
}

/// Handle "save canvas": persist the current raster into the document.
/// Returns `false` if the document was deleted in the meantime.
pub async fn handle_save_canvas(state: &GlobalState) -> Result<bool> {
    let (document_id, uri) = {
        let canvas = state.canvas.read().await;
        let Some(session) = canvas.as_ref() else {
            return Err(state.reject(NO_CANVAS_OPEN));
        };
        let uri = session.engine.to_data_uri().map_err(|e| {
            log::error!("failed to encode canvas {}: {}", session.document_id, e);
            state.notifier.error("Failed to save canvas");
            e
        })?;
        (session.document_id.clone(), uri)
    };

    let saved = state.store.write().await.update_file(&document_id, &uri);
    if saved {
        state.notifier.success("Canvas saved");
    } else {
        log::debug!("save ignored, {} no longer exists", document_id);
    }
    Ok(saved)
}

/// History position as (cursor, length) for the undo/redo buttons.
pub async fn handle_history_state(state: &GlobalState) -> Option<(usize, usize)> {
    let canvas = state.canvas.read().await;
    canvas
        .as_ref()
        .map(|session| (session.engine.history().cursor(), session.engine.history().len()))
}
