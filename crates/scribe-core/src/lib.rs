//! Scribe Core Library
//!
//! Document store, canvas history, drawing engine and markdown preview.
//! No IO dependencies, pure logic only.
//!

pub mod config;
pub mod drawing;
pub mod error;
pub mod history;
pub mod line_map;
pub mod markdown;
pub mod model;
pub mod parser;
pub mod store;
pub mod utils;

pub use config::ScribeConfig;
pub use drawing::{DrawingEngine, EngineOptions, Tool};
pub use error::{Result, ScribeError};
pub use history::HistoryStack;
pub use model::{Document, DocumentId, DocumentKind};
pub use store::{FileStore, StoreEvent, SubscriptionId};
