//! Retained-mode widget tree over a region engine.
//!
//! - core: geometry, band layout, paint vocabulary
//! - engine: the region/binding seam and the in-memory `Screen`
//! - backend: paint-command consumers (headless and terminal)
//! - widgets: the widget arena node types
//! - session: `Ui`, the root that lays out, draws and routes focus

pub mod backend;
pub mod core;
pub mod engine;
pub mod error;
pub mod focus;
pub mod handle;
pub mod listeners;
pub mod modal;
pub mod session;
pub mod widgets;

pub use engine::{Engine, EngineError, Screen};
pub use error::UiError;
pub use handle::UiHandle;
pub use listeners::ListenerId;
pub use modal::Modal;
pub use session::Ui;
pub use widgets::{ChoiceEvent, WidgetId};
