pub mod drag;
pub mod engine;
pub mod logging;
pub mod runtime;

pub use drag::DragController;
pub use engine::BoardEngine;
pub use runtime::{EngineEvent, EngineHandle, EngineRuntime};
