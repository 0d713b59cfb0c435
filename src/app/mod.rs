//! Application-Layer: Controller, State, Commands und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod invalidation;
/// Inspector-State und Session
///
/// Dieses Modul verwaltet die Karte, die Inspector-Session und die Invalidierungen.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::InspectorController;
pub use events::{CommandMode, InspectorCommand};
pub use invalidation::{InvalidationQueue, InvalidationSink, WindowClass};
pub use state::{InspectorButtons, InspectorPage, InspectorSession, InspectorState};
