//! Inspector-Commands und Ausführungsmodus.

mod command;

pub use command::{CommandMode, InspectorCommand};
