//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die von `app`, `format` und der Binary
//! gemeinsam genutzt werden.

pub mod options;

pub use options::InspectorOptions;
pub use options::{DEFAULT_ELEMENT_CAPACITY, DEFAULT_MAP_SIZE, DEFAULT_SURFACE_HEIGHT};
