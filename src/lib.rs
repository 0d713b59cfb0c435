//! Tile-Inspector Library.
//! Direkte Bearbeitung der Tile-/Map-Element-Daten einer Park-Karte, als
//! Library exportiert für Tests, Host-Anwendungen und die CLI.

pub mod app;
pub mod core;
pub mod error;
pub mod format;
pub mod shared;

pub use app::{
    CommandLog, CommandMode, InspectorButtons, InspectorCommand, InspectorController,
    InspectorPage, InspectorSession, InspectorState, InvalidationQueue, InvalidationSink,
    WindowClass,
};
pub use core::{
    BannerData, ElementData, ElementKind, EntranceData, FenceData, MapElement, PackedElement,
    PathData, RideClass, SceneryData, SurfaceData, TileMap, TrackBlock, TrackCatalog, TrackData,
    TrackTemplateProvider,
};
pub use error::{CommandResult, InspectorError};
pub use format::{load_map_file, read_map, save_map_file, write_map};
pub use shared::InspectorOptions;
