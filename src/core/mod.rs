//! Core-Domänentypen: Map-Elemente, Tile-Store, Track-Vorlagen, Parkgrenze.

pub mod element;
pub mod packed;
pub mod park;
pub mod tile_map;
pub mod track_piece;
pub mod track_template;

pub use element::{
    rotate_nibble, BannerData, ElementData, ElementKind, EntranceData, FenceData, MapElement,
    PathData, SceneryData, SurfaceData, TrackData,
};
pub use packed::{pack_tile, PackedElement, FLAG_LAST_TILE, PACKED_ELEMENT_SIZE};
pub use park::{park_fence_mask, update_park_fences};
pub use tile_map::TileMap;
pub use track_piece::{locate_track_piece, rotate_offset, TrackPart};
pub use track_template::{RideClass, TrackBlock, TrackCatalog, TrackTemplateProvider};
