//! Bit-gepacktes 8-Byte-Format eines Map-Elements (Datei- und Clipboard-Grenze).
//!
//! Layout:
//! - Byte 0 (`type`): Bit 0–1 Richtung, Bit 2–5 Element-Art, Bit 6–7 typabhängig
//!   (Track: Bit 7 Kettenlift; Szenerie: Quadrant; Zaun: Neigung)
//! - Byte 1 (`flags`): Bit 0–3 belegte Quadranten, Bit 7 letztes Element des Tiles
//! - Byte 2/3: Unter- und Oberkante
//! - Byte 4–7: typabhängige Eigenschaften
//!
//! Nur hier existiert das "letztes Element"-Flag; im Speicher zählt `TileMap`
//! die Elemente pro Tile explizit.

use super::element::{
    BannerData, ElementData, EntranceData, FenceData, MapElement, PathData, SceneryData,
    SurfaceData, TrackData, DIRECTION_MASK, NIBBLE_MASK,
};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Flag im `flags`-Byte: letztes Element des Tiles
pub const FLAG_LAST_TILE: u8 = 1 << 7;
/// Größe eines gepackten Elements in Bytes
pub const PACKED_ELEMENT_SIZE: usize = 8;

const KIND_SHIFT: u8 = 2;
const KIND_MASK: u8 = 0x3C;
const TOP_BITS_SHIFT: u8 = 6;
const TRACK_CHAIN_LIFT: u8 = 1 << 7;
const SURFACE_DIAGONAL: u8 = 1 << 4;
const PATH_SLOPED: u8 = 1 << 2;

const KIND_SURFACE: u8 = 0;
const KIND_PATH: u8 = 1;
const KIND_TRACK: u8 = 2;
const KIND_SCENERY: u8 = 3;
const KIND_ENTRANCE: u8 = 4;
const KIND_FENCE: u8 = 5;
const KIND_BANNER: u8 = 7;
const KIND_CORRUPT: u8 = 8;

/// Ein Map-Element im gepackten Datei-Format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackedElement(pub [u8; PACKED_ELEMENT_SIZE]);

impl PackedElement {
    /// Packt ein Element; `last_for_tile` setzt das Tile-Ende-Flag.
    pub fn encode(element: &MapElement, last_for_tile: bool) -> Self {
        let mut type_byte = element.direction & DIRECTION_MASK;
        let mut flags = element.occupied_quadrants & NIBBLE_MASK;
        if last_for_tile {
            flags |= FLAG_LAST_TILE;
        }

        let (kind, top_bits, properties) = match element.data {
            ElementData::Surface(s) => {
                let mut slope = s.corners & NIBBLE_MASK;
                if s.diagonal {
                    slope |= SURFACE_DIAGONAL;
                }
                let ownership = (s.park_fences & NIBBLE_MASK) | (s.ownership << 4);
                (KIND_SURFACE, 0, [slope, s.terrain, ownership, 0])
            }
            ElementData::Path(p) => {
                let mut path_flags = p.slope_direction & DIRECTION_MASK;
                if p.sloped {
                    path_flags |= PATH_SLOPED;
                }
                (KIND_PATH, 0, [p.path_type, path_flags, p.edges, 0])
            }
            ElementData::Track(t) => {
                let top = if t.chain_lift { TRACK_CHAIN_LIFT } else { 0 };
                (
                    KIND_TRACK,
                    top,
                    [t.track_type, t.sequence & NIBBLE_MASK, 0, t.ride_index],
                )
            }
            ElementData::Scenery(s) => (
                KIND_SCENERY,
                (s.quadrant & DIRECTION_MASK) << TOP_BITS_SHIFT,
                [s.object_type, 0, 0, 0],
            ),
            ElementData::Entrance(e) => (
                KIND_ENTRANCE,
                0,
                [e.entrance_type, e.sequence, 0, e.ride_index],
            ),
            ElementData::Fence(f) => (
                KIND_FENCE,
                (f.slope & DIRECTION_MASK) << TOP_BITS_SHIFT,
                [f.fence_type, 0, 0, 0],
            ),
            ElementData::Banner(b) => (
                KIND_BANNER,
                0,
                [b.banner_index, b.position & DIRECTION_MASK, b.flags, 0],
            ),
            ElementData::Corrupt => (KIND_CORRUPT, 0, [0; 4]),
        };
        type_byte |= (kind << KIND_SHIFT) | top_bits;

        let [p0, p1, p2, p3] = properties;
        Self([
            type_byte,
            flags,
            element.base_height,
            element.clearance_height,
            p0,
            p1,
            p2,
            p3,
        ])
    }

    /// Entpackt ein Element. Das Tile-Ende-Flag wird nicht übernommen.
    pub fn decode(&self) -> Result<MapElement> {
        let [type_byte, flags, base_height, clearance_height, p0, p1, p2, p3] = self.0;
        let top = type_byte >> TOP_BITS_SHIFT;

        let data = match (type_byte & KIND_MASK) >> KIND_SHIFT {
            KIND_SURFACE => ElementData::Surface(SurfaceData {
                corners: p0 & NIBBLE_MASK,
                diagonal: p0 & SURFACE_DIAGONAL != 0,
                terrain: p1,
                ownership: p2 >> 4,
                park_fences: p2 & NIBBLE_MASK,
            }),
            KIND_PATH => ElementData::Path(PathData {
                path_type: p0,
                sloped: p1 & PATH_SLOPED != 0,
                slope_direction: p1 & DIRECTION_MASK,
                edges: p2,
            }),
            KIND_TRACK => ElementData::Track(TrackData {
                ride_index: p3,
                track_type: p0,
                sequence: p1 & NIBBLE_MASK,
                chain_lift: type_byte & TRACK_CHAIN_LIFT != 0,
            }),
            KIND_SCENERY => ElementData::Scenery(SceneryData {
                object_type: p0,
                quadrant: top,
            }),
            KIND_ENTRANCE => ElementData::Entrance(EntranceData {
                entrance_type: p0,
                sequence: p1,
                ride_index: p3,
            }),
            KIND_FENCE => ElementData::Fence(FenceData {
                fence_type: p0,
                slope: top,
            }),
            KIND_BANNER => ElementData::Banner(BannerData {
                banner_index: p0,
                position: p1 & DIRECTION_MASK,
                flags: p2,
            }),
            KIND_CORRUPT => ElementData::Corrupt,
            other => bail!("Unbekannte Element-Art {} (type-Byte 0x{:02X})", other, type_byte),
        };

        Ok(MapElement {
            base_height,
            clearance_height,
            direction: type_byte & DIRECTION_MASK,
            occupied_quadrants: flags & NIBBLE_MASK,
            data,
        })
    }

    /// Gibt zurück, ob das Tile-Ende-Flag gesetzt ist.
    pub fn is_last_for_tile(&self) -> bool {
        self.0[1] & FLAG_LAST_TILE != 0
    }
}

/// Packt die Elemente eines Tiles; nur das letzte trägt das Tile-Ende-Flag.
pub fn pack_tile(elements: &[MapElement]) -> Vec<PackedElement> {
    let last = elements.len().saturating_sub(1);
    elements
        .iter()
        .enumerate()
        .map(|(i, e)| PackedElement::encode(e, i == last))
        .collect()
}
