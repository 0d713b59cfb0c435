//! Map-Elemente: ein Eintrag im vertikalen Stapel eines Tiles.
//!
//! Jedes Element besteht aus gemeinsamen Feldern (Höhen, Richtung, Kollisionsmaske)
//! und einer typabhängigen Nutzlast. Die Bit-Packung existiert nur an der
//! Serialisierungsgrenze (`core::packed`).

use serde::{Deserialize, Serialize};

/// Maske für das 2-Bit-Richtungsfeld
pub const DIRECTION_MASK: u8 = 0b11;
/// Maske für 4-Bit-Felder (Ecken, Kanten, Quadranten)
pub const NIBBLE_MASK: u8 = 0x0F;

/// Art eines Map-Elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// Geländeoberfläche
    Surface,
    /// Fußweg
    Path,
    /// Schienenstück einer Attraktion
    Track,
    /// Kleine Szenerie
    Scenery,
    /// Ein-/Ausgang oder Parkeingang
    Entrance,
    /// Zaun/Wand an einer Tile-Kante
    Fence,
    /// Banner auf einem Weg
    Banner,
    /// Absichtlich defektes Element (blendet darüberliegende aus)
    Corrupt,
}

impl ElementKind {
    /// Gibt zurück, ob Elemente dieser Art gedreht werden können.
    pub fn is_rotatable(self) -> bool {
        matches!(
            self,
            ElementKind::Path
                | ElementKind::Track
                | ElementKind::Scenery
                | ElementKind::Entrance
                | ElementKind::Fence
                | ElementKind::Banner
        )
    }
}

/// Oberfläche: Eckenhebung, Diagonale, Besitzverhältnisse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SurfaceData {
    /// Angehobene Ecken (Bit 0..3)
    pub corners: u8,
    /// Diagonal steiler Hang (eine Ecke doppelt angehoben)
    pub diagonal: bool,
    /// Geländetyp
    pub terrain: u8,
    /// Besitz-Flags (`OWNERSHIP_*`)
    pub ownership: u8,
    /// Sichtbare Parkzäune je Kante (Bit 0..3)
    pub park_fences: u8,
}

impl SurfaceData {
    /// Tile gehört dem Park
    pub const OWNERSHIP_OWNED: u8 = 1 << 1;
    /// Bau-Rechte, aber kein Besitz
    pub const OWNERSHIP_CONSTRUCTION_RIGHTS: u8 = 1 << 0;
    /// Tile kann gekauft werden
    pub const OWNERSHIP_AVAILABLE: u8 = 1 << 3;

    /// Gibt zurück, ob der Park dieses Tile besitzt.
    pub fn is_owned(&self) -> bool {
        self.ownership & Self::OWNERSHIP_OWNED != 0
    }
}

/// Fußweg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathData {
    /// Objekt-Typ des Wegs
    pub path_type: u8,
    /// Weg ist geneigt
    pub sloped: bool,
    /// Richtung der Neigung (0..3)
    pub slope_direction: u8,
    /// Kanten (Bit 0..3) und Ecken (Bit 4..7)
    pub edges: u8,
}

impl PathData {
    /// Verbundene Kanten (untere 4 Bit)
    pub fn edge_mask(&self) -> u8 {
        self.edges & NIBBLE_MASK
    }

    /// Verbundene Ecken (obere 4 Bit, nach unten geschoben)
    pub fn corner_mask(&self) -> u8 {
        self.edges >> 4
    }
}

/// Schienenstück
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackData {
    /// Index der Attraktion
    pub ride_index: u8,
    /// Typ des Schienenstücks (Index in die Track-Vorlagen)
    pub track_type: u8,
    /// Position innerhalb des mehrteiligen Stücks (0..15)
    pub sequence: u8,
    /// Kettenlift aktiv
    pub chain_lift: bool,
}

/// Kleine Szenerie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SceneryData {
    /// Objekt-Typ
    pub object_type: u8,
    /// Belegter Viertel-Platz (0..3)
    pub quadrant: u8,
}

/// Eingang/Ausgang
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntranceData {
    /// Eingangs-Typ (Ride-Eingang, Ride-Ausgang, Parkeingang)
    pub entrance_type: u8,
    /// Teilstück bei mehrteiligen Eingängen
    pub sequence: u8,
    /// Zugehörige Attraktion
    pub ride_index: u8,
}

/// Zaun/Wand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FenceData {
    /// Objekt-Typ
    pub fence_type: u8,
    /// Neigung (0..3)
    pub slope: u8,
}

/// Banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BannerData {
    /// Index in die Banner-Tabelle
    pub banner_index: u8,
    /// Kante, an der das Banner steht (0..3)
    pub position: u8,
    /// Blockierte Kanten (Bit 0..3)
    pub flags: u8,
}

/// Typabhängige Nutzlast eines Map-Elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementData {
    Surface(SurfaceData),
    Path(PathData),
    Track(TrackData),
    Scenery(SceneryData),
    Entrance(EntranceData),
    Fence(FenceData),
    Banner(BannerData),
    Corrupt,
}

/// Ein Eintrag im Element-Stapel eines Tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapElement {
    /// Unterkante in Höhen-Einheiten
    pub base_height: u8,
    /// Oberkante in Höhen-Einheiten
    pub clearance_height: u8,
    /// Drehung (0..3)
    pub direction: u8,
    /// Belegte Viertel für Kollisionsprüfung (Bit 0..3)
    pub occupied_quadrants: u8,
    /// Typabhängige Daten
    pub data: ElementData,
}

impl MapElement {
    /// Erstellt ein Element mit Höhen und Nutzlast; Richtung und Quadranten sind 0.
    pub fn new(base_height: u8, clearance_height: u8, data: ElementData) -> Self {
        Self {
            base_height,
            clearance_height,
            direction: 0,
            occupied_quadrants: 0,
            data,
        }
    }

    /// Flache Oberfläche auf gegebener Höhe
    pub fn surface(base_height: u8) -> Self {
        Self::new(
            base_height,
            base_height,
            ElementData::Surface(SurfaceData::default()),
        )
    }

    /// Defektes Element auf gegebener Höhe
    pub fn corrupt(base_height: u8) -> Self {
        Self::new(base_height, base_height, ElementData::Corrupt)
    }

    /// Setzt die Richtung (Builder-Stil).
    pub fn with_direction(mut self, direction: u8) -> Self {
        self.direction = direction & DIRECTION_MASK;
        self
    }

    /// Art des Elements
    pub fn kind(&self) -> ElementKind {
        match self.data {
            ElementData::Surface(_) => ElementKind::Surface,
            ElementData::Path(_) => ElementKind::Path,
            ElementData::Track(_) => ElementKind::Track,
            ElementData::Scenery(_) => ElementKind::Scenery,
            ElementData::Entrance(_) => ElementKind::Entrance,
            ElementData::Fence(_) => ElementKind::Fence,
            ElementData::Banner(_) => ElementKind::Banner,
            ElementData::Corrupt => ElementKind::Corrupt,
        }
    }

    pub fn as_surface(&self) -> Option<&SurfaceData> {
        match &self.data {
            ElementData::Surface(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_surface_mut(&mut self) -> Option<&mut SurfaceData> {
        match &mut self.data {
            ElementData::Surface(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_path_mut(&mut self) -> Option<&mut PathData> {
        match &mut self.data {
            ElementData::Path(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_track(&self) -> Option<&TrackData> {
        match &self.data {
            ElementData::Track(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_track_mut(&mut self) -> Option<&mut TrackData> {
        match &mut self.data {
            ElementData::Track(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_fence_mut(&mut self) -> Option<&mut FenceData> {
        match &mut self.data {
            ElementData::Fence(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_scenery_mut(&mut self) -> Option<&mut SceneryData> {
        match &mut self.data {
            ElementData::Scenery(s) => Some(s),
            _ => None,
        }
    }

    /// Sortierschlüssel für die Zeichenreihenfolge: (Unterkante, Oberkante)
    pub fn height_key(&self) -> (u8, u8) {
        (self.base_height, self.clearance_height)
    }
}

/// Rotiert eine 4-Bit-Maske zyklisch um eine Position nach links.
pub fn rotate_nibble(mask: u8) -> u8 {
    let mask = mask & NIBBLE_MASK;
    ((mask << 1) | (mask >> 3)) & NIBBLE_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_nibble_wraps_around() {
        assert_eq!(rotate_nibble(0b0001), 0b0010);
        assert_eq!(rotate_nibble(0b1000), 0b0001);
        assert_eq!(rotate_nibble(0b1011), 0b0111);

        let mut mask = 0b0001;
        for _ in 0..4 {
            mask = rotate_nibble(mask);
        }
        assert_eq!(mask, 0b0001);
    }

    #[test]
    fn test_kind_matches_payload() {
        assert_eq!(MapElement::surface(14).kind(), ElementKind::Surface);
        assert_eq!(MapElement::corrupt(3).kind(), ElementKind::Corrupt);
        assert!(!ElementKind::Surface.is_rotatable());
        assert!(ElementKind::Banner.is_rotatable());
    }

    #[test]
    fn test_path_masks_split_edges_and_corners() {
        let path = PathData {
            edges: 0b1010_0101,
            ..Default::default()
        };
        assert_eq!(path.edge_mask(), 0b0101);
        assert_eq!(path.corner_mask(), 0b1010);
    }
}
