//! Track-Vorlagen: welche Tiles und Höhen ein mehrteiliges Schienenstück belegt.
//!
//! Eine Vorlage ist eine geordnete Liste von Blöcken relativ zum Ursprung des
//! Stücks in Richtung 0. Rohtabellen enden mit dem Sentinel-Index
//! [`TRACK_BLOCK_END`].

use anyhow::{bail, Context, Result};
use glam::IVec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sentinel-Index am Ende einer Rohtabelle
pub const TRACK_BLOCK_END: u8 = 255;
/// Maximale Anzahl Blöcke pro Stück (Sequenz-Index ist 4 Bit breit)
pub const MAX_TRACK_BLOCKS: usize = 16;

pub const TRACK_FLAT: u8 = 0;
pub const TRACK_END_STATION: u8 = 1;
pub const TRACK_BEGIN_STATION: u8 = 2;
pub const TRACK_MIDDLE_STATION: u8 = 3;
pub const TRACK_25_DEG_UP: u8 = 4;
pub const TRACK_FLAT_TO_25_DEG_UP: u8 = 6;
pub const TRACK_LEFT_QUARTER_TURN_5_TILES: u8 = 16;
pub const TRACK_LEFT_VERTICAL_LOOP: u8 = 18;
pub const TRACK_LEFT_QUARTER_TURN_3_TILES: u8 = 42;
/// Flat-Ride-Stück mit 3×3 Tiles um den Mittelpunkt
pub const FLAT_TRACK_3X3: u8 = 1;
/// Flat-Ride-Stück mit 2×2 Tiles
pub const FLAT_TRACK_2X2: u8 = 2;

/// Ein Block einer Track-Vorlage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackBlock {
    /// Sequenz-Index innerhalb des Stücks
    pub index: u8,
    /// Tile-Offset relativ zum Ursprung (Richtung 0)
    pub offset: IVec2,
    /// Höhen-Offset in Höhen-Einheiten
    pub z: i16,
}

impl TrackBlock {
    const fn raw(index: u8, x: i32, y: i32, z: i16) -> Self {
        Self {
            index,
            offset: IVec2::new(x, y),
            z,
        }
    }
}

/// Baut eine Vorlage aus einer Sentinel-terminierten Rohtabelle.
pub fn blocks_from_raw(raw: &[TrackBlock]) -> Vec<TrackBlock> {
    raw.iter()
        .take_while(|b| b.index != TRACK_BLOCK_END)
        .copied()
        .collect()
}

/// Welche Vorlagen-Tabelle eine Attraktion nutzt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideClass {
    /// Achterbahnen, Bahnen, Wasserfahrten
    #[default]
    Tracked,
    /// Flat-Rides mit festem Fußabdruck
    Flat,
}

/// Liefert die Track-Vorlage für (Attraktion, Stück-Typ).
pub trait TrackTemplateProvider {
    /// Geordnete Blöcke ohne Sentinel, `None` bei unbekanntem Stück.
    fn track_template(&self, ride_index: u8, track_type: u8) -> Option<&[TrackBlock]>;
}

/// Eintrag im TOML-Katalog: Klasse einer Attraktion
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RideEntry {
    index: u8,
    class: RideClass,
}

/// Eintrag im TOML-Katalog: Vorlage eines Stücks
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PieceEntry {
    class: RideClass,
    track_type: u8,
    blocks: Vec<TrackBlock>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "ride")]
    rides: Vec<RideEntry>,
    #[serde(default, rename = "piece")]
    pieces: Vec<PieceEntry>,
}

/// Katalog aller bekannten Track-Vorlagen und Attraktions-Klassen
#[derive(Debug, Clone)]
pub struct TrackCatalog {
    rides: IndexMap<u8, RideClass>,
    pieces: IndexMap<(RideClass, u8), Vec<TrackBlock>>,
}

const RAW_SINGLE: [TrackBlock; 2] = [
    TrackBlock::raw(0, 0, 0, 0),
    TrackBlock::raw(TRACK_BLOCK_END, 0, 0, 0),
];

const RAW_LEFT_QUARTER_TURN_3_TILES: [TrackBlock; 5] = [
    TrackBlock::raw(0, 0, 0, 0),
    TrackBlock::raw(1, 0, -1, 0),
    TrackBlock::raw(2, -1, 0, 0),
    TrackBlock::raw(3, -1, -1, 0),
    TrackBlock::raw(TRACK_BLOCK_END, 0, 0, 0),
];

const RAW_LEFT_QUARTER_TURN_5_TILES: [TrackBlock; 8] = [
    TrackBlock::raw(0, 0, 0, 0),
    TrackBlock::raw(1, -1, 0, 0),
    TrackBlock::raw(2, -1, -1, 0),
    TrackBlock::raw(3, -2, 0, 0),
    TrackBlock::raw(4, -2, -1, 0),
    TrackBlock::raw(5, -3, -1, 0),
    TrackBlock::raw(6, -3, -2, 0),
    TrackBlock::raw(TRACK_BLOCK_END, 0, 0, 0),
];

const RAW_LEFT_VERTICAL_LOOP: [TrackBlock; 11] = [
    TrackBlock::raw(0, 0, 0, 0),
    TrackBlock::raw(1, -1, 0, 1),
    TrackBlock::raw(2, -2, 0, 3),
    TrackBlock::raw(3, -3, 0, 7),
    TrackBlock::raw(4, -2, 0, 12),
    TrackBlock::raw(5, -2, -1, 12),
    TrackBlock::raw(6, -3, -1, 7),
    TrackBlock::raw(7, -2, -1, 3),
    TrackBlock::raw(8, -1, -1, 1),
    TrackBlock::raw(9, 0, -1, 0),
    TrackBlock::raw(TRACK_BLOCK_END, 0, 0, 0),
];

const RAW_FLAT_3X3: [TrackBlock; 10] = [
    TrackBlock::raw(0, 0, 0, 0),
    TrackBlock::raw(1, -1, -1, 0),
    TrackBlock::raw(2, -1, 0, 0),
    TrackBlock::raw(3, 0, -1, 0),
    TrackBlock::raw(4, 1, 1, 0),
    TrackBlock::raw(5, 0, 1, 0),
    TrackBlock::raw(6, 1, 0, 0),
    TrackBlock::raw(7, -1, 1, 0),
    TrackBlock::raw(8, 1, -1, 0),
    TrackBlock::raw(TRACK_BLOCK_END, 0, 0, 0),
];

const RAW_FLAT_2X2: [TrackBlock; 5] = [
    TrackBlock::raw(0, 0, 0, 0),
    TrackBlock::raw(1, 0, 1, 0),
    TrackBlock::raw(2, 1, 0, 0),
    TrackBlock::raw(3, 1, 1, 0),
    TrackBlock::raw(TRACK_BLOCK_END, 0, 0, 0),
];

impl TrackCatalog {
    /// Leerer Katalog ohne Vorlagen
    pub fn empty() -> Self {
        Self {
            rides: IndexMap::new(),
            pieces: IndexMap::new(),
        }
    }

    /// Katalog mit den eingebauten Standard-Stücken
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        let tracked: [(u8, &[TrackBlock]); 9] = [
            (TRACK_FLAT, &RAW_SINGLE),
            (TRACK_END_STATION, &RAW_SINGLE),
            (TRACK_BEGIN_STATION, &RAW_SINGLE),
            (TRACK_MIDDLE_STATION, &RAW_SINGLE),
            (TRACK_25_DEG_UP, &RAW_SINGLE),
            (TRACK_FLAT_TO_25_DEG_UP, &RAW_SINGLE),
            (TRACK_LEFT_QUARTER_TURN_5_TILES, &RAW_LEFT_QUARTER_TURN_5_TILES),
            (TRACK_LEFT_VERTICAL_LOOP, &RAW_LEFT_VERTICAL_LOOP),
            (TRACK_LEFT_QUARTER_TURN_3_TILES, &RAW_LEFT_QUARTER_TURN_3_TILES),
        ];
        for (track_type, raw) in tracked {
            catalog
                .pieces
                .insert((RideClass::Tracked, track_type), blocks_from_raw(raw));
        }
        catalog
            .pieces
            .insert((RideClass::Flat, FLAT_TRACK_3X3), blocks_from_raw(&RAW_FLAT_3X3));
        catalog
            .pieces
            .insert((RideClass::Flat, FLAT_TRACK_2X2), blocks_from_raw(&RAW_FLAT_2X2));
        catalog
    }

    /// Registriert die Klasse einer Attraktion.
    pub fn set_ride_class(&mut self, ride_index: u8, class: RideClass) {
        self.rides.insert(ride_index, class);
    }

    /// Klasse einer Attraktion; unbekannte Attraktionen gelten als `Tracked`.
    pub fn ride_class(&self, ride_index: u8) -> RideClass {
        self.rides.get(&ride_index).copied().unwrap_or_default()
    }

    /// Fügt eine Vorlage hinzu oder ersetzt sie.
    ///
    /// Der Sequenz-Index jedes Blocks muss seiner Position entsprechen.
    pub fn insert_piece(
        &mut self,
        class: RideClass,
        track_type: u8,
        blocks: Vec<TrackBlock>,
    ) -> Result<()> {
        if blocks.is_empty() || blocks.len() > MAX_TRACK_BLOCKS {
            bail!(
                "Vorlage {:?}/{} hat {} Blöcke (erlaubt: 1..={})",
                class,
                track_type,
                blocks.len(),
                MAX_TRACK_BLOCKS
            );
        }
        if let Some((pos, block)) = blocks
            .iter()
            .enumerate()
            .find(|(pos, b)| usize::from(b.index) != *pos)
        {
            bail!(
                "Vorlage {:?}/{}: Block an Position {} hat Index {}",
                class,
                track_type,
                pos,
                block.index
            );
        }
        self.pieces.insert((class, track_type), blocks);
        Ok(())
    }

    /// Anzahl bekannter Vorlagen
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Parst einen TOML-Katalog und ergänzt die eingebauten Stücke.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).context("Track-Katalog ist kein gültiges TOML")?;
        let mut catalog = Self::builtin();
        for ride in file.rides {
            catalog.set_ride_class(ride.index, ride.class);
        }
        for piece in file.pieces {
            catalog.insert_piece(piece.class, piece.track_type, piece.blocks)?;
        }
        Ok(catalog)
    }

    /// Lädt einen TOML-Katalog von der Platte.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Track-Katalog nicht lesbar: {}", path.display()))?;
        let catalog = Self::from_toml_str(&content)?;
        log::info!(
            "Track-Katalog geladen aus {} ({} Vorlagen)",
            path.display(),
            catalog.piece_count()
        );
        Ok(catalog)
    }
}

impl Default for TrackCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TrackTemplateProvider for TrackCatalog {
    fn track_template(&self, ride_index: u8, track_type: u8) -> Option<&[TrackBlock]> {
        let class = self.ride_class(ride_index);
        self.pieces
            .get(&(class, track_type))
            .map(|blocks| blocks.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_table_stops_at_sentinel() {
        let blocks = blocks_from_raw(&RAW_LEFT_QUARTER_TURN_3_TILES);
        assert_eq!(blocks.len(), 4);
        assert!(blocks.iter().all(|b| b.index != TRACK_BLOCK_END));
    }

    #[test]
    fn test_ride_class_selects_table() {
        let mut catalog = TrackCatalog::builtin();
        assert_eq!(
            catalog.track_template(0, FLAT_TRACK_3X3).map(|t| t.len()),
            Some(1),
            "Ohne Registrierung gilt die Tracked-Tabelle (Stück 1 = Endstation)"
        );

        catalog.set_ride_class(0, RideClass::Flat);
        assert_eq!(
            catalog.track_template(0, FLAT_TRACK_3X3).map(|t| t.len()),
            Some(9)
        );
        assert!(catalog.track_template(0, TRACK_LEFT_VERTICAL_LOOP).is_none());
    }

    #[test]
    fn test_toml_catalog_extends_builtin() {
        let content = r#"
            [[ride]]
            index = 7
            class = "flat"

            [[piece]]
            class = "flat"
            track_type = 9
            blocks = [
                { index = 0, offset = [0, 0], z = 0 },
                { index = 1, offset = [1, 0], z = 0 },
            ]
        "#;
        let catalog = TrackCatalog::from_toml_str(content).expect("Katalog gültig");
        assert_eq!(catalog.ride_class(7), RideClass::Flat);
        assert_eq!(catalog.track_template(7, 9).map(|t| t.len()), Some(2));
        assert!(catalog.track_template(1, TRACK_FLAT).is_some());
    }

    #[test]
    fn test_insert_piece_rejects_misnumbered_blocks() {
        let mut catalog = TrackCatalog::empty();
        let blocks = vec![TrackBlock::raw(0, 0, 0, 0), TrackBlock::raw(2, 1, 0, 0)];
        assert!(catalog.insert_piece(RideClass::Tracked, 5, blocks).is_err());
    }
}
