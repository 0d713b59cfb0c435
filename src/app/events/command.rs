use crate::core::MapElement;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Ob ein Befehl nur geprüft oder auch ausgeführt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandMode {
    /// Nur Vorbedingungen prüfen (Vorschau, Kostenabschätzung)
    #[default]
    Validate,
    /// Prüfen und Karte verändern
    Apply,
}

impl CommandMode {
    /// Gibt `true` zurück, wenn der Befehl die Karte verändern darf.
    pub fn is_apply(self) -> bool {
        self == CommandMode::Apply
    }
}

/// Commands sind mutierende Schritte auf einem Tile, die zentral ausgeführt werden.
///
/// `index` ist immer die Position im aktuellen Element-Stapel des Tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum InspectorCommand {
    /// Defektes Element unter Element `index` einfügen
    InsertCorrupt { coord: IVec2, index: usize },
    /// Element entfernen
    RemoveElement { coord: IVec2, index: usize },
    /// Zwei Elemente desselben Tiles tauschen
    SwapElements {
        coord: IVec2,
        first: usize,
        second: usize,
    },
    /// Element um 90° drehen
    RotateElement { coord: IVec2, index: usize },
    /// Vollständiges Element (z.B. aus dem Clipboard) einfügen
    PasteElement { coord: IVec2, element: MapElement },
    /// Elemente nach Höhe sortieren
    SortElements { coord: IVec2 },
    /// Unter- und Oberkante eines beliebigen Elements verschieben
    AnyBaseHeightOffset {
        coord: IVec2,
        index: usize,
        offset: i8,
    },
    /// Parkzäune der Oberfläche ein-/ausblenden
    SurfaceShowParkFences { coord: IVec2, show: bool },
    /// Eine Ecke der Oberfläche heben/senken
    SurfaceToggleCorner { coord: IVec2, corner: u8 },
    /// Diagonal-Flag der Oberfläche umschalten
    SurfaceToggleDiagonal { coord: IVec2 },
    /// Weg geneigt/flach setzen
    PathSetSloped {
        coord: IVec2,
        index: usize,
        sloped: bool,
    },
    /// Kante oder Ecke eines Wegs umschalten (0..3 Kanten, 4..7 Ecken)
    PathToggleEdge {
        coord: IVec2,
        index: usize,
        edge: u8,
    },
    /// Neigung eines Zauns setzen
    FenceSetSlope {
        coord: IVec2,
        index: usize,
        slope: u8,
    },
    /// Höhe eines kompletten Schienenstücks verschieben
    TrackBaseHeightOffset {
        coord: IVec2,
        index: usize,
        offset: i8,
    },
    /// Kettenlift setzen, optional für das komplette Schienenstück
    TrackSetChain {
        coord: IVec2,
        index: usize,
        entire_track_piece: bool,
        chain: bool,
    },
    /// Viertel-Platz einer Szenerie setzen
    ScenerySetQuarterLocation {
        coord: IVec2,
        index: usize,
        quadrant: u8,
    },
}

impl InspectorCommand {
    /// Tile, auf das der Befehl zielt
    pub fn coord(&self) -> IVec2 {
        match self {
            InspectorCommand::InsertCorrupt { coord, .. }
            | InspectorCommand::RemoveElement { coord, .. }
            | InspectorCommand::SwapElements { coord, .. }
            | InspectorCommand::RotateElement { coord, .. }
            | InspectorCommand::PasteElement { coord, .. }
            | InspectorCommand::SortElements { coord }
            | InspectorCommand::AnyBaseHeightOffset { coord, .. }
            | InspectorCommand::SurfaceShowParkFences { coord, .. }
            | InspectorCommand::SurfaceToggleCorner { coord, .. }
            | InspectorCommand::SurfaceToggleDiagonal { coord }
            | InspectorCommand::PathSetSloped { coord, .. }
            | InspectorCommand::PathToggleEdge { coord, .. }
            | InspectorCommand::FenceSetSlope { coord, .. }
            | InspectorCommand::TrackBaseHeightOffset { coord, .. }
            | InspectorCommand::TrackSetChain { coord, .. }
            | InspectorCommand::ScenerySetQuarterLocation { coord, .. } => *coord,
        }
    }
}
