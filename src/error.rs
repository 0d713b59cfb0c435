//! Fehler abgelehnter Inspector-Befehle.

use glam::IVec2;

/// Grund, warum ein Befehl abgelehnt wurde. Bei jedem Fehler bleibt die Karte unverändert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InspectorError {
    #[error("kein freier Element-Slot mehr verfügbar")]
    OutOfSpace,
    #[error("Tile ({}, {}) liegt außerhalb der Karte", .0.x, .0.y)]
    TileOutOfBounds(IVec2),
    #[error("Tile ({}, {}) hat kein Element mit Index {index}", .coord.x, .coord.y)]
    ElementNotFound { coord: IVec2, index: usize },
    #[error("Element {index} auf Tile ({}, {}) ist kein {expected}", .coord.x, .coord.y)]
    WrongElementKind {
        coord: IVec2,
        index: usize,
        expected: &'static str,
    },
    #[error("Tile ({}, {}) hat keine Oberfläche", .0.x, .0.y)]
    NoSurface(IVec2),
    #[error("Höhe {value} liegt außerhalb von 0..=255")]
    HeightOutOfRange { value: i32 },
    #[error("Höhen-Offset 0 ändert nichts")]
    ZeroOffset,
    #[error("ungültiges Argument {name} = {value}")]
    InvalidArgument { name: &'static str, value: i32 },
    #[error("Track-Vorlage fehlt: Attraktion {ride_index}, Stück {track_type}, Sequenz {sequence}")]
    UnknownTrackPiece {
        ride_index: u8,
        track_type: u8,
        sequence: u8,
    },
    #[error("Track-Teil {sequence} auf Tile ({}, {}) nicht gefunden", .coord.x, .coord.y)]
    TrackPartNotFound { coord: IVec2, sequence: u8 },
}

/// Ergebnis eines Inspector-Befehls
pub type CommandResult = Result<(), InspectorError>;
