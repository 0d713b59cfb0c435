//! Use-Cases: alle mutierenden Inspector-Operationen.
//!
//! Jede Operation prüft zuerst ihre Vorbedingungen und verändert im Fehlerfall
//! nichts. Im Modus `Validate` endet sie nach der Prüfung.
//!
//! Aufgeteilt nach Element-Art:
//! - `elements`: Einfügen, Entfernen, Tauschen, Drehen, Sortieren, Höhe
//! - `surface`: Oberflächen-Ecken, Diagonale, Parkzäune
//! - `path`: Neigung und Kanten von Wegen
//! - `fence`: Zaun-Neigung
//! - `scenery`: Viertel-Platz von Szenerie
//! - `track`: Höhe und Kettenlift ganzer Schienenstücke

pub mod elements;
pub mod fence;
pub mod path;
pub mod scenery;
pub mod surface;
pub mod track;

use crate::app::InspectorState;
use crate::core::{ElementKind, MapElement, TileMap};
use crate::error::InspectorError;
use glam::IVec2;

pub(crate) fn require_tile(map: &TileMap, coord: IVec2) -> Result<(), InspectorError> {
    if map.contains(coord) {
        Ok(())
    } else {
        Err(InspectorError::TileOutOfBounds(coord))
    }
}

pub(crate) fn require_element(
    map: &TileMap,
    coord: IVec2,
    index: usize,
) -> Result<&MapElement, InspectorError> {
    require_tile(map, coord)?;
    map.element(coord, index)
        .ok_or(InspectorError::ElementNotFound { coord, index })
}

/// Wie [`require_element`], zusätzlich muss das Element von Art `kind` sein.
pub(crate) fn require_kind<'a>(
    map: &'a TileMap,
    coord: IVec2,
    index: usize,
    kind: ElementKind,
    expected: &'static str,
) -> Result<&'a MapElement, InspectorError> {
    let element = require_element(map, coord, index)?;
    if element.kind() == kind {
        Ok(element)
    } else {
        Err(InspectorError::WrongElementKind {
            coord,
            index,
            expected,
        })
    }
}

/// Prüft, ob eine berechnete Höhe in ein Höhenfeld passt.
pub(crate) fn checked_height(value: i32) -> Result<u8, InspectorError> {
    u8::try_from(value).map_err(|_| InspectorError::HeightOutOfRange { value })
}

/// Abschluss einer Feld-Änderung: Tile neu zeichnen, Inspector aktualisieren,
/// falls er das Tile zeigt.
pub(crate) fn finish_tile_edit(state: &mut InspectorState, coord: IVec2) {
    state.invalidation.invalidate_tile(coord);
    if state.is_inspecting(coord) {
        state.refresh_inspector();
    }
}
