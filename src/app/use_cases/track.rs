//! Use-Cases für mehrteilige Schienenstücke.
//!
//! Beide Operationen suchen zuerst alle Teile des Stücks. Erst wenn jedes Teil
//! gefunden ist (und bei der Höhe jedes Teil im gültigen Bereich bleibt), wird
//! verändert. Fehlt ein Teil, bleibt die Karte unverändert.

use super::{checked_height, require_kind};
use crate::app::events::CommandMode;
use crate::app::invalidation::WindowClass;
use crate::app::InspectorState;
use crate::core::{locate_track_piece, ElementKind, TrackPart};
use crate::error::{CommandResult, InspectorError};
use glam::IVec2;

fn locate(
    state: &InspectorState,
    coord: IVec2,
    index: usize,
) -> Result<Vec<TrackPart>, InspectorError> {
    require_kind(&state.map, coord, index, ElementKind::Track, "Schienenstück")?;
    locate_track_piece(&state.map, &state.track_catalog, coord, index)
}

/// Tiles neu zeichnen; das Inspector-Fenster wird aufgefrischt, sobald es offen ist.
fn finish_track_edit(state: &mut InspectorState, parts: &[TrackPart]) {
    for part in parts {
        state.invalidation.invalidate_tile(part.coord);
    }
    if state.session.is_open() {
        state.session.auto_set_buttons(&state.map);
        state
            .invalidation
            .invalidate_window_class(WindowClass::TileInspector);
    }
}

/// Verschiebt alle Teile des Schienenstücks um `offset` Höhen-Einheiten.
pub fn track_base_height_offset(
    state: &mut InspectorState,
    coord: IVec2,
    index: usize,
    offset: i8,
    mode: CommandMode,
) -> CommandResult {
    if offset == 0 {
        return Err(InspectorError::ZeroOffset);
    }
    let parts = locate(state, coord, index)?;

    let mut heights = Vec::with_capacity(parts.len());
    for part in &parts {
        let element = state
            .map
            .element(part.coord, part.index)
            .ok_or(InspectorError::TrackPartNotFound {
                coord: part.coord,
                sequence: part.sequence,
            })?;
        let base = checked_height(i32::from(element.base_height) + i32::from(offset))?;
        let clearance = checked_height(i32::from(element.clearance_height) + i32::from(offset))?;
        heights.push((base, clearance));
    }
    if !mode.is_apply() {
        log::debug!(
            "Höhenänderung für {} Track-Teile ab ({}, {}) geprüft",
            parts.len(),
            coord.x,
            coord.y
        );
        return Ok(());
    }

    for (part, (base, clearance)) in parts.iter().zip(heights) {
        if let Some(element) = state.map.element_mut(part.coord, part.index) {
            element.base_height = base;
            element.clearance_height = clearance;
        }
    }
    finish_track_edit(state, &parts);

    log::info!(
        "Schienenstück mit {} Teilen ab ({}, {}) um {} verschoben",
        parts.len(),
        coord.x,
        coord.y,
        offset
    );
    Ok(())
}

/// Setzt den Kettenlift auf dem Element oder auf allen Teilen des Stücks.
pub fn track_set_chain(
    state: &mut InspectorState,
    coord: IVec2,
    index: usize,
    entire_track_piece: bool,
    chain: bool,
    mode: CommandMode,
) -> CommandResult {
    let parts = if entire_track_piece {
        locate(state, coord, index)?
    } else {
        require_kind(&state.map, coord, index, ElementKind::Track, "Schienenstück")?;
        vec![TrackPart {
            coord,
            index,
            sequence: state
                .map
                .element(coord, index)
                .and_then(|e| e.as_track())
                .map_or(0, |t| t.sequence),
        }]
    };
    if !mode.is_apply() {
        return Ok(());
    }

    for part in &parts {
        if let Some(track) = state
            .map
            .element_mut(part.coord, part.index)
            .and_then(|e| e.as_track_mut())
        {
            track.chain_lift = chain;
        }
    }
    finish_track_edit(state, &parts);

    log::info!(
        "Kettenlift {} auf {} Track-Teil(en) ab ({}, {})",
        if chain { "gesetzt" } else { "entfernt" },
        parts.len(),
        coord.x,
        coord.y
    );
    Ok(())
}
