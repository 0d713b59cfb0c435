//! Use-Cases für Fußwege.

use super::{finish_tile_edit, require_kind};
use crate::app::events::CommandMode;
use crate::app::InspectorState;
use crate::core::ElementKind;
use crate::error::{CommandResult, InspectorError};
use glam::IVec2;

/// Setzt oder entfernt die Neigung eines Wegs.
pub fn path_set_sloped(
    state: &mut InspectorState,
    coord: IVec2,
    index: usize,
    sloped: bool,
    mode: CommandMode,
) -> CommandResult {
    require_kind(&state.map, coord, index, ElementKind::Path, "Weg")?;
    if !mode.is_apply() {
        return Ok(());
    }

    if let Some(path) = state
        .map
        .element_mut(coord, index)
        .and_then(|e| e.as_path_mut())
    {
        path.sloped = sloped;
    }
    finish_tile_edit(state, coord);
    log::info!(
        "Weg {} auf ({}, {}) geneigt: {}",
        index,
        coord.x,
        coord.y,
        sloped
    );
    Ok(())
}

/// Schaltet Bit `edge` der Kanten-/Ecken-Maske um (0..3 Kanten, 4..7 Ecken).
pub fn path_toggle_edge(
    state: &mut InspectorState,
    coord: IVec2,
    index: usize,
    edge: u8,
    mode: CommandMode,
) -> CommandResult {
    if edge > 7 {
        return Err(InspectorError::InvalidArgument {
            name: "edge",
            value: i32::from(edge),
        });
    }
    require_kind(&state.map, coord, index, ElementKind::Path, "Weg")?;
    if !mode.is_apply() {
        return Ok(());
    }

    if let Some(path) = state
        .map
        .element_mut(coord, index)
        .and_then(|e| e.as_path_mut())
    {
        path.edges ^= 1 << edge;
    }
    finish_tile_edit(state, coord);
    log::info!(
        "Weg-Kante {} an Element {} auf ({}, {}) umgeschaltet",
        edge,
        index,
        coord.x,
        coord.y
    );
    Ok(())
}
