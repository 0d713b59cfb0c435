//! Use-Case: Zwei Elemente eines Tiles tauschen.

use crate::app::events::CommandMode;
use crate::app::use_cases::require_tile;
use crate::app::InspectorState;
use crate::error::CommandResult;
use glam::IVec2;

/// Tauscht die Elemente `first` und `second`.
///
/// # Panics
/// Wenn das Tile weniger als zwei Elemente hat oder ein Index ungültig ist.
/// Die Buttons des Inspectors lassen das nicht zu; ein solcher Aufruf ist ein Programmfehler.
pub fn swap_elements(
    state: &mut InspectorState,
    coord: IVec2,
    first: usize,
    second: usize,
    mode: CommandMode,
) -> CommandResult {
    require_tile(&state.map, coord)?;
    state.map.assert_swappable(coord, first, second);
    if !mode.is_apply() {
        return Ok(());
    }

    state.map.swap_elements(coord, first, second);
    state.invalidation.invalidate_tile(coord);

    if state.is_inspecting(coord) {
        let session = &mut state.session;
        if session.selected_element == Some(first) {
            session.selected_element = Some(second);
        } else if session.selected_element == Some(second) {
            session.selected_element = Some(first);
        }
        state.refresh_inspector();
    }

    log::info!(
        "Elemente {} und {} auf ({}, {}) getauscht",
        first,
        second,
        coord.x,
        coord.y
    );
    Ok(())
}
