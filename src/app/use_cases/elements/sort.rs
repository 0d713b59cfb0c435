//! Use-Case: Element-Stapel nach Höhe sortieren.

use crate::app::events::CommandMode;
use crate::app::state::InspectorPage;
use crate::app::use_cases::require_tile;
use crate::app::InspectorState;
use crate::core::TileMap;
use crate::error::CommandResult;
use glam::IVec2;

fn height_key(map: &TileMap, coord: IVec2, index: usize) -> (u8, u8) {
    map.element(coord, index)
        .map_or((0, 0), |element| element.height_key())
}

/// Sortiert die Elemente stabil nach (Unterkante, Oberkante).
///
/// Sortiert wird per Einfügesortierung über benachbarte Tausche; gleiche
/// Schlüssel behalten ihre Reihenfolge.
pub fn sort_elements(state: &mut InspectorState, coord: IVec2, mode: CommandMode) -> CommandResult {
    require_tile(&state.map, coord)?;
    if !mode.is_apply() {
        return Ok(());
    }

    let count = state.map.element_count(coord);
    let mut swaps = 0usize;
    for start in 1..count {
        let mut current = start;
        while current > 0
            && height_key(&state.map, coord, current - 1) > height_key(&state.map, coord, current)
        {
            state.map.swap_elements(coord, current - 1, current);
            current -= 1;
            swaps += 1;
        }
    }
    state.invalidation.invalidate_tile(coord);

    if state.is_inspecting(coord) {
        state.session.selected_element = None;
        state.session.set_page(InspectorPage::Default);
        state.refresh_inspector();
    }

    log::info!(
        "{} Elemente auf ({}, {}) sortiert ({} Tausche)",
        count,
        coord.x,
        coord.y,
        swaps
    );
    Ok(())
}
