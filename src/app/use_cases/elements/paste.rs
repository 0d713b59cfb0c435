//! Use-Case: Kopiertes Element auf einem Tile einfügen.

use crate::app::events::CommandMode;
use crate::app::state::InspectorPage;
use crate::app::use_cases::require_tile;
use crate::app::InspectorState;
use crate::core::MapElement;
use crate::error::{CommandResult, InspectorError};
use glam::IVec2;

/// Fügt `element` unverändert höhensortiert in den Stapel ein.
///
/// Zeigt der Inspector das Tile und ist nichts selektiert, wird das neue
/// Element selektiert.
pub fn paste_element(
    state: &mut InspectorState,
    coord: IVec2,
    element: MapElement,
    mode: CommandMode,
) -> CommandResult {
    require_tile(&state.map, coord)?;
    if !state.map.can_fit(1) {
        log::warn!("Einfügen abgelehnt: Element-Speicher voll");
        return Err(InspectorError::OutOfSpace);
    }
    if !mode.is_apply() {
        return Ok(());
    }

    if !state.map.ensure_free_elements(1) {
        return Err(InspectorError::OutOfSpace);
    }
    let new_index = state
        .map
        .insert_element(coord, element)
        .ok_or(InspectorError::OutOfSpace)?;
    state.invalidation.invalidate_tile(coord);

    if state.is_inspecting(coord) {
        let session = &mut state.session;
        session.element_count += 1;
        match session.selected_element {
            None => {
                session.selected_element = Some(new_index);
                session.set_page(InspectorPage::for_kind(element.kind()));
            }
            Some(selected) if selected >= new_index => {
                session.selected_element = Some(selected + 1);
            }
            Some(_) => {}
        }
        state.refresh_inspector();
    }

    log::info!(
        "{:?}-Element auf ({}, {}) an Position {} eingefügt",
        element.kind(),
        coord.x,
        coord.y,
        new_index
    );
    Ok(())
}
