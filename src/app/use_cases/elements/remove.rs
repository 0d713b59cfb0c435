//! Use-Case: Element ohne weitere Prüfung vom Tile entfernen.

use crate::app::events::CommandMode;
use crate::app::state::InspectorPage;
use crate::app::use_cases::require_element;
use crate::app::InspectorState;
use crate::error::{CommandResult, InspectorError};
use glam::IVec2;

/// Entfernt Element `index`; geprüft wird nur, dass es existiert.
pub fn remove_element(
    state: &mut InspectorState,
    coord: IVec2,
    index: usize,
    mode: CommandMode,
) -> CommandResult {
    require_element(&state.map, coord, index)?;
    if !mode.is_apply() {
        return Ok(());
    }

    let removed = state
        .map
        .remove_element(coord, index)
        .ok_or(InspectorError::ElementNotFound { coord, index })?;
    state.invalidation.invalidate_tile(coord);

    if state.is_inspecting(coord) {
        let session = &mut state.session;
        session.element_count = session.element_count.saturating_sub(1);
        match session.selected_element {
            Some(selected) if selected > index => session.selected_element = Some(selected - 1),
            Some(selected) if selected == index => {
                session.selected_element = None;
                session.set_page(InspectorPage::Default);
            }
            _ => {}
        }
        state.refresh_inspector();
    }

    log::info!(
        "{:?}-Element {} von ({}, {}) entfernt",
        removed.kind(),
        index,
        coord.x,
        coord.y
    );
    Ok(())
}
