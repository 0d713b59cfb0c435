//! Use-Case: Defektes Element unter ein bestehendes Element schieben.

use crate::app::events::CommandMode;
use crate::app::state::InspectorPage;
use crate::app::use_cases::require_element;
use crate::app::InspectorState;
use crate::core::MapElement;
use crate::error::{CommandResult, InspectorError};
use glam::IVec2;

/// Fügt ein defektes Element direkt unter Element `index` ein.
///
/// Das neue Element übernimmt die Unterkante des Ziels und landet auf Position
/// `index`; das Ziel und alle darüber rücken um eins nach oben. Auch bei
/// gleicher Höhe mehrerer Elemente trifft es damit genau das gewählte.
pub fn insert_corrupt_element(
    state: &mut InspectorState,
    coord: IVec2,
    index: usize,
    mode: CommandMode,
) -> CommandResult {
    let base_height = require_element(&state.map, coord, index)?.base_height;
    if !state.map.can_fit(1) {
        log::warn!("Defektes Element abgelehnt: Element-Speicher voll");
        return Err(InspectorError::OutOfSpace);
    }
    if !mode.is_apply() {
        log::debug!("Defektes Element auf ({}, {}) geprüft", coord.x, coord.y);
        return Ok(());
    }

    if !state.map.ensure_free_elements(1) {
        return Err(InspectorError::OutOfSpace);
    }
    let last = state
        .map
        .push_element(coord, MapElement::corrupt(base_height))
        .ok_or(InspectorError::OutOfSpace)?;
    for i in (index + 1..=last).rev() {
        state.map.swap_elements(coord, i - 1, i);
    }
    state.invalidation.invalidate_tile(coord);

    if state.is_inspecting(coord) {
        let session = &mut state.session;
        session.element_count += 1;
        match session.selected_element {
            Some(selected) if selected > index => session.selected_element = Some(selected + 1),
            Some(selected) if selected == index => session.set_page(InspectorPage::Corrupt),
            _ => {}
        }
        state.refresh_inspector();
    }

    log::info!(
        "Defektes Element auf ({}, {}) an Position {} eingefügt",
        coord.x,
        coord.y,
        index
    );
    Ok(())
}
