//! Use-Case: Unter- und Oberkante eines einzelnen Elements verschieben.

use crate::app::events::CommandMode;
use crate::app::use_cases::{checked_height, finish_tile_edit, require_element};
use crate::app::InspectorState;
use crate::error::CommandResult;
use glam::IVec2;

/// Verschiebt beide Höhen von Element `index` um `offset`.
pub fn any_base_height_offset(
    state: &mut InspectorState,
    coord: IVec2,
    index: usize,
    offset: i8,
    mode: CommandMode,
) -> CommandResult {
    let element = require_element(&state.map, coord, index)?;
    let base = checked_height(i32::from(element.base_height) + i32::from(offset))?;
    let clearance = checked_height(i32::from(element.clearance_height) + i32::from(offset))?;
    if !mode.is_apply() {
        return Ok(());
    }

    if let Some(element) = state.map.element_mut(coord, index) {
        element.base_height = base;
        element.clearance_height = clearance;
    }
    finish_tile_edit(state, coord);

    log::info!(
        "Element {} auf ({}, {}) um {} verschoben",
        index,
        coord.x,
        coord.y,
        offset
    );
    Ok(())
}
