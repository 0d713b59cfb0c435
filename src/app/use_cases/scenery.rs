//! Use-Case: Viertel-Platz einer kleinen Szenerie setzen.

use super::{finish_tile_edit, require_kind};
use crate::app::events::CommandMode;
use crate::app::InspectorState;
use crate::core::element::{DIRECTION_MASK, NIBBLE_MASK};
use crate::core::ElementKind;
use crate::error::{CommandResult, InspectorError};
use glam::IVec2;

/// Setzt den Viertel-Platz und passt die Kollisionsmaske an.
///
/// Die Kollisionsmaske liegt um zwei Viertel versetzt zum Viertel-Index.
pub fn scenery_set_quarter_location(
    state: &mut InspectorState,
    coord: IVec2,
    index: usize,
    quadrant: u8,
    mode: CommandMode,
) -> CommandResult {
    require_kind(&state.map, coord, index, ElementKind::Scenery, "Szenerie")?;
    if quadrant > 3 {
        return Err(InspectorError::InvalidArgument {
            name: "quadrant",
            value: i32::from(quadrant),
        });
    }
    if !mode.is_apply() {
        return Ok(());
    }

    if let Some(element) = state.map.element_mut(coord, index) {
        element.occupied_quadrants = (1 << ((quadrant + 2) & DIRECTION_MASK)) & NIBBLE_MASK;
        if let Some(scenery) = element.as_scenery_mut() {
            scenery.quadrant = quadrant;
        }
    }
    finish_tile_edit(state, coord);
    log::info!(
        "Szenerie {} auf ({}, {}) in Viertel {} verschoben",
        index,
        coord.x,
        coord.y,
        quadrant
    );
    Ok(())
}
