//! Use-Case: Element um 90° drehen.

use crate::app::events::CommandMode;
use crate::app::use_cases::{finish_tile_edit, require_element};
use crate::app::InspectorState;
use crate::core::element::DIRECTION_MASK;
use crate::core::{rotate_nibble, ElementData, MapElement};
use crate::error::CommandResult;
use glam::IVec2;

/// Dreht ein Element in-place. Arten ohne Drehung bleiben unverändert.
fn rotate_in_place(element: &mut MapElement) -> bool {
    match &mut element.data {
        ElementData::Path(path) => {
            if path.sloped {
                path.slope_direction = path.slope_direction.wrapping_add(1) & DIRECTION_MASK;
            }
            // Kanten und Ecken rotieren getrennt als eigene 4-Bit-Ringe
            let edges = rotate_nibble(path.edge_mask());
            let corners = rotate_nibble(path.corner_mask());
            path.edges = edges | (corners << 4);
            true
        }
        ElementData::Track(_)
        | ElementData::Scenery(_)
        | ElementData::Entrance(_)
        | ElementData::Fence(_) => {
            element.direction = element.direction.wrapping_add(1) & DIRECTION_MASK;
            true
        }
        ElementData::Banner(banner) => {
            banner.flags ^= 1 << (banner.position & DIRECTION_MASK);
            banner.position = banner.position.wrapping_add(1) & DIRECTION_MASK;
            banner.flags ^= 1 << banner.position;
            true
        }
        ElementData::Surface(_) | ElementData::Corrupt => false,
    }
}

/// Dreht Element `index` um eine Vierteldrehung.
pub fn rotate_element(
    state: &mut InspectorState,
    coord: IVec2,
    index: usize,
    mode: CommandMode,
) -> CommandResult {
    require_element(&state.map, coord, index)?;
    if !mode.is_apply() {
        return Ok(());
    }

    let Some(element) = state.map.element_mut(coord, index) else {
        return Ok(());
    };
    if !rotate_in_place(element) {
        log::debug!("{:?}-Element lässt sich nicht drehen", element.kind());
        return Ok(());
    }
    log::info!(
        "{:?}-Element {} auf ({}, {}) gedreht",
        element.kind(),
        index,
        coord.x,
        coord.y
    );
    finish_tile_edit(state, coord);
    Ok(())
}
