//! Use-Case: Neigung eines Zauns setzen.

use super::{finish_tile_edit, require_kind};
use crate::app::events::CommandMode;
use crate::app::InspectorState;
use crate::core::ElementKind;
use crate::error::{CommandResult, InspectorError};
use glam::IVec2;

/// Überschreibt die 2-Bit-Neigung eines Zauns.
pub fn fence_set_slope(
    state: &mut InspectorState,
    coord: IVec2,
    index: usize,
    slope: u8,
    mode: CommandMode,
) -> CommandResult {
    require_kind(&state.map, coord, index, ElementKind::Fence, "Zaun")?;
    if slope > 3 {
        return Err(InspectorError::InvalidArgument {
            name: "slope",
            value: i32::from(slope),
        });
    }
    if !mode.is_apply() {
        return Ok(());
    }

    if let Some(fence) = state
        .map
        .element_mut(coord, index)
        .and_then(|e| e.as_fence_mut())
    {
        fence.slope = slope;
    }
    finish_tile_edit(state, coord);
    log::info!(
        "Zaun {} auf ({}, {}) Neigung {}",
        index,
        coord.x,
        coord.y,
        slope
    );
    Ok(())
}
