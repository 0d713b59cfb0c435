//! Use-Cases für die Geländeoberfläche eines Tiles.
//!
//! Alle Operationen wirken auf das erste Oberflächen-Element des Tiles.

use super::{checked_height, finish_tile_edit, require_tile};
use crate::app::events::CommandMode;
use crate::app::InspectorState;
use crate::core::{update_park_fences, SurfaceData, TileMap};
use crate::error::{CommandResult, InspectorError};
use glam::IVec2;

const ALL_CORNERS: u8 = 0b1111;

fn surface_at(map: &TileMap, coord: IVec2) -> Result<(usize, SurfaceData, u8), InspectorError> {
    require_tile(map, coord)?;
    let index = map
        .surface_index(coord)
        .ok_or(InspectorError::NoSurface(coord))?;
    let element = map
        .element(coord, index)
        .ok_or(InspectorError::NoSurface(coord))?;
    let surface = element
        .as_surface()
        .copied()
        .ok_or(InspectorError::NoSurface(coord))?;
    Ok((index, surface, element.base_height))
}

fn write_surface(
    state: &mut InspectorState,
    coord: IVec2,
    index: usize,
    surface: SurfaceData,
    heights: Option<(u8, u8)>,
) {
    let Some(element) = state.map.element_mut(coord, index) else {
        return;
    };
    if let Some((base, clearance)) = heights {
        element.base_height = base;
        element.clearance_height = clearance;
    }
    if let Some(target) = element.as_surface_mut() {
        *target = surface;
    }
}

/// Einzelne abgesenkte Ecke, die nach dem Anheben einer Diagonal-Ecke übrig bleibt
fn diagonal_remainder(corners: u8) -> u8 {
    match corners & ALL_CORNERS {
        0b1011 => 1 << 0,
        0b0111 => 1 << 1,
        0b1110 => 1 << 2,
        0b1101 => 1 << 3,
        _ => 0,
    }
}

/// Blendet die Parkzäune der Oberfläche aus oder berechnet sie aus der Parkgrenze neu.
pub fn surface_show_park_fences(
    state: &mut InspectorState,
    coord: IVec2,
    show: bool,
    mode: CommandMode,
) -> CommandResult {
    let (index, mut surface, _) = surface_at(&state.map, coord)?;
    if !mode.is_apply() {
        return Ok(());
    }

    if show {
        update_park_fences(&mut state.map, coord);
    } else {
        surface.park_fences = 0;
        write_surface(state, coord, index, surface, None);
    }
    finish_tile_edit(state, coord);
    let mask = surface_at(&state.map, coord).map_or(0, |(_, s, _)| s.park_fences);

    log::info!(
        "Parkzäune auf ({}, {}) {} (Maske {:04b})",
        coord.x,
        coord.y,
        if show { "eingeblendet" } else { "ausgeblendet" },
        mask
    );
    Ok(())
}

/// Hebt oder senkt eine Ecke der Oberfläche.
///
/// Sind danach alle vier Ecken oben, wird die Oberfläche stattdessen um eine
/// Stufe angehoben und wieder flach. War sie diagonal, bleibt die gegenüberliegende
/// Ecke als einzelne Hebung stehen.
pub fn surface_toggle_corner(
    state: &mut InspectorState,
    coord: IVec2,
    corner: u8,
    mode: CommandMode,
) -> CommandResult {
    if corner > 3 {
        return Err(InspectorError::InvalidArgument {
            name: "corner",
            value: i32::from(corner),
        });
    }
    let (index, original, base) = surface_at(&state.map, coord)?;

    let mut surface = original;
    let mut new_base = i32::from(base);
    surface.corners = (surface.corners ^ (1 << corner)) & ALL_CORNERS;
    let mut new_clearance = if surface.corners != 0 {
        new_base + 2
    } else {
        new_base
    };
    if surface.corners == ALL_CORNERS {
        surface.corners = if original.diagonal {
            diagonal_remainder(original.corners)
        } else {
            0
        };
        surface.diagonal = false;
        new_base += 2;
        new_clearance = new_base + if original.diagonal { 2 } else { 0 };
    }
    let heights = (checked_height(new_base)?, checked_height(new_clearance)?);
    if !mode.is_apply() {
        return Ok(());
    }

    write_surface(state, coord, index, surface, Some(heights));
    finish_tile_edit(state, coord);

    log::info!(
        "Ecke {} auf ({}, {}) umgeschaltet: Ecken {:04b}, Höhe {}..{}",
        corner,
        coord.x,
        coord.y,
        surface.corners,
        heights.0,
        heights.1
    );
    Ok(())
}

/// Schaltet den steilen Diagonal-Hang der Oberfläche um.
pub fn surface_toggle_diagonal(
    state: &mut InspectorState,
    coord: IVec2,
    mode: CommandMode,
) -> CommandResult {
    let (index, mut surface, base) = surface_at(&state.map, coord)?;

    surface.diagonal = !surface.diagonal;
    let raise = if surface.diagonal {
        4
    } else if surface.corners & ALL_CORNERS != 0 {
        2
    } else {
        0
    };
    let clearance = checked_height(i32::from(base) + raise)?;
    if !mode.is_apply() {
        return Ok(());
    }

    write_surface(state, coord, index, surface, Some((base, clearance)));
    finish_tile_edit(state, coord);

    log::info!(
        "Diagonale auf ({}, {}) {}",
        coord.x,
        coord.y,
        if surface.diagonal { "gesetzt" } else { "entfernt" }
    );
    Ok(())
}
