//! Parkgrenze: Zäune entstehen an Kanten eines Fremd-Tiles zu Park-Tiles.

use super::{ElementKind, TileMap};
use glam::IVec2;

/// Nachbar-Offsets in Bit-Reihenfolge der Zaun-Maske (−x, +y, +x, −y)
const NEIGHBOURS: [IVec2; 4] = [
    IVec2::new(-1, 0),
    IVec2::new(0, 1),
    IVec2::new(1, 0),
    IVec2::new(0, -1),
];

fn is_owned(map: &TileMap, coord: IVec2) -> bool {
    map.surface_index(coord)
        .and_then(|i| map.element(coord, i))
        .and_then(|e| e.as_surface())
        .is_some_and(|s| s.is_owned())
}

/// Berechnet die Parkzaun-Maske eines Tiles aus dem Besitz der vier Nachbarn.
///
/// Park-Tiles selbst und Tiles mit Eingang bekommen keinen Zaun.
pub fn park_fence_mask(map: &TileMap, coord: IVec2) -> u8 {
    let Some(elements) = map.tile_elements(coord) else {
        return 0;
    };
    if is_owned(map, coord) || elements.iter().any(|e| e.kind() == ElementKind::Entrance) {
        return 0;
    }

    NEIGHBOURS
        .iter()
        .enumerate()
        .filter(|(_, offset)| is_owned(map, coord + **offset))
        .fold(0, |mask, (bit, _)| mask | (1 << bit))
}

/// Schreibt die berechnete Zaun-Maske in die Oberfläche des Tiles.
///
/// Gibt `false` zurück, wenn das Tile keine Oberfläche hat.
pub fn update_park_fences(map: &mut TileMap, coord: IVec2) -> bool {
    let mask = park_fence_mask(map, coord);
    let Some(index) = map.surface_index(coord) else {
        return false;
    };
    match map.element_mut(coord, index).and_then(|e| e.as_surface_mut()) {
        Some(surface) => {
            surface.park_fences = mask;
            true
        }
        None => false,
    }
}
