//! Auflösung mehrteiliger Schienenstücke.
//!
//! Ein Track-Element kennt nur seinen eigenen Sequenz-Index. Aus der Vorlage
//! des Stücks wird der Ursprung zurückgerechnet und von dort jedes Teil wieder
//! vorwärts platziert. Gefunden wird ein Teil über seine Lage (Höhe, Art,
//! Richtung, Sequenz, Stück-Typ), nicht über eine Identität.

use super::track_template::TrackTemplateProvider;
use super::{MapElement, TileMap};
use crate::error::InspectorError;
use glam::IVec2;

/// Ein gefundenes Teil eines Schienenstücks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackPart {
    /// Tile des Teils
    pub coord: IVec2,
    /// Tile-lokaler Element-Index
    pub index: usize,
    /// Sequenz-Index laut Vorlage
    pub sequence: u8,
}

/// Dreht einen Vorlagen-Offset in die Richtung des Stücks.
///
/// Dieselbe Tabelle gilt für die Rückrechnung zum Ursprung und für die
/// Platzierung der Teile.
pub fn rotate_offset(offset: IVec2, direction: u8) -> IVec2 {
    match direction & 0b11 {
        0 => offset,
        1 => IVec2::new(offset.y, -offset.x),
        2 => IVec2::new(-offset.x, -offset.y),
        _ => IVec2::new(-offset.y, offset.x),
    }
}

fn matches_part(
    element: &MapElement,
    z: i32,
    direction: u8,
    sequence: u8,
    track_type: u8,
) -> bool {
    if i32::from(element.base_height) != z || element.direction != direction {
        return false;
    }
    element
        .as_track()
        .is_some_and(|t| t.sequence == sequence && t.track_type == track_type)
}

/// Findet alle Teile des Schienenstücks, zu dem Element `index` auf `coord` gehört.
///
/// Die Teile kommen in Vorlagen-Reihenfolge zurück. Fehlt ein Teil, schlägt
/// die gesamte Suche fehl; die Karte wird dabei nie verändert.
pub fn locate_track_piece(
    map: &TileMap,
    templates: &dyn TrackTemplateProvider,
    coord: IVec2,
    index: usize,
) -> Result<Vec<TrackPart>, InspectorError> {
    let element = map
        .element(coord, index)
        .ok_or(InspectorError::ElementNotFound { coord, index })?;
    let track = element.as_track().ok_or(InspectorError::WrongElementKind {
        coord,
        index,
        expected: "Track",
    })?;

    let unknown = InspectorError::UnknownTrackPiece {
        ride_index: track.ride_index,
        track_type: track.track_type,
        sequence: track.sequence,
    };
    let template = templates
        .track_template(track.ride_index, track.track_type)
        .ok_or_else(|| unknown.clone())?;
    let own_block = template
        .get(usize::from(track.sequence))
        .ok_or(unknown)?;

    let direction = element.direction;
    let origin = coord - rotate_offset(own_block.offset, direction);
    let origin_z = i32::from(element.base_height) - i32::from(own_block.z);

    let mut parts = Vec::with_capacity(template.len());
    for block in template {
        let part_coord = origin + rotate_offset(block.offset, direction);
        let part_z = origin_z + i32::from(block.z);

        let found = map.tile_elements(part_coord).and_then(|elements| {
            elements.iter().position(|e| {
                matches_part(e, part_z, direction, block.index, track.track_type)
            })
        });

        let Some(part_index) = found else {
            log::error!(
                "Track-Teil {} von Stück {} nicht gefunden (Tile ({}, {}), Höhe {})",
                block.index,
                track.track_type,
                part_coord.x,
                part_coord.y,
                part_z
            );
            return Err(InspectorError::TrackPartNotFound {
                coord: part_coord,
                sequence: block.index,
            });
        };

        parts.push(TrackPart {
            coord: part_coord,
            index: part_index,
            sequence: block.index,
        });
    }

    Ok(parts)
}
