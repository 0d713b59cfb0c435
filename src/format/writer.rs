//! Writer für das binäre Kartenformat.

use super::{FORMAT_VERSION, HEADER_SIZE, MAGIC};
use crate::core::{pack_tile, TileMap, PACKED_ELEMENT_SIZE};
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Serialisiert die Karte; Lücken im Element-Speicher werden dabei nicht geschrieben.
pub fn write_map(map: &TileMap) -> Result<Vec<u8>> {
    let total = map.total_elements();
    let size = u16::try_from(map.size()).context("Kantenlänge passt nicht in u16")?;
    let capacity = u32::try_from(map.capacity()).context("Kapazität passt nicht in u32")?;
    let count = u32::try_from(total).context("Elementanzahl passt nicht in u32")?;

    let mut output = Vec::with_capacity(HEADER_SIZE + total * PACKED_ELEMENT_SIZE);
    output.extend_from_slice(MAGIC);
    output.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    output.extend_from_slice(&size.to_le_bytes());
    output.extend_from_slice(&capacity.to_le_bytes());
    output.extend_from_slice(&count.to_le_bytes());

    for coord in map.coords() {
        let elements = map.tile_elements(coord).unwrap_or_default();
        if elements.is_empty() {
            bail!(
                "Tile ({}, {}) hat keine Elemente und ist nicht speicherbar",
                coord.x,
                coord.y
            );
        }
        for packed in pack_tile(elements) {
            output.extend_from_slice(&packed.0);
        }
    }

    log::debug!("{} Elemente in {} Bytes gepackt", total, output.len());
    Ok(output)
}

/// Schreibt die Karte in eine Datei.
pub fn save_map_file(path: &Path, map: &TileMap) -> Result<()> {
    let bytes = write_map(map)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Karte nicht schreibbar: {}", path.display()))?;
    log::info!("Karte gespeichert nach: {}", path.display());
    Ok(())
}
