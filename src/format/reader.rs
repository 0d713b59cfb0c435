//! Reader für das binäre Kartenformat.

use super::{FORMAT_VERSION, HEADER_SIZE, MAGIC};
use crate::core::{PackedElement, TileMap, PACKED_ELEMENT_SIZE};
use anyhow::{bail, ensure, Context, Result};
use std::path::Path;

/// Obergrenze für die Kapazität aus dem Header
const MAX_CAPACITY: usize = 1 << 24;

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Liest eine Karte aus Bytes und prüft dabei die Tile-Ende-Flags.
pub fn read_map(bytes: &[u8]) -> Result<TileMap> {
    ensure!(bytes.len() >= HEADER_SIZE, "Datei zu kurz für den Header");
    ensure!(&bytes[0..4] == MAGIC, "Keine Kartendatei (Magic fehlt)");
    let version = read_u16(bytes, 4);
    ensure!(
        version == FORMAT_VERSION,
        "Nicht unterstützte Format-Version {}",
        version
    );
    let size = read_u16(bytes, 6);
    let capacity = read_u32(bytes, 8) as usize;
    let count = read_u32(bytes, 12) as usize;
    ensure!(
        capacity <= MAX_CAPACITY && count <= MAX_CAPACITY,
        "Kapazität {} oder Elementanzahl {} zu groß",
        capacity,
        count
    );
    let tile_count = usize::from(size) * usize::from(size);
    ensure!(
        tile_count <= count,
        "Karte {}x{} braucht mindestens {} Elemente, Header nennt {}",
        size,
        size,
        tile_count,
        count
    );

    let body = &bytes[HEADER_SIZE..];
    ensure!(
        body.len() == count * PACKED_ELEMENT_SIZE,
        "Elementdaten: {} Bytes erwartet, {} gefunden",
        count * PACKED_ELEMENT_SIZE,
        body.len()
    );

    let mut map = TileMap::empty(size, capacity.max(count));
    let mut packed = body.chunks_exact(PACKED_ELEMENT_SIZE).enumerate();
    let coords: Vec<_> = map.coords().collect();
    let mut tile_elements = Vec::new();

    for coord in coords {
        tile_elements.clear();
        loop {
            let Some((position, chunk)) = packed.next() else {
                bail!(
                    "Elementdaten enden vor dem Ende von Tile ({}, {})",
                    coord.x,
                    coord.y
                );
            };
            let mut raw = [0u8; PACKED_ELEMENT_SIZE];
            raw.copy_from_slice(chunk);
            let element = PackedElement(raw);
            tile_elements.push(
                element
                    .decode()
                    .with_context(|| format!("Element {} nicht lesbar", position))?,
            );
            if element.is_last_for_tile() {
                break;
            }
        }
        if !map.set_tile_elements(coord, &tile_elements) {
            bail!("Kein Platz für Tile ({}, {})", coord.x, coord.y);
        }
    }

    if let Some((position, _)) = packed.next() {
        bail!("Überzählige Elemente ab Position {}", position);
    }

    log::info!(
        "Karte {}x{} mit {} Elementen gelesen",
        size,
        size,
        map.total_elements()
    );
    Ok(map)
}

/// Lädt eine Karte aus einer Datei.
pub fn load_map_file(path: &Path) -> Result<TileMap> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Karte nicht lesbar: {}", path.display()))?;
    read_map(&bytes).with_context(|| format!("Fehler beim Lesen von {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ElementData, FenceData, MapElement};
    use crate::format::write_map;
    use glam::IVec2;

    #[test]
    fn test_roundtrip_keeps_tile_contents() {
        let mut map = TileMap::new(3, 32, 14);
        let coord = IVec2::new(2, 1);
        let fence = ElementData::Fence(FenceData {
            fence_type: 5,
            slope: 2,
        });
        map.insert_element(coord, MapElement::new(20, 24, fence).with_direction(3));

        let bytes = write_map(&map).expect("Schreiben sollte klappen");
        let loaded = read_map(&bytes).expect("Lesen sollte klappen");

        assert_eq!(loaded.size(), 3);
        for c in map.coords() {
            assert_eq!(loaded.tile_elements(c), map.tile_elements(c));
        }
    }

    #[test]
    fn test_missing_terminal_flag_is_rejected() {
        let map = TileMap::new(1, 4, 14);
        let mut bytes = write_map(&map).expect("Schreiben sollte klappen");
        // Flag-Byte des einzigen Elements
        bytes[HEADER_SIZE + 1] &= !crate::core::FLAG_LAST_TILE;
        let err = read_map(&bytes).expect_err("fehlendes Tile-Ende muss auffallen");
        assert!(format!("{err:#}").contains("enden vor dem Ende"));
    }

    #[test]
    fn test_wrong_magic_is_rejected() {
        let mut bytes = write_map(&TileMap::new(1, 4, 14)).expect("Schreiben sollte klappen");
        bytes[0] = b'X';
        assert!(read_map(&bytes).is_err());
    }

    #[test]
    fn test_oversized_header_is_rejected() {
        let mut bytes = Vec::from(*MAGIC);
        bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        bytes.extend_from_slice(&u16::MAX.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());

        let err = read_map(&bytes).expect_err("zu große Karte muss abgelehnt werden");
        assert!(format!("{err:#}").contains("braucht mindestens"));
    }
}
