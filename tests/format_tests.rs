use glam::IVec2;
use tile_inspector::{
    load_map_file, read_map, save_map_file, write_map, BannerData, ElementData, MapElement,
    PathData, SurfaceData, TileMap, TrackData,
};

fn sample_map() -> TileMap {
    let mut map = TileMap::new(4, 64, 14);
    let coord = IVec2::new(1, 2);
    map.insert_element(
        coord,
        MapElement::new(
            16,
            18,
            ElementData::Path(PathData {
                path_type: 3,
                sloped: true,
                slope_direction: 2,
                edges: 0b1010_0101,
            }),
        ),
    )
    .expect("Platz vorhanden");
    map.insert_element(
        coord,
        MapElement::new(
            20,
            24,
            ElementData::Track(TrackData {
                ride_index: 7,
                track_type: 42,
                sequence: 2,
                chain_lift: true,
            }),
        )
        .with_direction(3),
    )
    .expect("Platz vorhanden");
    map.insert_element(
        IVec2::new(3, 3),
        MapElement::new(
            18,
            20,
            ElementData::Banner(BannerData {
                banner_index: 9,
                position: 1,
                flags: 0b0010,
            }),
        ),
    )
    .expect("Platz vorhanden");
    if let Some(surface) = map
        .element_mut(IVec2::new(0, 0), 0)
        .and_then(|e| e.as_surface_mut())
    {
        surface.ownership = SurfaceData::OWNERSHIP_OWNED;
        surface.corners = 0b0101;
    }
    map
}

fn assert_same_tiles(a: &TileMap, b: &TileMap) {
    assert_eq!(a.size(), b.size());
    for coord in a.coords() {
        assert_eq!(
            a.tile_elements(coord),
            b.tile_elements(coord),
            "Tile ({}, {}) unterscheidet sich",
            coord.x,
            coord.y
        );
    }
}

#[test]
fn test_map_survives_write_and_read() {
    let map = sample_map();
    let bytes = write_map(&map).expect("Schreiben sollte klappen");
    let loaded = read_map(&bytes).expect("Lesen sollte klappen");

    assert_same_tiles(&map, &loaded);
    assert_eq!(loaded.capacity(), map.capacity());
}

#[test]
fn test_map_file_roundtrip() {
    let map = sample_map();
    let path = std::env::temp_dir().join(format!(
        "tile_inspector_roundtrip_{}.timp",
        std::process::id()
    ));

    save_map_file(&path, &map).expect("Speichern sollte klappen");
    let loaded = load_map_file(&path).expect("Laden sollte klappen");
    let _ = std::fs::remove_file(&path);

    assert_same_tiles(&map, &loaded);
}

#[test]
fn test_truncated_data_is_rejected() {
    let bytes = write_map(&sample_map()).expect("Schreiben sollte klappen");
    assert!(read_map(&bytes[..bytes.len() - 3]).is_err());
    assert!(read_map(&bytes[..8]).is_err());
}

#[test]
fn test_writing_tile_without_elements_fails() {
    let mut map = TileMap::new(2, 16, 14);
    map.remove_element(IVec2::new(1, 1), 0)
        .expect("Oberfläche entfernbar");
    assert!(write_map(&map).is_err());
}

#[test]
fn test_load_missing_file_fails() {
    let path = std::env::temp_dir().join("tile_inspector_gibt_es_nicht.timp");
    assert!(load_map_file(&path).is_err());
}
