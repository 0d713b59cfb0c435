use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::IVec2;
use std::hint::black_box;
use tile_inspector::{
    read_map, write_map, CommandMode, ElementData, FenceData, InspectorCommand,
    InspectorController, InspectorOptions, InspectorState, MapElement, TileMap,
};

fn fence(base: u8) -> MapElement {
    MapElement::new(base, base + 2, ElementData::Fence(FenceData::default()))
}

/// Karte, auf der ein Tile `stack` Elemente in absteigender Höhe trägt
fn build_reversed_stack(stack: usize) -> (TileMap, IVec2) {
    let mut map = TileMap::new(16, 4096, 2);
    let coord = IVec2::new(7, 7);
    let elements: Vec<MapElement> = (0..stack)
        .map(|i| fence(250u8.saturating_sub(i as u8)))
        .collect();
    map.set_tile_elements(coord, &elements);
    (map, coord)
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_elements");

    for &stack in &[8usize, 32, 128] {
        let (map, coord) = build_reversed_stack(stack);
        group.bench_with_input(BenchmarkId::new("reversed", stack), &map, |b, map| {
            let mut controller = InspectorController::new();
            b.iter(|| {
                let mut state = InspectorState::with_map(map.clone(), InspectorOptions::default());
                controller
                    .execute(
                        &mut state,
                        InspectorCommand::SortElements { coord },
                        CommandMode::Apply,
                    )
                    .expect("Sortieren fehlgeschlagen");
                black_box(state.map.element_count(coord))
            })
        });
    }

    group.finish();
}

fn bench_insert_remove(c: &mut Criterion) {
    let mut map = TileMap::new(64, 64 * 64 * 3, 14);
    let coords: Vec<IVec2> = map.coords().collect();
    for coord in &coords {
        map.insert_element(*coord, fence(20));
    }

    c.bench_function("paste_then_remove_all_tiles", |b| {
        let mut controller = InspectorController::new();
        b.iter(|| {
            let mut state = InspectorState::with_map(map.clone(), InspectorOptions::default());
            for coord in &coords {
                controller
                    .execute(
                        &mut state,
                        InspectorCommand::PasteElement {
                            coord: *coord,
                            element: fence(16),
                        },
                        CommandMode::Apply,
                    )
                    .expect("Einfügen fehlgeschlagen");
            }
            for coord in &coords {
                controller
                    .execute(
                        &mut state,
                        InspectorCommand::RemoveElement {
                            coord: *coord,
                            index: 1,
                        },
                        CommandMode::Apply,
                    )
                    .expect("Entfernen fehlgeschlagen");
            }
            black_box(state.map.total_elements())
        })
    });
}

fn bench_map_codec(c: &mut Criterion) {
    let mut map = TileMap::new(128, 128 * 128 * 2, 14);
    let coords: Vec<IVec2> = map.coords().collect();
    for coord in coords {
        map.insert_element(coord, fence(18));
    }
    let bytes = write_map(&map).expect("Schreiben fehlgeschlagen");

    c.bench_function("write_map_128", |b| {
        b.iter(|| black_box(write_map(black_box(&map)).map(|v| v.len())))
    });
    c.bench_function("read_map_128", |b| {
        b.iter(|| black_box(read_map(black_box(&bytes)).map(|m| m.total_elements())))
    });
}

criterion_group!(core_benches, bench_sort, bench_insert_remove, bench_map_codec);
criterion_main!(core_benches);
