use glam::IVec2;
use tile_inspector::{
    CommandMode, ElementData, ElementKind, FenceData, InspectorCommand, InspectorController,
    InspectorError, InspectorOptions, InspectorPage, InspectorState, InvalidationSink, MapElement,
    TileMap, WindowClass,
};

fn make_state() -> InspectorState {
    let mut map = TileMap::new(8, 256, 14);
    let coord = IVec2::new(2, 3);
    for base in [16, 20] {
        map.insert_element(
            coord,
            MapElement::new(base, base + 4, ElementData::Fence(FenceData::default())),
        )
        .expect("Platz vorhanden");
    }
    InspectorState::with_map(map, InspectorOptions::default())
}

const COORD: IVec2 = IVec2::new(2, 3);

#[derive(Default)]
struct Recorder {
    tiles: Vec<IVec2>,
    windows: Vec<WindowClass>,
}

impl InvalidationSink for Recorder {
    fn invalidate_tile(&mut self, coord: IVec2) {
        self.tiles.push(coord);
    }

    fn invalidate_window_class(&mut self, class: WindowClass) {
        self.windows.push(class);
    }
}

#[test]
fn test_apply_records_command_and_invalidates() {
    let mut controller = InspectorController::new();
    let mut state = make_state();

    controller
        .execute(
            &mut state,
            InspectorCommand::RotateElement {
                coord: COORD,
                index: 1,
            },
            CommandMode::Apply,
        )
        .expect("Drehen sollte ohne Fehler durchlaufen");

    assert_eq!(state.map.element(COORD, 1).map(|e| e.direction), Some(1));
    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        InspectorCommand::RotateElement { coord, index } => {
            assert_eq!((*coord, *index), (COORD, 1));
        }
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }

    let mut recorder = Recorder::default();
    state.invalidation.flush(&mut recorder);
    assert_eq!(recorder.tiles, vec![COORD]);
    assert!(state.invalidation.is_empty());
}

#[test]
fn test_validate_changes_nothing_and_logs_nothing() {
    let mut controller = InspectorController::new();
    let mut state = make_state();
    let before = state.map.tile_elements(COORD).expect("Tile vorhanden").to_vec();

    controller
        .execute(
            &mut state,
            InspectorCommand::SortElements { coord: COORD },
            CommandMode::Validate,
        )
        .expect("Prüfung sollte ohne Fehler durchlaufen");
    controller
        .execute(
            &mut state,
            InspectorCommand::AnyBaseHeightOffset {
                coord: COORD,
                index: 2,
                offset: -4,
            },
            CommandMode::Validate,
        )
        .expect("Prüfung sollte ohne Fehler durchlaufen");

    assert_eq!(state.map.tile_elements(COORD).expect("Tile vorhanden"), &before[..]);
    assert!(state.command_log.is_empty());
    assert!(state.invalidation.is_empty());
}

#[test]
fn test_rejected_command_is_not_logged() {
    let mut controller = InspectorController::new();
    let mut state = make_state();

    let result = controller.execute(
        &mut state,
        InspectorCommand::FenceSetSlope {
            coord: COORD,
            index: 0,
            slope: 1,
        },
        CommandMode::Apply,
    );

    assert!(matches!(
        result,
        Err(InspectorError::WrongElementKind { index: 0, .. })
    ));
    assert!(state.command_log.is_empty());
    assert!(state.invalidation.is_empty());
}

#[test]
fn test_copy_paste_flow_through_session() {
    let mut controller = InspectorController::new();
    let mut state = make_state();

    assert!(state.open_inspector(COORD));
    assert!(state.session.select_element(&state.map, 2));
    assert!(state.session.copy_selected(&state.map));
    state.session.clear_selection(&state.map);
    let element = state.session.clipboard.expect("Clipboard gefüllt");

    let target = IVec2::new(5, 5);
    controller
        .execute(
            &mut state,
            InspectorCommand::PasteElement {
                coord: target,
                element,
            },
            CommandMode::Apply,
        )
        .expect("Einfügen sollte ohne Fehler durchlaufen");

    assert_eq!(state.map.element(target, 1), Some(&element));
    // Session zeigt weiterhin das Ursprungs-Tile
    assert_eq!(state.session.element_count, 3);
    assert_eq!(state.session.selected_element, None);
}

#[test]
fn test_remove_selected_element_resets_page_and_buttons() {
    let mut controller = InspectorController::new();
    let mut state = make_state();
    assert!(state.open_inspector(COORD));
    assert!(state.session.select_element(&state.map, 1));
    state.invalidation.clear();

    controller
        .execute(
            &mut state,
            InspectorCommand::RemoveElement {
                coord: COORD,
                index: 1,
            },
            CommandMode::Apply,
        )
        .expect("Entfernen sollte ohne Fehler durchlaufen");

    assert_eq!(state.session.selected_element, None);
    assert_eq!(state.session.page, InspectorPage::Default);
    assert_eq!(state.session.element_count, 2);
    assert!(!state.session.buttons.remove);
    assert!(state.invalidation.is_window_dirty(WindowClass::TileInspector));
}

#[test]
fn test_replay_stops_at_first_rejected_command() {
    let mut controller = InspectorController::new();
    let mut state = make_state();

    let commands = vec![
        InspectorCommand::InsertCorrupt {
            coord: COORD,
            index: 2,
        },
        InspectorCommand::SwapElements {
            coord: COORD,
            first: 1,
            second: 2,
        },
        InspectorCommand::SurfaceToggleCorner {
            coord: COORD,
            corner: 9,
        },
        InspectorCommand::SortElements { coord: COORD },
    ];

    let result = controller.replay(&mut state, commands, CommandMode::Apply);

    assert_eq!(
        result,
        Err((
            2,
            InspectorError::InvalidArgument {
                name: "corner",
                value: 9
            }
        ))
    );
    assert_eq!(state.command_log.len(), 2);
    let kinds: Vec<ElementKind> = state
        .map
        .tile_elements(COORD)
        .expect("Tile vorhanden")
        .iter()
        .map(MapElement::kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ElementKind::Surface,
            ElementKind::Corrupt,
            ElementKind::Fence,
            ElementKind::Fence
        ]
    );
}

#[test]
fn test_command_log_drains_when_full() {
    let mut controller = InspectorController::new();
    let options = InspectorOptions {
        command_log_entries: 4,
        ..InspectorOptions::default()
    };
    let mut state = InspectorState::new(options);
    let coord = IVec2::new(1, 1);

    for _ in 0..5 {
        controller
            .execute(
                &mut state,
                InspectorCommand::SurfaceToggleDiagonal { coord },
                CommandMode::Apply,
            )
            .expect("Diagonale sollte ohne Fehler durchlaufen");
    }

    assert!(state.command_log.len() <= 4);
    assert!(!state.command_log.is_empty());
}

#[test]
fn test_simulate_sees_earlier_commands_and_keeps_state() {
    let mut controller = InspectorController::new();
    let state = make_state();
    let before = state.map.tile_elements(COORD).expect("Tile vorhanden").to_vec();

    // Index 3 existiert erst nach dem Einfügen
    let commands = vec![
        InspectorCommand::InsertCorrupt {
            coord: COORD,
            index: 1,
        },
        InspectorCommand::RotateElement {
            coord: COORD,
            index: 3,
        },
    ];

    let mut validating = make_state();
    let validated = controller.replay(&mut validating, commands.clone(), CommandMode::Validate);
    assert!(matches!(
        validated,
        Err((1, InspectorError::ElementNotFound { index: 3, .. }))
    ));

    assert_eq!(controller.simulate(&state, commands), Ok(2));
    assert_eq!(state.map.tile_elements(COORD).expect("Tile vorhanden"), &before[..]);
    assert!(state.command_log.is_empty());
    assert!(state.invalidation.is_empty());
}
