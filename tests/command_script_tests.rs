use glam::IVec2;
use tile_inspector::{
    CommandMode, ElementData, FenceData, InspectorCommand, InspectorController, InspectorState,
    MapElement,
};

const SCRIPT: &str = r#"[
    { "command": "paste_element", "coord": [2, 2],
      "element": { "base_height": 20, "clearance_height": 24, "direction": 0,
                   "occupied_quadrants": 0,
                   "data": { "Fence": { "fence_type": 5, "slope": 0 } } } },
    { "command": "fence_set_slope", "coord": [2, 2], "index": 1, "slope": 2 },
    { "command": "rotate_element", "coord": [2, 2], "index": 1 },
    { "command": "surface_toggle_corner", "coord": [2, 2], "corner": 1 },
    { "command": "track_set_chain", "coord": [0, 0], "index": 0,
      "entire_track_piece": true, "chain": true }
]"#;

#[test]
fn test_script_parses_into_commands() {
    let commands: Vec<InspectorCommand> =
        serde_json::from_str(SCRIPT).expect("Skript sollte parsebar sein");

    assert_eq!(commands.len(), 5);
    assert_eq!(
        commands[1],
        InspectorCommand::FenceSetSlope {
            coord: IVec2::new(2, 2),
            index: 1,
            slope: 2
        }
    );
    match &commands[0] {
        InspectorCommand::PasteElement { element, .. } => {
            assert_eq!(
                element.data,
                ElementData::Fence(FenceData {
                    fence_type: 5,
                    slope: 0
                })
            );
        }
        other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn test_command_json_roundtrip_keeps_tag() {
    let command = InspectorCommand::AnyBaseHeightOffset {
        coord: IVec2::new(3, 1),
        index: 2,
        offset: -2,
    };
    let json = serde_json::to_string(&command).expect("Serialisieren sollte klappen");
    assert!(json.contains(r#""command":"any_base_height_offset""#));

    let parsed: InspectorCommand = serde_json::from_str(&json).expect("Parsen sollte klappen");
    assert_eq!(parsed, command);
}

#[test]
fn test_unknown_command_is_rejected() {
    let result: Result<InspectorCommand, _> =
        serde_json::from_str(r#"{ "command": "explode_tile", "coord": [0, 0] }"#);
    assert!(result.is_err());
}

#[test]
fn test_script_replay_applies_until_first_error() {
    let commands: Vec<InspectorCommand> =
        serde_json::from_str(SCRIPT).expect("Skript sollte parsebar sein");
    let mut state = InspectorState::default();
    let mut controller = InspectorController::new();

    // Letzter Command zielt auf die Oberfläche, nicht auf ein Schienenstück
    let result = controller.replay(&mut state, commands, CommandMode::Apply);
    assert!(matches!(result, Err((4, _))));

    let coord = IVec2::new(2, 2);
    let fence = state.map.element(coord, 1).copied().expect("Zaun vorhanden");
    assert_eq!(fence.direction, 1);
    assert_eq!(
        fence.data,
        ElementData::Fence(FenceData {
            fence_type: 5,
            slope: 2
        })
    );
    let surface: MapElement = *state.map.element(coord, 0).expect("Oberfläche vorhanden");
    assert_eq!(surface.as_surface().map(|s| s.corners), Some(0b0010));
}
