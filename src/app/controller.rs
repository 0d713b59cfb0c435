//! Application Controller für zentrale Command-Verarbeitung.

use super::use_cases::{elements, fence, path, scenery, surface, track};
use super::{CommandMode, InspectorCommand, InspectorState};
use crate::error::{CommandResult, InspectorError};

/// Dispatcht Inspector-Commands an die Use-Cases.
#[derive(Default)]
pub struct InspectorController;

impl InspectorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Führt einen Command aus.
    ///
    /// Im Modus `Apply` werden erfolgreiche Commands im Command-Log festgehalten.
    /// Abgelehnte Commands werden geloggt und ändern nichts.
    pub fn execute(
        &mut self,
        state: &mut InspectorState,
        command: InspectorCommand,
        mode: CommandMode,
    ) -> CommandResult {
        let result = Self::dispatch(state, &command, mode);
        match &result {
            Ok(()) if mode.is_apply() => state.command_log.record(command),
            Ok(()) => log::debug!("Command geprüft: {:?}", command),
            Err(e) => log::warn!("Command abgelehnt ({}): {:?}", e, command),
        }
        result
    }

    /// Führt eine Folge von Commands der Reihe nach aus und bricht beim ersten Fehler ab.
    ///
    /// Gibt die Anzahl erfolgreich ausgeführter Commands zurück; im Fehlerfall
    /// zusammen mit dem Fehler die Anzahl der Commands davor.
    pub fn replay(
        &mut self,
        state: &mut InspectorState,
        commands: impl IntoIterator<Item = InspectorCommand>,
        mode: CommandMode,
    ) -> Result<usize, (usize, InspectorError)> {
        let mut executed = 0;
        for command in commands {
            self.execute(state, command, mode)
                .map_err(|e| (executed, e))?;
            executed += 1;
        }
        Ok(executed)
    }

    /// Spielt Commands im Modus `Apply` auf einer Kopie des States ab.
    ///
    /// Jeder Command sieht die Wirkung der vorherigen; `state` bleibt unverändert.
    pub fn simulate(
        &mut self,
        state: &InspectorState,
        commands: impl IntoIterator<Item = InspectorCommand>,
    ) -> Result<usize, (usize, InspectorError)> {
        let mut scratch = state.clone();
        self.replay(&mut scratch, commands, CommandMode::Apply)
    }

    fn dispatch(
        state: &mut InspectorState,
        command: &InspectorCommand,
        mode: CommandMode,
    ) -> CommandResult {
        match *command {
            // === Element-Stapel ===
            InspectorCommand::InsertCorrupt { coord, index } => {
                elements::insert_corrupt_element(state, coord, index, mode)
            }
            InspectorCommand::RemoveElement { coord, index } => {
                elements::remove_element(state, coord, index, mode)
            }
            InspectorCommand::SwapElements {
                coord,
                first,
                second,
            } => elements::swap_elements(state, coord, first, second, mode),
            InspectorCommand::RotateElement { coord, index } => {
                elements::rotate_element(state, coord, index, mode)
            }
            InspectorCommand::PasteElement { coord, element } => {
                elements::paste_element(state, coord, element, mode)
            }
            InspectorCommand::SortElements { coord } => {
                elements::sort_elements(state, coord, mode)
            }
            InspectorCommand::AnyBaseHeightOffset {
                coord,
                index,
                offset,
            } => elements::any_base_height_offset(state, coord, index, offset, mode),

            // === Oberfläche ===
            InspectorCommand::SurfaceShowParkFences { coord, show } => {
                surface::surface_show_park_fences(state, coord, show, mode)
            }
            InspectorCommand::SurfaceToggleCorner { coord, corner } => {
                surface::surface_toggle_corner(state, coord, corner, mode)
            }
            InspectorCommand::SurfaceToggleDiagonal { coord } => {
                surface::surface_toggle_diagonal(state, coord, mode)
            }

            // === Weg, Zaun, Szenerie ===
            InspectorCommand::PathSetSloped {
                coord,
                index,
                sloped,
            } => path::path_set_sloped(state, coord, index, sloped, mode),
            InspectorCommand::PathToggleEdge { coord, index, edge } => {
                path::path_toggle_edge(state, coord, index, edge, mode)
            }
            InspectorCommand::FenceSetSlope {
                coord,
                index,
                slope,
            } => fence::fence_set_slope(state, coord, index, slope, mode),
            InspectorCommand::ScenerySetQuarterLocation {
                coord,
                index,
                quadrant,
            } => scenery::scenery_set_quarter_location(state, coord, index, quadrant, mode),

            // === Schienen ===
            InspectorCommand::TrackBaseHeightOffset {
                coord,
                index,
                offset,
            } => track::track_base_height_offset(state, coord, index, offset, mode),
            InspectorCommand::TrackSetChain {
                coord,
                index,
                entire_track_piece,
                chain,
            } => track::track_set_chain(state, coord, index, entire_track_piece, chain, mode),
        }
    }
}
