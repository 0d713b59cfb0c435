//! Application State — zentrale Datenhaltung.

mod session;

pub use session::{InspectorButtons, InspectorPage, InspectorSession};

use super::invalidation::{InvalidationQueue, WindowClass};
use super::CommandLog;
use crate::core::{TileMap, TrackCatalog};
use crate::shared::InspectorOptions;
use glam::IVec2;

/// Hauptzustand: Karte, Inspector-Session und Brücke zur Darstellung
#[derive(Debug, Clone)]
pub struct InspectorState {
    /// Tile-Store der Karte
    pub map: TileMap,
    /// Einzige Inspector-Session
    pub session: InspectorSession,
    /// Gesammelte Neuzeichnen-Anforderungen
    pub invalidation: InvalidationQueue,
    /// Vorlagen mehrteiliger Schienenstücke
    pub track_catalog: TrackCatalog,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: InspectorOptions,
}

impl InspectorState {
    /// Erstellt einen State mit leerer Karte laut Optionen und eingebauten Track-Vorlagen.
    pub fn new(options: InspectorOptions) -> Self {
        let map = TileMap::new(
            options.map_size,
            options.element_capacity,
            options.surface_height,
        );
        Self::with_map(map, options)
    }

    /// Erstellt einen State für eine bestehende Karte.
    ///
    /// Ist in den Optionen eine Track-Vorlagen-Datei gesetzt, wird sie geladen;
    /// bei Fehler bleiben die eingebauten Vorlagen aktiv.
    pub fn with_map(map: TileMap, options: InspectorOptions) -> Self {
        let track_catalog = match &options.track_catalog_path {
            Some(path) => TrackCatalog::load_from_file(path).unwrap_or_else(|e| {
                log::warn!(
                    "Track-Vorlagen aus {} nicht ladbar, verwende eingebaute: {:#}",
                    path.display(),
                    e
                );
                TrackCatalog::builtin()
            }),
            None => TrackCatalog::builtin(),
        };
        Self {
            map,
            session: InspectorSession::new(),
            invalidation: InvalidationQueue::new(),
            track_catalog,
            command_log: CommandLog::with_max_entries(options.command_log_entries),
            options,
        }
    }

    /// Gibt zurück, ob die Session gerade dieses Tile zeigt.
    pub fn is_inspecting(&self, coord: IVec2) -> bool {
        self.session.is_inspecting(coord)
    }

    /// Öffnet den Inspector auf einem Tile und fordert ein Neuzeichnen an.
    pub fn open_inspector(&mut self, coord: IVec2) -> bool {
        let opened = self.session.open_tile(&self.map, coord);
        if opened {
            self.invalidation
                .invalidate_window_class(WindowClass::TileInspector);
        }
        opened
    }

    /// Schließt den Inspector.
    pub fn close_inspector(&mut self) {
        self.session.close();
        self.invalidation
            .invalidate_window_class(WindowClass::TileInspector);
    }

    /// Berechnet die Buttons neu und fordert ein Neuzeichnen des Inspectors an.
    pub(crate) fn refresh_inspector(&mut self) {
        self.session.auto_set_buttons(&self.map);
        self.invalidation
            .invalidate_window_class(WindowClass::TileInspector);
    }
}

impl Default for InspectorState {
    fn default() -> Self {
        Self::new(InspectorOptions::default())
    }
}
