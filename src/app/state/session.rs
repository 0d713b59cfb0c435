//! Inspector-Session: inspiziertes Tile, Auswahl, Seite und Button-Freigabe.

use crate::core::{ElementKind, MapElement, TileMap};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Aktive Seite des Inspector-Fensters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InspectorPage {
    /// Keine Auswahl: Elementliste
    #[default]
    Default,
    Surface,
    Path,
    Track,
    Scenery,
    Entrance,
    Fence,
    Banner,
    Corrupt,
}

impl InspectorPage {
    /// Seite, die zu einer Element-Art gehört
    pub fn for_kind(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Surface => InspectorPage::Surface,
            ElementKind::Path => InspectorPage::Path,
            ElementKind::Track => InspectorPage::Track,
            ElementKind::Scenery => InspectorPage::Scenery,
            ElementKind::Entrance => InspectorPage::Entrance,
            ElementKind::Fence => InspectorPage::Fence,
            ElementKind::Banner => InspectorPage::Banner,
            ElementKind::Corrupt => InspectorPage::Corrupt,
        }
    }
}

/// Freigabe der Inspector-Buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InspectorButtons {
    pub remove: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub rotate: bool,
    pub copy: bool,
    pub paste: bool,
    pub sort: bool,
    pub insert_corrupt: bool,
}

/// Zustand des Tile-Inspectors: welches Tile/Element gerade betrachtet wird.
///
/// Die Mutatoren halten `element_count` und `selected_element` synchron, wenn
/// sie das inspizierte Tile verändern.
#[derive(Debug, Clone, Default)]
pub struct InspectorSession {
    /// Inspector-Fenster ist offen
    pub window_open: bool,
    /// Inspiziertes Tile
    pub tile: Option<IVec2>,
    /// Zwischengespeicherte Elementanzahl des Tiles
    pub element_count: usize,
    /// Selektiertes Element (Tile-lokaler Index)
    pub selected_element: Option<usize>,
    /// Aktive Seite
    pub page: InspectorPage,
    /// Abgeleiteter Button-Zustand
    pub buttons: InspectorButtons,
    /// Kopiertes Element für Einfügen
    pub clipboard: Option<MapElement>,
}

impl InspectorSession {
    /// Erstellt eine geschlossene Session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt zurück, ob das Fenster offen ist.
    pub fn is_open(&self) -> bool {
        self.window_open
    }

    /// Gibt zurück, ob das Fenster offen ist und genau dieses Tile zeigt.
    pub fn is_inspecting(&self, coord: IVec2) -> bool {
        self.window_open && self.tile == Some(coord)
    }

    /// Öffnet das Fenster auf einem Tile; Auswahl und Seite werden zurückgesetzt.
    pub fn open_tile(&mut self, map: &TileMap, coord: IVec2) -> bool {
        if !map.contains(coord) {
            log::warn!(
                "Inspector: Tile ({}, {}) liegt außerhalb der Karte",
                coord.x,
                coord.y
            );
            return false;
        }
        self.window_open = true;
        self.tile = Some(coord);
        self.element_count = map.element_count(coord);
        self.selected_element = None;
        self.page = InspectorPage::Default;
        self.auto_set_buttons(map);
        log::debug!(
            "Inspector geöffnet auf ({}, {}) mit {} Elementen",
            coord.x,
            coord.y,
            self.element_count
        );
        true
    }

    /// Schließt das Fenster. Das Clipboard bleibt erhalten.
    pub fn close(&mut self) {
        let clipboard = self.clipboard.take();
        *self = Self {
            clipboard,
            ..Self::default()
        };
    }

    /// Selektiert ein Element; die Seite folgt der Element-Art.
    pub fn select_element(&mut self, map: &TileMap, index: usize) -> bool {
        let Some(kind) = self
            .tile
            .and_then(|coord| map.element(coord, index))
            .map(MapElement::kind)
        else {
            return false;
        };
        self.selected_element = Some(index);
        self.page = InspectorPage::for_kind(kind);
        self.auto_set_buttons(map);
        true
    }

    /// Hebt die Auswahl auf und zeigt wieder die Elementliste.
    pub fn clear_selection(&mut self, map: &TileMap) {
        self.selected_element = None;
        self.page = InspectorPage::Default;
        self.auto_set_buttons(map);
    }

    /// Setzt die aktive Seite.
    pub fn set_page(&mut self, page: InspectorPage) {
        self.page = page;
    }

    /// Kopiert das selektierte Element in das Clipboard.
    pub fn copy_selected(&mut self, map: &TileMap) -> bool {
        let Some(element) = self
            .tile
            .zip(self.selected_element)
            .and_then(|(coord, index)| map.element(coord, index))
        else {
            return false;
        };
        self.clipboard = Some(*element);
        self.auto_set_buttons(map);
        true
    }

    /// Berechnet die Button-Freigabe aus Auswahl, Anzahl und Clipboard neu.
    pub fn auto_set_buttons(&mut self, map: &TileMap) {
        let selected_kind = self
            .tile
            .zip(self.selected_element)
            .and_then(|(coord, index)| map.element(coord, index))
            .map(MapElement::kind);
        let has_selection = selected_kind.is_some();
        let selected = self.selected_element.unwrap_or(0);

        self.buttons = InspectorButtons {
            remove: has_selection,
            move_up: has_selection && selected + 1 < self.element_count,
            move_down: has_selection && selected > 0,
            rotate: selected_kind.is_some_and(ElementKind::is_rotatable),
            copy: has_selection,
            paste: self.clipboard.is_some(),
            sort: self.element_count >= 2,
            insert_corrupt: has_selection,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ElementData, FenceData};

    fn map_with_fence() -> (TileMap, IVec2) {
        let mut map = TileMap::new(2, 16, 14);
        let coord = IVec2::new(1, 0);
        map.insert_element(
            coord,
            MapElement::new(16, 20, ElementData::Fence(FenceData::default())),
        )
        .expect("Platz vorhanden");
        (map, coord)
    }

    #[test]
    fn test_open_tile_outside_map_is_rejected() {
        let (map, _) = map_with_fence();
        let mut session = InspectorSession::new();
        assert!(!session.open_tile(&map, IVec2::new(2, 0)));
        assert!(!session.is_open());
    }

    #[test]
    fn test_buttons_follow_selection_and_clipboard() {
        let (map, coord) = map_with_fence();
        let mut session = InspectorSession::new();
        assert!(session.open_tile(&map, coord));
        assert_eq!(session.element_count, 2);
        assert!(!session.buttons.remove);
        assert!(session.buttons.sort);

        assert!(session.select_element(&map, 1));
        assert_eq!(session.page, InspectorPage::Fence);
        assert!(session.buttons.rotate);
        assert!(session.buttons.move_down);
        assert!(!session.buttons.move_up);
        assert!(!session.buttons.paste);

        assert!(session.copy_selected(&map));
        assert!(session.buttons.paste);

        assert!(session.select_element(&map, 0));
        assert!(!session.buttons.rotate);
        assert!(session.buttons.move_up);
    }

    #[test]
    fn test_close_keeps_clipboard() {
        let (map, coord) = map_with_fence();
        let mut session = InspectorSession::new();
        session.open_tile(&map, coord);
        session.select_element(&map, 1);
        session.copy_selected(&map);

        session.close();

        assert!(!session.is_inspecting(coord));
        assert_eq!(session.selected_element, None);
        assert_eq!(session.clipboard.map(|e| e.kind()), Some(ElementKind::Fence));
    }

    #[test]
    fn test_select_missing_element_keeps_state() {
        let (map, coord) = map_with_fence();
        let mut session = InspectorSession::new();
        session.open_tile(&map, coord);
        assert!(!session.select_element(&map, 5));
        assert_eq!(session.selected_element, None);
        assert_eq!(session.page, InspectorPage::Default);
    }
}
