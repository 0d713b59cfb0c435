//! Brücke zur Darstellung: welche Tiles und Fenster neu gezeichnet werden müssen.
//!
//! Die Mutatoren sammeln Invalidierungen in einer `InvalidationQueue`; der Host
//! leert sie pro Frame in seine eigene `InvalidationSink`-Implementierung.

use glam::IVec2;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Fensterklassen, die der Inspector invalidieren kann
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowClass {
    /// Das Tile-Inspector-Fenster
    TileInspector,
}

/// Empfänger der Invalidierungen auf Host-Seite (Renderer, Fenster-Manager)
pub trait InvalidationSink {
    /// Bereich eines Tiles als schmutzig markieren
    fn invalidate_tile(&mut self, coord: IVec2);
    /// Alle Fenster einer Klasse neu zeichnen
    fn invalidate_window_class(&mut self, class: WindowClass);
}

/// Gesammelte Invalidierungen in Auftrittsreihenfolge, ohne Duplikate
#[derive(Debug, Clone, Default)]
pub struct InvalidationQueue {
    tiles: IndexSet<IVec2>,
    windows: IndexSet<WindowClass>,
}

impl InvalidationQueue {
    /// Erstellt eine leere Queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Markiert ein Tile zum Neuzeichnen.
    pub fn invalidate_tile(&mut self, coord: IVec2) {
        self.tiles.insert(coord);
    }

    /// Markiert eine Fensterklasse zum Neuzeichnen.
    pub fn invalidate_window_class(&mut self, class: WindowClass) {
        self.windows.insert(class);
    }

    /// Markierte Tiles in Reihenfolge der ersten Markierung
    pub fn dirty_tiles(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.tiles.iter().copied()
    }

    /// Prüft, ob ein Tile markiert ist.
    pub fn is_tile_dirty(&self, coord: IVec2) -> bool {
        self.tiles.contains(&coord)
    }

    /// Prüft, ob eine Fensterklasse markiert ist.
    pub fn is_window_dirty(&self, class: WindowClass) -> bool {
        self.windows.contains(&class)
    }

    /// Gibt `true` zurück, wenn nichts markiert ist.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() && self.windows.is_empty()
    }

    /// Verwirft alle Markierungen.
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.windows.clear();
    }

    /// Leert die Queue in einen Host-Empfänger.
    pub fn flush(&mut self, sink: &mut dyn InvalidationSink) {
        for coord in self.tiles.drain(..) {
            sink.invalidate_tile(coord);
        }
        for class in self.windows.drain(..) {
            sink.invalidate_window_class(class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_flush_keeps_first_seen_order_and_empties_queue() {
        let mut queue = InvalidationQueue::new();
        queue.invalidate_tile(IVec2::new(3, 1));
        queue.invalidate_tile(IVec2::new(0, 0));
        queue.invalidate_tile(IVec2::new(3, 1));
        queue.invalidate_window_class(WindowClass::TileInspector);

        let mut recorder = Recorder::default();
        queue.flush(&mut recorder);

        assert_eq!(recorder.tiles, vec![IVec2::new(3, 1), IVec2::new(0, 0)]);
        assert_eq!(recorder.windows, vec![WindowClass::TileInspector]);
        assert!(queue.is_empty());
    }
}
