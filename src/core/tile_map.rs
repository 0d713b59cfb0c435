//! Tile-Store: alle Map-Elemente der Karte in einem gemeinsamen Array.
//!
//! Jedes Tile besitzt einen zusammenhängenden Abschnitt (`TileRun`) im
//! Backing-Array. Die Reihenfolge innerhalb eines Abschnitts ist die
//! Zeichen-/Kollisionsreihenfolge. Beim Einfügen wandert der Abschnitt an das
//! Ende des belegten Bereichs; die alten Slots bleiben bis zur nächsten
//! Reorganisation als Lücken stehen.

use super::MapElement;
use glam::IVec2;

/// Abschnitt eines Tiles im Backing-Array
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TileRun {
    start: usize,
    len: usize,
}

impl TileRun {
    /// Leere Abschnitte liegen immer bei Slot 0.
    fn at(start: usize, len: usize) -> Self {
        if len == 0 {
            Self::default()
        } else {
            Self { start, len }
        }
    }
}

/// Element-Speicher einer quadratischen Karte
#[derive(Debug, Clone)]
pub struct TileMap {
    /// Kantenlänge in Tiles
    size: i32,
    /// Abschnitte, indexiert mit `y * size + x`
    runs: Vec<TileRun>,
    /// Backing-Array; `len()` ist der nächste freie Slot
    elements: Vec<MapElement>,
    /// Maximale Anzahl Slots
    capacity: usize,
}

impl TileMap {
    /// Erstellt eine Karte, bei der jedes Tile eine flache Oberfläche auf `surface_height` trägt.
    pub fn new(size: u16, capacity: usize, surface_height: u8) -> Self {
        let tile_count = usize::from(size) * usize::from(size);
        let mut map = Self::empty(size, capacity.max(tile_count));
        for tile in 0..tile_count {
            map.runs[tile] = TileRun { start: tile, len: 1 };
            map.elements.push(MapElement::surface(surface_height));
        }
        map
    }

    /// Erstellt eine Karte ohne Elemente (Basis für Reader und Tests).
    pub fn empty(size: u16, capacity: usize) -> Self {
        Self {
            size: i32::from(size),
            runs: vec![TileRun::default(); usize::from(size) * usize::from(size)],
            elements: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Kantenlänge in Tiles
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Maximale Anzahl Element-Slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Prüft, ob die Koordinate auf der Karte liegt.
    pub fn contains(&self, coord: IVec2) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.size && coord.y < self.size
    }

    fn tile_index(&self, coord: IVec2) -> Option<usize> {
        // contains() garantiert nicht-negative Werte
        self.contains(coord)
            .then(|| coord.y as usize * self.size as usize + coord.x as usize)
    }

    /// Alle Tile-Koordinaten in Speicherreihenfolge (zeilenweise).
    pub fn coords(&self) -> impl Iterator<Item = IVec2> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| IVec2::new(x, y)))
    }

    /// Elemente eines Tiles in Zeichenreihenfolge
    pub fn tile_elements(&self, coord: IVec2) -> Option<&[MapElement]> {
        let run = self.runs[self.tile_index(coord)?];
        Some(&self.elements[run.start..run.start + run.len])
    }

    /// Mutable Sicht auf die Elemente eines Tiles
    pub fn tile_elements_mut(&mut self, coord: IVec2) -> Option<&mut [MapElement]> {
        let run = self.runs[self.tile_index(coord)?];
        Some(&mut self.elements[run.start..run.start + run.len])
    }

    /// Anzahl Elemente auf einem Tile (0 außerhalb der Karte)
    pub fn element_count(&self, coord: IVec2) -> usize {
        self.tile_index(coord).map_or(0, |i| self.runs[i].len)
    }

    /// Einzelnes Element über Tile-lokalen Index
    pub fn element(&self, coord: IVec2, index: usize) -> Option<&MapElement> {
        self.tile_elements(coord)?.get(index)
    }

    /// Mutables Element über Tile-lokalen Index
    pub fn element_mut(&mut self, coord: IVec2, index: usize) -> Option<&mut MapElement> {
        self.tile_elements_mut(coord)?.get_mut(index)
    }

    /// Gibt zurück, ob `index` das letzte Element des Tiles ist.
    pub fn is_last_for_tile(&self, coord: IVec2, index: usize) -> bool {
        let count = self.element_count(coord);
        count > 0 && index + 1 == count
    }

    /// Index des ersten Oberflächen-Elements auf dem Tile
    pub fn surface_index(&self, coord: IVec2) -> Option<usize> {
        self.tile_elements(coord)?
            .iter()
            .position(|e| e.as_surface().is_some())
    }

    /// Belegte Slots inklusive Lücken
    pub fn used_slots(&self) -> usize {
        self.elements.len()
    }

    /// Summe aller Elemente über alle Tiles
    pub fn total_elements(&self) -> usize {
        self.runs.iter().map(|r| r.len).sum()
    }

    /// Freie Slots am Ende des Backing-Arrays
    pub fn free_elements(&self) -> usize {
        self.capacity.saturating_sub(self.elements.len())
    }

    /// Prüft ohne Umbau, ob `count` weitere Elemente nach einer Reorganisation Platz hätten.
    pub fn can_fit(&self, count: usize) -> bool {
        self.capacity.saturating_sub(self.total_elements()) >= count
    }

    /// Stellt sicher, dass `count` Slots frei sind; reorganisiert bei Bedarf.
    pub fn ensure_free_elements(&mut self, count: usize) -> bool {
        if self.free_elements() >= count {
            return true;
        }
        self.reorganise();
        self.free_elements() >= count
    }

    /// Kompaktiert das Backing-Array in Tile-Reihenfolge und entfernt alle Lücken.
    pub fn reorganise(&mut self) {
        let before = self.elements.len();
        let mut compacted = Vec::with_capacity(self.capacity);
        for run in &mut self.runs {
            let start = compacted.len();
            compacted.extend_from_slice(&self.elements[run.start..run.start + run.len]);
            *run = TileRun::at(start, run.len);
        }
        self.elements = compacted;
        log::debug!(
            "Element-Speicher reorganisiert: {} -> {} Slots",
            before,
            self.elements.len()
        );
    }

    fn run_at_end(&self, tile: usize) -> bool {
        let run = self.runs[tile];
        run.start + run.len == self.elements.len()
    }

    /// Reserviert einen Slot an `position` im Abschnitt des Tiles und schreibt `element` hinein.
    ///
    /// Liegt der Abschnitt nicht am Ende, wird er dorthin kopiert. Reicht der Platz
    /// dafür auch nach Reorganisation nicht, wird an Ort und Stelle eingefügt und
    /// alle folgenden Abschnitte rücken um einen Slot nach hinten. Gibt `None`
    /// zurück, wenn kein einziger Slot mehr frei ist.
    fn open_slot(&mut self, tile: usize, position: usize, element: MapElement) -> Option<()> {
        let needed = if self.run_at_end(tile) {
            1
        } else {
            self.runs[tile].len + 1
        };
        if self.free_elements() < needed {
            self.reorganise();
        }
        if self.free_elements() == 0 {
            return None;
        }

        let run = self.runs[tile];
        if self.run_at_end(tile) {
            self.elements.insert(run.start + position, element);
            self.runs[tile].len += 1;
        } else if self.free_elements() > run.len {
            let start = self.elements.len();
            for i in 0..run.len {
                if i == position {
                    self.elements.push(element);
                }
                let existing = self.elements[run.start + i];
                self.elements.push(existing);
            }
            if position == run.len {
                self.elements.push(element);
            }
            self.runs[tile] = TileRun {
                start,
                len: run.len + 1,
            };
        } else {
            self.elements.insert(run.start + position, element);
            for (i, other) in self.runs.iter_mut().enumerate() {
                if i != tile && other.len > 0 && other.start >= run.start + run.len {
                    other.start += 1;
                }
            }
            self.runs[tile].len += 1;
        }
        Some(())
    }

    /// Fügt ein Element höhensortiert ein, hinter alle Elemente mit
/// `base_height <= element.base_height`.
    ///
    /// Gibt den Tile-lokalen Index zurück oder `None`, wenn kein Slot verfügbar ist.
    pub fn insert_element(&mut self, coord: IVec2, element: MapElement) -> Option<usize> {
        let tile = self.tile_index(coord)?;
        let position = self
            .tile_elements(coord)?
            .iter()
            .position(|e| element.base_height < e.base_height)
            .unwrap_or(self.runs[tile].len);
        self.open_slot(tile, position, element)?;
        Some(position)
    }

    /// Hängt ein Element an das strukturelle Ende des Tiles an.
    pub fn push_element(&mut self, coord: IVec2, element: MapElement) -> Option<usize> {
        let tile = self.tile_index(coord)?;
        let position = self.runs[tile].len;
        self.open_slot(tile, position, element)?;
        Some(position)
    }

    /// Entfernt ein Element; nachfolgende Elemente rücken auf.
    pub fn remove_element(&mut self, coord: IVec2, index: usize) -> Option<MapElement> {
        let tile = self.tile_index(coord)?;
        let run = self.runs[tile];
        if index >= run.len {
            return None;
        }
        let slice = &mut self.elements[run.start..run.start + run.len];
        let removed = slice[index];
        slice[index..].rotate_left(1);
        if self.run_at_end(tile) {
            self.elements.pop();
        }
        self.runs[tile] = TileRun::at(run.start, run.len - 1);
        Some(removed)
    }

    /// Vertauscht zwei Elemente desselben Tiles.
    ///
    /// # Panics
    /// Wenn das Tile weniger als zwei Elemente hat oder ein Index außerhalb liegt.
    /// Beides ist ein Aufrufer-Fehler, kein Benutzerfehler.
    pub fn swap_elements(&mut self, coord: IVec2, first: usize, second: usize) {
        self.assert_swappable(coord, first, second);
        if let Some(elements) = self.tile_elements_mut(coord) {
            elements.swap(first, second);
        }
    }

    /// Prüft die Vorbedingungen von [`TileMap::swap_elements`], ohne zu tauschen.
    ///
    /// # Panics
    /// Unter denselben Bedingungen wie `swap_elements`.
    pub fn assert_swappable(&self, coord: IVec2, first: usize, second: usize) {
        let count = self.element_count(coord);
        assert!(
            count >= 2,
            "Tausch nicht möglich: Tile ({}, {}) hat nur {} Element(e)",
            coord.x,
            coord.y,
            count
        );
        assert!(
            first.max(second) < count,
            "Tausch-Index {} oder {} außerhalb von Tile ({}, {}) mit {} Elementen",
            first,
            second,
            coord.x,
            coord.y,
            count
        );
    }

    /// Ersetzt den kompletten Inhalt eines Tiles (Reader, Tests).
    ///
    /// Gibt `false` zurück, wenn die Koordinate ungültig ist oder der Platz nicht reicht.
    pub fn set_tile_elements(&mut self, coord: IVec2, elements: &[MapElement]) -> bool {
        let Some(tile) = self.tile_index(coord) else {
            return false;
        };
        if !self.ensure_free_elements(elements.len()) {
            return false;
        }
        let start = self.elements.len();
        self.elements.extend_from_slice(elements);
        self.runs[tile] = TileRun::at(start, elements.len());
        true
    }
}
