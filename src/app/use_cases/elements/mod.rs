//! Use-Case-Funktionen für den Element-Stapel eines Tiles.
//!
//! Aufgeteilt nach Operation:
//! - `insert_corrupt`: Defektes Element unter ein Element schieben
//! - `remove`: Element entfernen
//! - `swap`: Zwei Elemente tauschen
//! - `rotate`: Element drehen
//! - `paste`: Element aus dem Clipboard einfügen
//! - `sort`: Stapel nach Höhe sortieren
//! - `height`: Höhe eines einzelnen Elements verschieben

mod height;
mod insert_corrupt;
mod paste;
mod remove;
mod rotate;
mod sort;
mod swap;

pub use height::any_base_height_offset;
pub use insert_corrupt::insert_corrupt_element;
pub use paste::paste_element;
pub use remove::remove_element;
pub use rotate::rotate_element;
pub use sort::sort_elements;
pub use swap::swap_elements;
