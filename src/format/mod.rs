//! Binäres Kartenformat (`.timp`).
//!
//! Layout (Little Endian):
//! - `"TIMP"` Magic, `u16` Version, `u16` Kantenlänge
//! - `u32` Kapazität, `u32` Anzahl Elemente
//! - alle Elemente gepackt (8 Byte), Tile für Tile zeilenweise
//!
//! Das Ende jedes Tiles markiert das "letztes Element"-Flag; ein Tile ohne
//! Elemente ist im Format nicht darstellbar.

pub mod reader;
pub mod writer;

pub use reader::{load_map_file, read_map};
pub use writer::{save_map_file, write_map};

/// Kennung am Dateianfang
pub const MAGIC: &[u8; 4] = b"TIMP";
/// Aktuelle Format-Version
pub const FORMAT_VERSION: u16 = 1;
/// Größe des Headers in Bytes
pub const HEADER_SIZE: usize = 16;
