//! Zentrale Konfiguration des Tile-Inspectors.
//!
//! `InspectorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Karte ───────────────────────────────────────────────────────────

/// Standard-Kantenlänge neuer Karten in Tiles.
pub const DEFAULT_MAP_SIZE: u16 = 64;
/// Standard-Höhe der Oberfläche neuer Karten (Höhen-Einheiten).
pub const DEFAULT_SURFACE_HEIGHT: u8 = 14;
/// Maximale Anzahl Element-Slots im Tile-Store.
pub const DEFAULT_ELEMENT_CAPACITY: usize = 196_608;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Inspector-Optionen.
/// Wird als `tile_inspector.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorOptions {
    /// Kantenlänge neuer Karten
    pub map_size: u16,
    /// Oberflächenhöhe neuer Karten
    pub surface_height: u8,
    /// Kapazität des Element-Speichers
    pub element_capacity: usize,
    /// Optionale TOML-Datei mit zusätzlichen Track-Vorlagen
    pub track_catalog_path: Option<PathBuf>,
    /// Maximale Einträge im Command-Log
    pub command_log_entries: usize,
}

impl Default for InspectorOptions {
    fn default() -> Self {
        Self {
            map_size: DEFAULT_MAP_SIZE,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            element_capacity: DEFAULT_ELEMENT_CAPACITY,
            track_catalog_path: None,
            command_log_entries: 1000,
        }
    }
}

impl InspectorOptions {
    /// Lädt Optionen aus einer TOML-Datei; bei Fehler werden Standardwerte verwendet.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("tile-inspector"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("tile_inspector.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults_for_missing_fields() {
        let opts: InspectorOptions =
            toml::from_str("map_size = 32\n").expect("TOML sollte parsebar sein");
        assert_eq!(opts.map_size, 32);
        assert_eq!(opts.surface_height, DEFAULT_SURFACE_HEIGHT);
        assert!(opts.track_catalog_path.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "tile_inspector_options_{}.toml",
            std::process::id()
        ));
        let opts = InspectorOptions {
            map_size: 16,
            command_log_entries: 50,
            ..Default::default()
        };
        opts.save_to_file(&path).expect("Speichern sollte klappen");
        let loaded = InspectorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let loaded =
            InspectorOptions::load_from_file(Path::new("/nonexistent/tile_inspector.toml"));
        assert_eq!(loaded, InspectorOptions::default());
    }
}
