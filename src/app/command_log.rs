//! Command-Log der ausgeführten Befehle für deterministisches Replay.

use super::InspectorCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    entries: Vec<InspectorCommand>,
    max_entries: usize,
}

impl CommandLog {
    /// Standard-Obergrenze der Einträge
    pub const DEFAULT_MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::with_max_entries(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Erstellt ein leeres Command-Log mit eigener Obergrenze.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries: max_entries.max(2),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf `max_entries`, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: InspectorCommand) {
        if self.entries.len() >= self.max_entries {
            self.entries.drain(..self.max_entries / 2);
        }
        self.entries.push(command);
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[InspectorCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_record_drops_oldest_half_when_full() {
        let mut log = CommandLog::with_max_entries(4);
        for x in 0..5 {
            log.record(InspectorCommand::SortElements {
                coord: IVec2::new(x, 0),
            });
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.entries()[0].coord(), IVec2::new(2, 0));
    }
}
