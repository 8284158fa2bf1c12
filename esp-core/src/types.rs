//! Core Types für die Zeitschaltuhr
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Ein Eintrag im Tagesschaltplan
///
/// `time` kodiert die Uhrzeit als Ganzzahl der Form hhmm
/// (Stunde*100 + Minute, z.B. 1830 für 18:30). `state` definiert den
/// Ausgangszustand ab dieser Uhrzeit bis zum nächsten Eintrag.
///
/// Ein Schaltplan ist ein Slice solcher Einträge, streng aufsteigend nach
/// `time` sortiert und mindestens einen Eintrag lang. Die Sortierung wird
/// nicht geprüft - ein unsortierter Plan liefert eine beliebige (aber
/// deterministische) Eintragswahl statt eines Fehlers. Zeitwerte werden
/// ebenfalls nicht validiert (eine Minute >= 60 wird rein arithmetisch
/// verglichen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleEntry {
    /// Uhrzeit als hhmm-Ganzzahl, Bereich [0, 2359]
    pub time: u16,
    /// Ausgangszustand ab dieser Uhrzeit (true = ein, false = aus)
    pub state: bool,
}

impl ScheduleEntry {
    /// Erstellt einen Eintrag aus einer hhmm-Ganzzahl
    pub const fn new(time: u16, state: bool) -> Self {
        Self { time, state }
    }

    /// Erstellt einen Eintrag aus Stunde und Minute
    pub const fn at(hour: u8, minute: u8, state: bool) -> Self {
        Self {
            time: hour as u16 * 100 + minute as u16,
            state,
        }
    }
}

/// Fehler-Typ für den Scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    /// Der Schaltplan ist leer (mindestens ein Eintrag ist Pflicht)
    EmptyTable,
    /// Override vor der ersten Auswertung - der Ausgangszustand
    /// ist noch undefiniert
    NotEvaluated,
}

/// Kommando für manuelle Steuerung
///
/// Wird vom Override-Trigger (Taster-Task) an den Scheduler-Task gesendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchCommand {
    /// Kippe den Ausgang manuell, unabhängig vom Schaltplan
    Override,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for ScheduleEntry {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ScheduleEntry {{ time: {=u16:04}, state: {} }}",
            self.time,
            self.state
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SchedulerError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SchedulerError::EmptyTable => defmt::write!(fmt, "EmptyTable"),
            SchedulerError::NotEvaluated => defmt::write!(fmt, "NotEvaluated"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SwitchCommand {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SwitchCommand::Override => defmt::write!(fmt, "Override"),
        }
    }
}
