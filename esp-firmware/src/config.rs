// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use esp_core::ScheduleEntry;

// ============================================================================
// Hardware-Zuordnung
// ============================================================================

/// GPIO-Pin für den geschalteten Ausgang (Relais-Treiber)
pub const RELAY_GPIO_PIN: u8 = 4;

/// GPIO-Pin für die Heartbeat-LED
pub const HEARTBEAT_GPIO_PIN: u8 = 5;

/// GPIO-Pin für den Override-Taster (BOOT-Taste des DevKits)
pub const BUTTON_GPIO_PIN: u8 = 9;

// ============================================================================
// Scheduler Konfiguration
// ============================================================================

/// Der Tagesschaltplan: (Uhrzeit, Ausgangszustand)
/// MUSS streng aufsteigend nach Uhrzeit sortiert sein!
/// Der letzte Eintrag gilt über Mitternacht bis zum ersten Eintrag.
pub const SCHEDULE: [ScheduleEntry; 4] = [
    ScheduleEntry::at(6, 30, true),   // morgens ein
    ScheduleEntry::at(8, 0, false),   // tagsüber aus
    ScheduleEntry::at(17, 30, true),  // abends ein
    ScheduleEntry::at(22, 30, false), // nachts aus
];

/// Auswertungs-Intervall des Schedulers in Sekunden
/// Der Schaltplan hat Minuten-Auflösung, daher reicht einmal pro Minute
pub const TICK_INTERVAL_SECS: u64 = 60;

/// Startzeit der Software-Uhr (hhmm-Format, z.B. "0730")
/// Wird zur Build-Zeit aus der Environment Variable CLOCK_START geladen
/// Setze diese in .env file, Default ist "0000" (Mitternacht)
pub const CLOCK_START: &str = env!("CLOCK_START");

// ============================================================================
// Heartbeat Konfiguration
// ============================================================================

/// Blink-Intervall der Heartbeat-LED in Millisekunden
pub const HEARTBEAT_INTERVAL_MS: u64 = 1000;

/// Poll-Intervall des Heartbeat-Tasks in Millisekunden
/// Deutlich kleiner als das Blink-Intervall, damit Flanken pünktlich kommen
pub const HEARTBEAT_POLL_MS: u64 = 50;

// ============================================================================
// Taster Konfiguration
// ============================================================================

/// Entprell-Zeit des Override-Tasters in Millisekunden
pub const BUTTON_DEBOUNCE_MS: u64 = 250;
