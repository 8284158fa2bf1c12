// Software-Uhr: Minutenzähler als Zeitquelle für den Scheduler
//
// Der Scheduler liest selbst keine Uhr - er bekommt pro Tick eine
// hhmm-Ganzzahl übergeben. Diese Uhr liefert sie: ein Minutenzähler,
// der vom Scheduler-Task im Minutentakt fortgeschrieben wird und bei
// Mitternacht überläuft. Die Startzeit kommt aus config::CLOCK_START.

/// Minuten pro Tag
const MINUTES_PER_DAY: u16 = 24 * 60;

/// Software-Wanduhr mit Minuten-Auflösung
pub struct WallClock {
    /// Minuten seit Mitternacht, Bereich [0, 1439]
    minutes: u16,
}

impl WallClock {
    /// Erstellt die Uhr aus einer hhmm-Ganzzahl (z.B. 730 für 07:30)
    pub const fn from_hhmm(hhmm: u16) -> Self {
        Self {
            minutes: ((hhmm / 100) * 60 + hhmm % 100) % MINUTES_PER_DAY,
        }
    }

    /// Schreibt die Uhr um eine Minute fort (Überlauf bei Mitternacht)
    pub fn advance_minute(&mut self) {
        self.minutes = (self.minutes + 1) % MINUTES_PER_DAY;
    }

    /// Aktuelle Uhrzeit als hhmm-Ganzzahl für den Scheduler
    pub const fn hhmm(&self) -> u16 {
        (self.minutes / 60) * 100 + self.minutes % 60
    }
}
