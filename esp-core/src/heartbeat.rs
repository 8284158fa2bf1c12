//! Heartbeat - periodischer Toggler als Lebenszeichen
//!
//! Pure Logic ohne Hardware-Dependencies: der Aufrufer liefert bei jedem
//! Poll einen monotonen Millisekunden-Zeitstempel und schreibt den
//! zurückgegebenen Zustand selbst auf die LED.

/// Periodischer Toggler für die Heartbeat-LED
///
/// Die nächste Schaltzeit wird kumulativ fortgeschrieben (letzter Wechsel +
/// Intervall, nicht "jetzt + Intervall"), damit sich bei verspätetem Polling
/// über lange Laufzeiten kein Drift ansammelt.
pub struct Heartbeat {
    /// Blink-Intervall in Millisekunden
    interval_ms: u64,
    /// Zeitpunkt des letzten Zustandswechsels (monotone Millisekunden)
    last_change_ms: u64,
    /// Aktueller LED-Zustand
    state: bool,
}

impl Heartbeat {
    /// Erstellt einen Heartbeat, Startzustand ist "ein"
    ///
    /// `now_ms` ist der aktuelle monotone Zeitstempel, ab dem das erste
    /// Intervall läuft.
    pub const fn new(interval_ms: u64, now_ms: u64) -> Self {
        Self {
            interval_ms,
            last_change_ms: now_ms,
            state: true,
        }
    }

    /// Prüft ob das Intervall abgelaufen ist und kippt dann den Zustand
    ///
    /// Gibt `Some(neuer_zustand)` beim Wechsel zurück, sonst `None`.
    pub fn poll(&mut self, now_ms: u64) -> Option<bool> {
        if now_ms.saturating_sub(self.last_change_ms) >= self.interval_ms {
            self.last_change_ms += self.interval_ms;
            self.state = !self.state;
            Some(self.state)
        } else {
            None
        }
    }

    /// Aktueller Zustand (für das Schreiben des Startpegels)
    pub const fn state(&self) -> bool {
        self.state
    }
}
