//! Tagesschaltuhr - Pure Business Logic
//!
//! Bildet die aktuelle Uhrzeit auf den gültigen Schaltplan-Eintrag ab
//! und meldet Zustandswechsel über einen Callback (testbar, keine
//! Hardware-Dependencies!)

use crate::types::{ScheduleEntry, SchedulerError};

/// Tagesschaltuhr über einem festen Schaltplan
///
/// Der Scheduler borgt den Schaltplan nur (`&'a [ScheduleEntry]`), der Plan
/// muss den Scheduler überleben. Der Callback wird synchron mit dem neuen
/// Ausgangszustand aufgerufen, sobald sich dieser ändert - bei einem
/// Eintragswechsel durch [`evaluate`](DailyScheduler::evaluate) oder bei
/// einem manuellen [`toggle`](DailyScheduler::toggle). Der Callback darf
/// nicht blockieren und nicht re-entrant zurück in den Scheduler rufen.
///
/// # Beispiel
///
/// ```
/// # use esp_core::{DailyScheduler, ScheduleEntry};
/// let table = [ScheduleEntry::new(600, true), ScheduleEntry::new(1800, false)];
/// let mut scheduler = DailyScheduler::new(&table, |_| {}).unwrap();
///
/// assert_eq!(scheduler.evaluate(500), false);  // vor 06:00 gilt der letzte Eintrag
/// assert_eq!(scheduler.evaluate(1200), true);  // [06:00, 18:00) -> ein
/// ```
pub struct DailyScheduler<'a, F> {
    /// Schaltplan (geborgt, aufsteigend sortiert)
    table: &'a [ScheduleEntry],
    /// Index des aktuell gültigen Eintrags (None = noch nie ausgewertet,
    /// erzwingt den Callback bei der ersten Auswertung)
    active: Option<usize>,
    /// Aktueller Ausgangszustand (nur gültig wenn `active` gesetzt ist)
    state: bool,
    /// Callback des Aufrufers für Zustandswechsel
    callback: F,
}

impl<'a, F: FnMut(bool)> DailyScheduler<'a, F> {
    /// Erstellt einen Scheduler über dem gegebenen Schaltplan
    ///
    /// Der Plan muss mindestens einen Eintrag haben, sonst
    /// `SchedulerError::EmptyTable`. Die Sortierung wird NICHT geprüft
    /// (Vorbedingung des Aufrufers, siehe [`ScheduleEntry`]).
    pub fn new(table: &'a [ScheduleEntry], callback: F) -> Result<Self, SchedulerError> {
        if table.is_empty() {
            return Err(SchedulerError::EmptyTable);
        }
        Ok(Self {
            table,
            active: None,
            state: false,
            callback,
        })
    }

    /// Wertet die aktuelle Uhrzeit gegen den Schaltplan aus
    ///
    /// `time` ist eine hhmm-Ganzzahl in [0, 2359]. Die Einträge zerlegen den
    /// Tag in halboffene Intervalle [entry[i].time, entry[i+1].time); das
    /// Intervall des letzten Eintrags läuft über Mitternacht bis zum ersten
    /// Eintrag des Folgetags.
    ///
    /// Wechselt der gültige Eintrag (auch bei der allerersten Auswertung),
    /// wird der Ausgang auf dessen Zustand gesetzt und der Callback genau
    /// einmal aufgerufen. Hat ein vorheriges `toggle()` den Ausgang vom
    /// nominellen Zustand weggekippt, setzt die nächste Auswertung ihn
    /// zurück und ruft den Callback ebenfalls auf - ein Override ist
    /// transient, kein Plan-Edit. Eine erneute Auswertung ohne Änderung
    /// löst keinen Callback aus.
    ///
    /// Gibt den resultierenden Ausgangszustand zurück.
    pub fn evaluate(&mut self, time: u16) -> bool {
        let last = self.table.len() - 1;

        // Liegt die Uhrzeit vor dem ersten oder ab dem letzten Eintrag,
        // gilt der letzte Eintrag: er deckt den Überlauf über Mitternacht
        // bis zum ersten Eintrag des nächsten Tags ab. Bei einem Plan mit
        // nur einem Eintrag ist diese Bedingung immer wahr.
        let current = if time < self.table[0].time || time >= self.table[last].time {
            last
        } else {
            // Rückwärts ab dem vorletzten Eintrag suchen: der erste Eintrag
            // mit time >= entry.time gilt. Durch den Randfall oben ist
            // time >= table[0].time garantiert.
            self.table[..last]
                .iter()
                .rposition(|entry| time >= entry.time)
                .unwrap_or(0)
        };

        let nominal = self.table[current].state;
        if self.active != Some(current) || self.state != nominal {
            self.active = Some(current);
            self.state = nominal;
            (self.callback)(self.state);
        }
        self.state
    }

    /// Manueller Override: kippt den Ausgang unabhängig vom Schaltplan
    ///
    /// Ruft den Callback genau einmal mit dem neuen Zustand auf und gibt
    /// diesen zurück. Der gültige Eintrags-Index bleibt unverändert, daher
    /// stellt der nächste `evaluate()`-Aufruf den nominellen Zustand wieder
    /// her, solange der Eintrag nicht gewechselt hat.
    ///
    /// Vor der ersten Auswertung gibt es keinen definierten Ausgangszustand:
    /// dann `SchedulerError::NotEvaluated`.
    pub fn toggle(&mut self) -> Result<bool, SchedulerError> {
        if self.active.is_none() {
            return Err(SchedulerError::NotEvaluated);
        }
        self.state = !self.state;
        (self.callback)(self.state);
        Ok(self.state)
    }

    /// Schaltplan-Einträge für Diagnose/Logging (read-only)
    pub fn entries(&self) -> &[ScheduleEntry] {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    const TABLE: [ScheduleEntry; 2] = [
        ScheduleEntry::new(600, true),
        ScheduleEntry::new(1800, false),
    ];

    #[test]
    fn test_empty_table_rejected() {
        let result = DailyScheduler::new(&[], |_| {});
        assert!(matches!(result, Err(SchedulerError::EmptyTable)));
    }

    #[test]
    fn test_before_first_entry_wraps_to_last() {
        let calls = Cell::new(0usize);
        let mut scheduler = DailyScheduler::new(&TABLE, |_| calls.set(calls.get() + 1)).unwrap();

        // 05:00 liegt vor 06:00 -> letzter Eintrag (Überlauf vom Vortag)
        assert_eq!(scheduler.evaluate(500), false);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_exact_entry_time_activates_entry() {
        let mut scheduler = DailyScheduler::new(&TABLE, |_| {}).unwrap();

        // Halboffene Intervalle: die Startzeit gehört zum Eintrag
        assert_eq!(scheduler.evaluate(600), true);
        assert_eq!(scheduler.evaluate(1800), false);
    }

    #[test]
    fn test_no_callback_without_transition() {
        let calls = Cell::new(0usize);
        let mut scheduler = DailyScheduler::new(&TABLE, |_| calls.set(calls.get() + 1)).unwrap();

        scheduler.evaluate(700);
        scheduler.evaluate(700);
        scheduler.evaluate(1215); // gleicher Eintrag, kein Wechsel
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_toggle_before_evaluate_is_error() {
        let mut scheduler = DailyScheduler::new(&TABLE, |_| {}).unwrap();
        assert_eq!(scheduler.toggle(), Err(SchedulerError::NotEvaluated));
    }

    #[test]
    fn test_toggle_flips_and_reports() {
        let last = Cell::new(None);
        let mut scheduler = DailyScheduler::new(&TABLE, |s| last.set(Some(s))).unwrap();

        assert_eq!(scheduler.evaluate(1200), true);
        assert_eq!(scheduler.toggle(), Ok(false));
        assert_eq!(last.get(), Some(false));
    }

    #[test]
    fn test_entries_exposes_table() {
        let scheduler = DailyScheduler::new(&TABLE, |_| {}).unwrap();
        assert_eq!(scheduler.entries(), &TABLE[..]);
    }
}
