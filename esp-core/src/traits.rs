//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

/// Fehler-Typ für Schaltausgangs-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchError {
    WriteFailed,
}

/// Trait für den binären Schaltausgang
///
/// Abstrahiert den Zugriff auf den geschalteten Ausgang (Relais, LED).
///
/// # Implementierungen
/// - **Production:** GpioSwitchWriter (ESP32 GPIO Output)
/// - **Testing:** MockSwitchWriter (in-memory Mock)
pub trait SwitchWriter: Send {
    /// Schreibt den Ausgangszustand (true = ein, false = aus)
    ///
    /// # Fehlerbehandlung
    /// Gibt `SwitchError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, on: bool) -> Result<(), SwitchError>;
}
