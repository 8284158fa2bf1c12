// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod clock;
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    DailyScheduler, Heartbeat, ScheduleEntry, SchedulerError, SwitchCommand, SwitchError,
    SwitchWriter,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  Receiver<'static, NoopRawMutex, SwitchCommand, 1>
// Nutze:  SwitchCommandReceiver

/// Channel für Override-Kommandos (Taster → Scheduler Task)
/// - 1: Nachrichten-Kapazität (nur ein Kommando zur Zeit)
pub type SwitchCommandChannel = Channel<NoopRawMutex, SwitchCommand, 1>;

/// Sender für Override-Kommandos (Taster → Scheduler Task)
/// Erzeugt aus SwitchCommandChannel
pub type SwitchCommandSender = Sender<'static, NoopRawMutex, SwitchCommand, 1>;

/// Receiver für Override-Kommandos (Scheduler Task empfängt)
/// Empfängt Kommandos von SwitchCommandSender
pub type SwitchCommandReceiver = Receiver<'static, NoopRawMutex, SwitchCommand, 1>;
