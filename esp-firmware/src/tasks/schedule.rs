// Scheduler Task - Treibt die Tagesschaltuhr im Minutentakt
use defmt::{error, info};
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Timer};
use esp_hal::gpio::{Level, Output, OutputConfig};

use crate::clock::WallClock;
use crate::config::{CLOCK_START, SCHEDULE, TICK_INTERVAL_SECS};
use crate::hal::GpioSwitchWriter;
use crate::{DailyScheduler, SwitchCommand, SwitchCommandReceiver, SwitchWriter};

/// Scheduler Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Diese Funktion enthält die komplette Zeitschaltuhr-Steuerung:
/// - Wertet den Schaltplan einmal pro Minute gegen die Software-Uhr aus
/// - Der Callback des Schedulers schreibt Zustandswechsel auf den Ausgang
/// - Empfängt Override-Kommandos vom Taster-Task und kippt den Ausgang
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `W: SwitchWriter` ermöglicht:
/// - Real Hardware (GpioSwitchWriter) im Production-Code
/// - Mock Implementation (MockSwitchWriter) in Tests
///
/// # Parameter
/// - `relay`: Schaltausgang (Hardware oder Mock), wird vom Callback besessen
/// - `command_receiver`: Channel Receiver für Override-Kommandos
pub async fn schedule_logic<W: SwitchWriter>(
    mut relay: W,
    command_receiver: SwitchCommandReceiver,
) {
    // Der Callback besitzt den Ausgang: jeder Zustandswechsel
    // (Plan-Übergang oder Override) landet genau hier
    let output_sink = move |on: bool| {
        info!("Zustandswechsel: Ausgang {}", on);
        if relay.write(on).is_err() {
            error!("Schreiben auf den Schaltausgang fehlgeschlagen");
        }
    };

    let mut scheduler = match DailyScheduler::new(&SCHEDULE, output_sink) {
        Ok(scheduler) => scheduler,
        Err(e) => {
            // Leerer Schaltplan ist ein Konfigurationsfehler
            error!("Scheduler-Konfiguration ungültig: {}", e);
            return;
        }
    };

    // Schaltplan einmalig loggen (Diagnose)
    info!("Schaltplan mit {} Einträgen:", scheduler.entries().len());
    for entry in scheduler.entries() {
        info!("  {}", entry);
    }

    // Software-Uhr mit der konfigurierten Startzeit initialisieren
    let start = match CLOCK_START.parse::<u16>() {
        Ok(hhmm) => hhmm,
        Err(_) => {
            error!("CLOCK_START '{}' ist keine hhmm-Zahl, starte bei 0000", CLOCK_START);
            0
        }
    };
    let mut clock = WallClock::from_hhmm(start);

    // Hauptschleife: einmal pro Minute auswerten, Overrides sofort behandeln
    loop {
        let state = scheduler.evaluate(clock.hhmm());
        info!("Uhrzeit {=u16:04}: Ausgang {}", clock.hhmm(), state);

        let tick = Timer::after(Duration::from_secs(TICK_INTERVAL_SECS));
        match select(tick, command_receiver.receive()).await {
            Either::First(()) => clock.advance_minute(),
            Either::Second(SwitchCommand::Override) => {
                // Override kippt nur den Ausgang, nicht den Plan: der
                // nächste Tick stellt den nominellen Zustand wieder her,
                // solange der Eintrag nicht gewechselt hat
                match scheduler.toggle() {
                    Ok(state) => info!("Override: Ausgang {}", state),
                    Err(_) => error!("Override vor der ersten Auswertung ignoriert"),
                }
            }
        }
    }
}

/// Scheduler Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `schedule_logic()` Funktion auf.
///
/// # Parameter
/// - `relay_pin`: GPIO4 Peripheral für den Relais-Treiber
/// - `command_receiver`: Channel Receiver für Override-Kommandos
#[embassy_executor::task]
pub async fn schedule_task(
    relay_pin: esp_hal::peripherals::GPIO4<'static>,
    command_receiver: SwitchCommandReceiver,
) {
    // Ausgang initialisieren: aus, bis die erste Auswertung läuft
    let relay = GpioSwitchWriter::new(Output::new(relay_pin, Level::Low, OutputConfig::default()));

    // Business Logic aufrufen (testbar!)
    schedule_logic(relay, command_receiver).await;
}
