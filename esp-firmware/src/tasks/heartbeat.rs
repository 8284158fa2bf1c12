// Heartbeat Task - Blinkende LED als Lebenszeichen
use defmt::error;
use embassy_time::{Duration, Instant, Timer};
use esp_hal::gpio::{Level, Output, OutputConfig};

use crate::config::{HEARTBEAT_INTERVAL_MS, HEARTBEAT_POLL_MS};
use crate::hal::GpioSwitchWriter;
use crate::{Heartbeat, SwitchWriter};

/// Heartbeat Logic - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Schreibt den Startpegel und kippt die LED dann bei jedem abgelaufenen
/// Intervall. Die Schaltzeiten werden vom Heartbeat kumulativ
/// fortgeschrieben, das Polling darf also etwas jittern.
///
/// # Parameter
/// - `led`: LED Writer (Hardware oder Mock)
pub async fn heartbeat_logic<W: SwitchWriter>(mut led: W) {
    let mut heartbeat = Heartbeat::new(HEARTBEAT_INTERVAL_MS, Instant::now().as_millis());

    if led.write(heartbeat.state()).is_err() {
        error!("Schreiben auf die Heartbeat-LED fehlgeschlagen");
    }

    loop {
        Timer::after(Duration::from_millis(HEARTBEAT_POLL_MS)).await;

        if let Some(state) = heartbeat.poll(Instant::now().as_millis()) {
            if led.write(state).is_err() {
                error!("Schreiben auf die Heartbeat-LED fehlgeschlagen");
            }
        }
    }
}

/// Heartbeat Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `led_pin`: GPIO5 Peripheral für die Heartbeat-LED
#[embassy_executor::task]
pub async fn heartbeat_task(led_pin: esp_hal::peripherals::GPIO5<'static>) {
    // Startpegel "ein", passend zum Startzustand des Heartbeats
    let led = GpioSwitchWriter::new(Output::new(led_pin, Level::High, OutputConfig::default()));

    heartbeat_logic(led).await;
}
