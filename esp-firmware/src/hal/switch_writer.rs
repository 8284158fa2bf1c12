// GPIO Switch Writer - Production-Implementierung des SwitchWriter Traits
//
// Schreibt den binären Ausgangszustand auf einen Push-Pull GPIO-Pin
// (Relais-Treiber oder LED). Tests nutzen stattdessen den MockSwitchWriter
// aus esp-tests.

use esp_core::{SwitchError, SwitchWriter};
use esp_hal::gpio::{Level, Output};

/// Schaltausgang über einen GPIO-Pin
pub struct GpioSwitchWriter<'a> {
    pin: Output<'a>,
}

impl<'a> GpioSwitchWriter<'a> {
    /// Erstellt einen GpioSwitchWriter über einem fertig konfigurierten
    /// Output-Pin (Startpegel setzt der Aufrufer)
    pub fn new(pin: Output<'a>) -> Self {
        Self { pin }
    }
}

impl SwitchWriter for GpioSwitchWriter<'_> {
    fn write(&mut self, on: bool) -> Result<(), SwitchError> {
        // GPIO-Pegel setzen ist auf dieser HAL unfehlbar
        self.pin.set_level(if on { Level::High } else { Level::Low });
        Ok(())
    }
}
