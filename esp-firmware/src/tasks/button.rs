// Button Task - Override-Taster (BOOT-Taste des DevKits)
use defmt::info;
use embassy_time::{Duration, Timer};
use esp_hal::gpio::{Input, InputConfig, Pull};

use crate::config::BUTTON_DEBOUNCE_MS;
use crate::{SwitchCommand, SwitchCommandSender};

/// Button Task - sendet bei jedem Tastendruck ein Override-Kommando
///
/// Die BOOT-Taste zieht GPIO9 gegen Masse, daher Pull-Up und
/// fallende Flanke.
///
/// # Parameter
/// - `button_pin`: GPIO9 Peripheral für den Taster
/// - `command_sender`: Channel Sender zum Scheduler Task
#[embassy_executor::task]
pub async fn button_task(
    button_pin: esp_hal::peripherals::GPIO9<'static>,
    command_sender: SwitchCommandSender,
) {
    let mut button = Input::new(button_pin, InputConfig::default().with_pull(Pull::Up));

    loop {
        button.wait_for_falling_edge().await;
        info!("Override-Taster gedrückt");
        command_sender.send(SwitchCommand::Override).await;

        // Entprellung: weitere Flanken kurz ignorieren
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
    }
}
