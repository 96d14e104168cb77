//! Firmware entry for the ESP32-S3 board with the TM1622 segment LCD
//!
//! Shows a segment test, a greeting and then a hexadecimal seconds counter.

#[cfg(target_os = "espidf")]
use anyhow::Context;

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::delay::{Ets, FreeRtos};
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::gpio;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::peripherals::Peripherals;
#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::{esp, gpio_intr_disable, gpio_pulldown_dis, gpio_pullup_dis, EspError};

#[cfg(target_os = "espidf")]
use tm1622_lcd::{Pins, Tm1622};

/// Push-pull output without pull resistors or interrupts, as the TM1622 lines expect
#[cfg(target_os = "espidf")]
fn plain_output(gpio_num: i32) -> Result<(), EspError> {
    // PinDriver::output() resets the pin, which turns the pull-up on
    unsafe {
        esp!(gpio_pullup_dis(gpio_num))?;
        esp!(gpio_pulldown_dis(gpio_num))?;
        esp!(gpio_intr_disable(gpio_num))?;
    }
    Ok(())
}

// https://docs.esp-rs.org/esp-idf-svc/esp_idf_svc/
#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take().context("Could not take peripherals")?;
    let pins = peripherals.pins;

    log::info!(
        "Configuring TM1622 lines CS={} WR={} DATA={}",
        Pins::CS,
        Pins::WR,
        Pins::DATA
    );
    let cs = gpio::PinDriver::output(pins.gpio15).context("Failed to set CS pin as output")?; // Pins::CS
    let wr = gpio::PinDriver::output(pins.gpio16).context("Failed to set WR pin as output")?; // Pins::WR
    let data =
        gpio::PinDriver::output(pins.gpio17).context("Failed to set DATA pin as output")?; // Pins::DATA

    for pin in [cs.pin(), wr.pin(), data.pin()] {
        plain_output(pin).with_context(|| format!("Failed to configure GPIO{}", pin))?;
    }

    // Ets busy-waits in the ROM, FreeRtos would sleep for at least one tick per bit
    let mut lcd = Tm1622::new_initialized(cs, wr, data, Ets)
        .map_err(|e| anyhow::anyhow!("TM1622 init failed: {:?}", e))?;
    log::info!("TM1622 initialization successful");

    log::info!("Segment test");
    if let Err(e) = lcd.set_all(true) {
        log::error!("Failed to turn all segments on: {:?}", e);
    }
    FreeRtos::delay_ms(1000);

    if let Err(e) = lcd.put_string("C0FFEE") {
        log::error!("Failed to write greeting: {:?}", e);
    }
    FreeRtos::delay_ms(2000);

    let mut seconds: u32 = 0;
    loop {
        // Right aligned, the padding renders as blank digits
        let text = format!("{:10X}", seconds);
        if let Err(e) = lcd.put_string(&text) {
            log::error!("Failed to write counter {}: {:?}", seconds, e);
        }

        FreeRtos::delay_ms(1000);
        seconds = seconds.wrapping_add(1);
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("tm1622-lcd firmware only runs on the ESP32-S3, use `cargo test` for the driver");
}
