use core::fmt::Write;

use bl1_soc::arm::def::{
    ARM_CONSOLE_BAUDRATE, PLAT_ARM_BOOT_UART_BASE, PLAT_ARM_BOOT_UART_CLK_IN_HZ,
};
use drivers::{
    console::{Console, Pl011},
    DriverError,
};
use log::{LevelFilter, Log, Metadata, Record};
use spin::Mutex;

static UART: Mutex<Option<Pl011>> = Mutex::new(None);
static LOGGER: UartLogger = UartLogger;

const MAX_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

struct UartLogger;

impl Log for UartLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= MAX_LEVEL
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Some(uart) = UART.lock().as_mut() {
            let _ = writeln!(uart, "{:<5} {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        if let Some(uart) = UART.lock().as_ref() {
            uart.flush();
        }
    }
}

/// The boot UART. Once initialised it carries the `log` output.
#[derive(Default)]
pub struct BootConsole;

impl Console for BootConsole {
    fn init(&mut self) -> Result<(), DriverError> {
        let mut uart = unsafe {
            Pl011::new(
                PLAT_ARM_BOOT_UART_BASE,
                PLAT_ARM_BOOT_UART_CLK_IN_HZ,
                ARM_CONSOLE_BAUDRATE,
            )
        };
        uart.init()?;
        *UART.lock() = Some(uart);
        // Already installed if the console is brought up twice
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(MAX_LEVEL);
        }
        Ok(())
    }
}
