//! COM1 backend for the `log` facade.
//!
//! Off by default: without the `serial-log` feature [`init`] installs nothing,
//! every `log` macro in the crate short-circuits on the max level and the VGA
//! cell stays the only thing the routine writes.

#[cfg(all(feature = "serial-log", target_arch = "x86_64"))]
mod serial {
    use core::fmt::Write;

    use log::{LevelFilter, Metadata, Record, SetLoggerError};
    use spin::Mutex;
    use uart_16550::SerialPort;

    const COM1_PORT: u16 = 0x3F8;

    static SERIAL1: Mutex<Option<SerialPort>> = Mutex::new(None);

    struct SerialLogger;

    static LOGGER: SerialLogger = SerialLogger;

    impl log::Log for SerialLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            // try_lock: the panic handler may log while a record is half written
            if let Some(mut guard) = SERIAL1.try_lock() {
                if let Some(port) = guard.as_mut() {
                    let _ = writeln!(
                        port,
                        "[{}] {}",
                        record.level().as_str(),
                        record.args()
                    );
                }
            }
        }

        fn flush(&self) {}
    }

    pub fn init() -> Result<(), SetLoggerError> {
        let mut port = unsafe { SerialPort::new(COM1_PORT) };
        port.init();
        *SERIAL1.lock() = Some(port);
        log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Trace))
    }
}

#[cfg(all(feature = "serial-log", target_arch = "x86_64"))]
pub use serial::init;

#[cfg(not(all(feature = "serial-log", target_arch = "x86_64")))]
pub fn init() -> Result<(), log::SetLoggerError> {
    Ok(())
}

#[cfg(all(test, not(feature = "serial-log")))]
mod tests {
    use super::*;

    #[test]
    fn init_without_backend_is_a_no_op() {
        assert!(init().is_ok());
        assert_eq!(log::max_level(), log::LevelFilter::Off);
    }
}
