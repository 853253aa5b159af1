// A minimal stderr logger for the `log` crate. Filtering is left to the
// global max level set in main.

use log::Log;

#[derive(Debug)]
pub struct Logger;

impl Logger {
    /// Installs the logger as the global logger.
    pub fn init() -> Result<&'static Logger, log::SetLoggerError> {
        static LOGGER: Logger = Logger;
        log::set_logger(&LOGGER)?;
        Ok(&LOGGER)
    }
}

impl Log for Logger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        match (record.file(), record.line()) {
            (Some(file), Some(line)) => {
                eprintln!("{}|{}:{}: {}", record.level(), file, line, record.args());
            }
            _ => {
                eprintln!("{}: {}", record.level(), record.args());
            }
        }
    }

    fn flush(&self) {}
}
