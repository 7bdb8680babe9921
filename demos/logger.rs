use log::{LevelFilter, Log, Metadata, Record};

/// Prints every record as `LEVEL message`, errors to stderr.
pub struct MinimalLogger;

static LOGGER: MinimalLogger = MinimalLogger;

impl Log for MinimalLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.level() > LevelFilter::Error {
            println!("{:<5} {}", record.level(), record.args())
        } else {
            eprintln!("{:<5} {}", record.level(), record.args())
        }
    }

    fn flush(&self) {}
}

pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}
