use log::{LevelFilter, Metadata, Record};
use rtt_target::{rprintln, rtt_init_print};

struct RttLogger;

static LOGGER: RttLogger = RttLogger;

impl log::Log for RttLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            rprintln!("{:<5} {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) {
    rtt_init_print!();

    // fails only if a logger is already set
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
