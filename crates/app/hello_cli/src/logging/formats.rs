use std::io::{self, Write};

use flexi_logger::DeferredNow;
use log::{Level, Record};

/// `LEVEL [target] message`, with debug and trace records also carrying a
/// timestamp.
pub fn cli_format(w: &mut dyn Write, now: &mut DeferredNow, record: &Record) -> io::Result<()> {
    match record.level() {
        Level::Debug | Level::Trace => write!(
            w,
            "{} {:<5} [{}] {}",
            now.format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        ),
        level => write!(w, "{:<5} [{}] {}", level, record.target(), record.args()),
    }
}
