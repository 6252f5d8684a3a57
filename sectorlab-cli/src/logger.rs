//! Process-wide logger setup.

use env_logger::Builder;
use std::io::Write;

/// Log to stderr; `RUST_LOG` overrides the default `warn` level.
pub fn log_init() {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%m-%dT%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
