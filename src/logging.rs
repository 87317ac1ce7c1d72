//! Debug logging to a file
//!
//! The prompt owns the terminal, so log output goes to
//! `<temp dir>/autoprompt.log` instead. Only debug builds install a logger;
//! release builds compile the `log` macros down to no-ops at runtime.

use std::path::PathBuf;

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("autoprompt.log")
}

/// Install the file logger; `RUST_LOG` picks the level (default `debug`)
#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::File;
    use std::io::Write;

    let Ok(file) = File::create(log_path()) else {
        return;
    };

    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logging to {}", log_path().display());
    }
}

#[cfg(not(debug_assertions))]
pub fn init() {}
