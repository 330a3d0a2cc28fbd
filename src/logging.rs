use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static TUI_MODE: AtomicBool = AtomicBool::new(false);

/// Set up logging before the terminal enters the alternate screen.
/// Startup messages (config load, source selection) go to the console
/// through env_logger; every record is also drained into tui-logger so
/// the in-app log view has the full history once the TUI takes over.
pub fn init(level: log::LevelFilter) {
    // env_logger owns the global logger; tui-logger only receives the
    // drained records, so the two never fight over installation.
    tui_logger::set_default_level(level);

    let drain = tui_logger::Drain::new();
    env_logger::Builder::default()
        .filter_level(level)
        .format(move |buf, record| {
            drain.log(record);

            if TUI_MODE.load(Ordering::Relaxed) {
                // The alternate screen owns stdout now.
                return Ok(());
            }

            let timestamp = chrono::Local::now().format("%H:%M:%S");
            writeln!(buf, "[{timestamp}] {}: {}", record.level(), record.args())
        })
        .init();

    log::debug!("Logger initialized at {level}");
}

/// Stop writing to the console once the alternate screen is active.
pub fn enter_tui_mode() {
    TUI_MODE.store(true, Ordering::Relaxed);
}

/// Resume console output after the terminal is restored.
pub fn leave_tui_mode() {
    TUI_MODE.store(false, Ordering::Relaxed);
}
