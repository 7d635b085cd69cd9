use simplelog::{
    ColorChoice, CombinedLogger, LevelFilter, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

/// Install the global logger: warnings to stderr (debug when verbose),
/// plus a best-effort debug log at ~/.local/share/lineparse/lineparse.log.
/// Failures degrade to stderr-only; logging must never take the
/// program down.
pub fn init(verbose: bool) {
    let term_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(file) = open_log_file() {
        loggers.push(WriteLogger::new(
            LevelFilter::Debug,
            simplelog::Config::default(),
            file,
        ));
    }

    let _ = CombinedLogger::init(loggers);
}

/// Open the session log for appending, creating the directory if needed.
fn open_log_file() -> Option<std::fs::File> {
    let home = std::env::var_os("HOME")?;
    let log_dir = std::path::Path::new(&home).join(".local/share/lineparse");
    std::fs::create_dir_all(&log_dir).ok()?;

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("lineparse.log"))
        .ok()
}
