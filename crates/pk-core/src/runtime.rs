//! Logging and graceful-shutdown plumbing, matching the dual terminal+file
//! logger and stdin-poll shutdown pattern used throughout the server.

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Initializes dual logging (terminal + file) with a timestamped log file.
///
/// Writes DEBUG level to file, INFO to terminal. The file path is taken from
/// `LOG_PATH` if set, otherwise `logs/{unix_timestamp}.log`.
pub fn init_logging() {
    let path = std::env::var("LOG_PATH").unwrap_or_else(|_| {
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time moves forward")
            .as_secs();
        std::fs::create_dir_all("logs").expect("create logs directory");
        format!("logs/{}.log", time)
    });
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(&path).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    let _ = simplelog::CombinedLogger::init(vec![term, file]);
}

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// True once a graceful shutdown has been requested.
pub fn shutdown_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// Registers a Ctrl+C handler that requests a graceful shutdown: the accept
/// loop stops taking new connections and in-flight hands are allowed to
/// finish rather than being torn down mid-action.
pub fn arm_ctrlc() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("interrupt received, shutting down gracefully");
            SHUTDOWN.store(true, Ordering::Relaxed);
        }
    });
}
