use std::path::Path;

#[cfg(feature = "debug-tracing")]
use std::sync::Mutex;

#[cfg(feature = "debug-tracing")]
use tracing_appender::non_blocking::WorkerGuard;
#[cfg(feature = "debug-tracing")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "debug-tracing")]
static TRACING_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Installs a global subscriber for the keyboard extension.
///
/// Logs go to an hourly rolling file under `log_dir` when one is given,
/// otherwise to stderr. Filtering follows `RUST_LOG`, defaulting to `debug`.
#[cfg(feature = "debug-tracing")]
pub fn init_tracing(log_dir: Option<&Path>) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_level(true)
        .with_target(true);

    let installed = match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::hourly(dir, "keyboard.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let installed = builder
                .with_writer(non_blocking)
                .with_ansi(false)
                .try_init()
                .is_ok();
            if installed {
                store_tracing_guard(guard);
            }
            installed
        }
        None => builder
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .try_init()
            .is_ok(),
    };

    if installed {
        tracing::info!("tracing initialized");
    }
}

#[cfg(feature = "debug-tracing")]
fn store_tracing_guard(guard: WorkerGuard) {
    if let Ok(mut slot) = TRACING_GUARD.lock() {
        *slot = Some(guard);
    }
}

#[cfg(not(feature = "debug-tracing"))]
pub fn init_tracing(_log_dir: Option<&Path>) {}
