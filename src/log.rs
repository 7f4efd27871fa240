#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Initialize logging for the word-grid solver.
///
/// - Native (CLI): `Debug` if `debug_enabled`, else `Info`; `RUST_LOG` wins
///   when set. Output carries no timestamp, module path or target.
/// - WASM: logs to the browser console at `Debug` or `Info`.
///
/// On native builds only the first call installs a logger.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled { log::Level::Debug } else { log::Level::Info };

        match console_log::init_with_level(level) {
            Ok(()) => log::info!("WASM logger initialized at {level:?} level"),
            Err(e) => {
                // keep the module usable without logs
                let msg = format!("Failed to initialize console_log: {e}. Logging will be unavailable.");
                web_sys::console::error_1(&msg.into());
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled { LevelFilter::Debug } else { LevelFilter::Info };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        if builder.try_init().is_ok() {
            log::debug!("native logger initialized at {level:?} level");
        }
    }
}
