use std::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const DEBUG_ENV: &str = "OSU_API_DEBUG";

/// Logging setup for binaries built on this crate.
pub struct LoggingConfig;

impl LoggingConfig {
    /// Installs a global subscriber.
    ///
    /// `RUST_LOG` wins when set. Otherwise `OSU_API_DEBUG` switches between a
    /// quiet default and crate-level debug output with source locations.
    /// Calling it twice is harmless; the second call is ignored.
    ///
    /// ```no_run
    /// use osu_api::utils::LoggingConfig;
    ///
    /// LoggingConfig::init();
    /// ```
    pub fn init() {
        let is_debug = Self::is_debug();

        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => {
                if is_debug {
                    EnvFilter::new("osu_api=debug,info")
                } else {
                    EnvFilter::new("osu_api=info,warn")
                }
            }
        };

        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(is_debug)
            .with_file(is_debug)
            .with_line_number(is_debug);

        let installed = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .is_ok();

        if installed && is_debug {
            tracing::debug!("debug logging enabled");
        }
    }

    pub fn is_debug() -> bool {
        env::var(DEBUG_ENV).is_ok()
    }
}
