use std::sync::Once;

use log::LevelFilter;

/// Logger configuration for pipeline diagnostics.
///
/// `env_filter` uses `env_logger` filter syntax, e.g.
/// `"softpipe_engine::pipeline=trace"` to see every rasterized triangle.
/// When unset, `RUST_LOG` is consulted, then `fallback_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub fallback_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
    pub show_module_path: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            fallback_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
            show_module_path: true,
        }
    }
}

impl LoggingConfig {
    /// Config with an explicit filter string, ignoring `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }

    fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();

        match self.env_filter.as_deref() {
            Some(filter) => {
                builder.parse_filters(filter);
            }
            None => match std::env::var("RUST_LOG") {
                Ok(filter) => {
                    builder.parse_filters(&filter);
                }
                Err(_) => {
                    builder.filter_level(self.fallback_level);
                }
            },
        }

        builder
            .write_style(self.write_style)
            .format_module_path(self.show_module_path);
        builder
    }
}

static INIT: Once = Once::new();

/// Installs the global logger once; later calls are no-ops.
///
/// A logger installed elsewhere (e.g. by a test harness) is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        if config.builder().try_init().is_err() {
            return;
        }
        log::debug!("logging initialized (fallback level {})", config.fallback_level);
    });
}
