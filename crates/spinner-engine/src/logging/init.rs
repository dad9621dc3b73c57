use std::sync::Once;

/// Default filter applied when neither the config nor `RUST_LOG` supplies one.
///
/// wgpu's internals are chatty at `info`; cap them at `warn`.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "spinner_engine=debug,wgpu=warn").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Resolves the filter string that `init_logging` will install.
    ///
    /// Precedence: explicit config filter, then `rust_log`, then [`DEFAULT_FILTER`].
    pub fn resolve_filter(&self, rust_log: Option<&str>) -> String {
        self.env_filter
            .as_deref()
            .or(rust_log)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_FILTER)
            .to_string()
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = config.resolve_filter(rust_log.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        // `try_init` so a logger installed by a test harness does not abort us.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized (filter: {filter})");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_rust_log() {
        let cfg = LoggingConfig {
            env_filter: Some("debug".to_string()),
            ..Default::default()
        };
        assert_eq!(cfg.resolve_filter(Some("trace")), "debug");
    }

    #[test]
    fn rust_log_used_without_explicit_filter() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.resolve_filter(Some("spinner_engine=trace")), "spinner_engine=trace");
    }

    #[test]
    fn falls_back_to_default_filter() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.resolve_filter(None), DEFAULT_FILTER);
        assert_eq!(cfg.resolve_filter(Some("  ")), DEFAULT_FILTER);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default());
    }
}
