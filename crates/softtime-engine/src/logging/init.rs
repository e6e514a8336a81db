use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "softtime_clock=debug,usvg=error").
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
    /// Maps repeated `-v` / a `-q` flag onto a filter.
    ///
    /// `RUST_LOG` still wins when no flag was given.
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let env_filter = match (quiet, verbose) {
            (true, _) => Some("error".to_string()),
            (false, 0) => None,
            (false, 1) => Some(format!("info,{CRATES}=debug")),
            (false, _) => Some(format!("debug,{CRATES}=trace")),
        };
        Self { env_filter, ..Self::default() }
    }
}

const CRATES: &str = "softtime_engine,softtime_clock,softtime";

/// The svg stack is chatty about font fallback; keep it at warn by default.
const DEFAULT_FILTER: &str = "info,usvg=warn,resvg=warn,fontdb=warn";

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match (config.env_filter, std::env::var("RUST_LOG")) {
            (Some(filter), _) => builder.parse_filters(&filter),
            (None, Ok(filter)) => builder.parse_filters(&filter),
            (None, Err(_)) => builder.parse_filters(DEFAULT_FILTER),
        };

        builder.write_style(config.write_style);
        builder.format_timestamp_millis();
        builder.init();

        log::debug!("logging initialized");
    });
}
