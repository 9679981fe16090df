use tracing_subscriber::EnvFilter;

/// Variable holding the filter directives, e.g. `CGIENV_LOG=debug`.
pub const LOG_ENV: &str = "CGIENV_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr-only subscriber. Stdout carries the CGI response and
/// must never see log lines. Returns `false` when no subscriber could be
/// installed; the request is answered either way.
pub fn init_logging() -> bool {
    let directives = std::env::var(LOG_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
