use crate::{
    config::Config,
    context::{RequestContext, Route},
    render::{render_fallback, render_listing},
    response::Response,
};
use anyhow::Result;
use std::{path::Path, sync::OnceLock};
use tracing::{debug, warn};

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(|| load_config_or_default(&Config::config_file_path()))
}

/// An unreadable or malformed config file is reported and then ignored, so
/// the request is still answered.
fn load_config_or_default(path: &Path) -> Config {
    Config::load_from(path).unwrap_or_else(|e| {
        warn!("Failed to load config: {e:#}");
        warn!("Using default configuration");
        Config::default()
    })
}

pub fn serve_request(context: &RequestContext) -> Result<Response> {
    respond(context, get_config())
}

/// Builds the single response for this invocation. Only `PATH_INFO` picks
/// which page is rendered.
pub fn respond(context: &RequestContext, config: &Config) -> Result<Response> {
    let path_info = context.env.path_info();
    let route = Route::from_path_info(path_info.as_deref());
    debug!(?path_info, ?route, "selected route");
    let body = match route {
        Route::Environment => render_listing(&context.env, config.listing.style)?,
        Route::Fallback => render_fallback(&config.fallback, &context.now)?,
    };
    Ok(Response::html(body))
}
