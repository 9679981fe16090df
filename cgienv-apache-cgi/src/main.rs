use std::io;

use anyhow::{Context, Result};
use cgienv_responder::{context::RequestContext, logging::init_logging, serve::serve_request};

fn main() -> Result<()> {
    // Without a subscriber the response is still written, just unlogged.
    init_logging();

    let context = RequestContext::from_process();
    let response = serve_request(&context)?;

    response
        .write_to(&mut io::stdout().lock())
        .context("Failed to write response to stdout")?;
    Ok(())
}
