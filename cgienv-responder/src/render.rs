use std::fmt::Write;

use anyhow::Result;
use chrono::{DateTime, Local};

use crate::{
    config::{FallbackConfig, FallbackKind, ListingStyle},
    context::Environment,
};

const DOCUMENT_OPEN: &str = "<html><body>";
const DOCUMENT_CLOSE: &str = "</body></html>";

pub fn render_listing(env: &Environment, style: ListingStyle) -> Result<String> {
    let mut page = String::new();
    writeln!(page, "{DOCUMENT_OPEN}")?;
    match style {
        ListingStyle::Preformatted => {
            writeln!(page, "<h1>Environment Variables:</h1>")?;
            writeln!(page, "<pre>")?;
            for (key, value) in env.iter() {
                writeln!(page, "{}: {}", key.to_string_lossy(), value.to_string_lossy())?;
            }
            writeln!(page, "</pre>")?;
        }
        ListingStyle::Paragraphs => {
            writeln!(page, "<h1>Environment Variables</h1>")?;
            for (key, value) in env.iter() {
                writeln!(
                    page,
                    "<p><strong>{}:</strong> {}</p>",
                    key.to_string_lossy(),
                    value.to_string_lossy()
                )?;
            }
        }
    }
    writeln!(page, "{DOCUMENT_CLOSE}")?;
    Ok(page)
}

pub fn render_fallback(fallback: &FallbackConfig, now: &DateTime<Local>) -> Result<String> {
    let mut page = String::new();
    writeln!(page, "{DOCUMENT_OPEN}")?;
    match fallback.kind {
        FallbackKind::Greeting => {
            writeln!(page, "<h1>{}</h1>", fallback.greeting)?;
        }
        FallbackKind::Timestamp => {
            writeln!(page, "<h1>Current Time:</h1>")?;
            writeln!(page, "<p>{}</p>", format_timestamp(now))?;
        }
    }
    writeln!(page, "{DOCUMENT_CLOSE}")?;
    Ok(page)
}

/// `2024-03-09 14:05:07.123456`, with the fraction dropped on a whole second.
pub fn format_timestamp(now: &DateTime<Local>) -> String {
    if now.timestamp_subsec_micros() == 0 {
        now.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        now.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}
