#![warn(clippy::pedantic)]

//! Responder behind the `cgienv` CGI script.
//!
//! `PATH_INFO` of `/env` or `/env/` lists the request environment as HTML.
//! Every other request gets the fallback page, a greeting or the current
//! time depending on [`config::FallbackKind`].

pub mod config;
pub mod context;
pub mod logging;
pub mod render;
pub mod response;
pub mod serve;
