use std::{
    borrow::Cow,
    env,
    ffi::{OsStr, OsString},
};

use chrono::{DateTime, Local};
use indexmap::IndexMap;

pub const PATH_INFO: &str = "PATH_INFO";

/// Snapshot of the variables a CGI host handed to this request, in the order
/// the host supplied them. Names and values stay as raw OS strings so that
/// distinct non-UTF-8 names never collapse into one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: IndexMap<OsString, OsString>,
}

impl Environment {
    pub fn from_process() -> Self {
        env::vars_os().collect()
    }

    pub fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        self.vars.get(OsStr::new(name)).map(|v| v.to_string_lossy())
    }

    pub fn path_info(&self) -> Option<Cow<'_, str>> {
        self.get(PATH_INFO)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }
}

impl<K: Into<OsString>, V: Into<OsString>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Environment,
    Fallback,
}

impl Route {
    /// Only an exact `/env` or `/env/` lists the environment. Anything else,
    /// including no `PATH_INFO` at all, falls through.
    pub fn from_path_info(path_info: Option<&str>) -> Self {
        match path_info.unwrap_or_default() {
            "/env" | "/env/" => Route::Environment,
            _ => Route::Fallback,
        }
    }
}

/// Everything the responder may look at for one invocation.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub env: Environment,
    pub now: DateTime<Local>,
}

impl RequestContext {
    pub fn new(env: Environment, now: DateTime<Local>) -> Self {
        Self { env, now }
    }

    pub fn from_process() -> Self {
        Self::new(Environment::from_process(), Local::now())
    }
}
