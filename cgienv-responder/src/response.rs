use std::{
    fmt,
    io::{self, Write},
};

pub const TEXT_HTML: &str = "text/html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    content_type: &'static str,
    body: String,
}

impl Response {
    pub fn html(body: String) -> Self {
        Self {
            content_type: TEXT_HTML,
            body,
        }
    }

    pub fn content_type(&self) -> &str {
        self.content_type
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Writes the header line, the blank separator line and the body.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Content-Type: {}\n\n{}", self.content_type, self.body)
    }
}
