extern crate handlebars;
extern crate reqwest;
extern crate serde_json;

use reqwest::{header::InvalidHeaderValue, StatusCode};
use std::{boxed::Box, error::Error as StdError, fmt, io, result::Result as StdResult};

#[derive(Debug)]
pub struct Error(Box<Inner>);

#[derive(Debug)]
pub enum Kind {
    Io(io::Error),
    Json(serde_json::Error),
    Builder(reqwest::Error),
    Network(reqwest::Error),
    Header(InvalidHeaderValue),
    Url(String),
    Redirect(StatusCode, Option<String>),
    Status(StatusCode),
    GraphQL(Vec<String>),
    Regex,
    NoSubmission(String),
    Language(String),
    Difficulty(u8),
    Template(handlebars::TemplateError),
    Render(handlebars::RenderError),
}
#[derive(Debug)]
struct Inner {
    kind: Kind,
    description: Option<String>,
}

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            Kind::Io(err) => write!(f, "I/O error: {}", err)?,
            Kind::Json(err) => write!(f, "Error decoding json: {}", err)?,
            Kind::Builder(err) => write!(f, "Error building client: {}", err)?,
            Kind::Network(err) => write!(f, "Error sending request: {}", err)?,
            Kind::Header(err) => write!(f, "Invalid header value: {}", err)?,
            Kind::Url(url) => write!(f, "Invalid url {}", url)?,
            Kind::Redirect(status, location) => {
                write!(f, "Session rejected, server answered {}", status)?;
                if let Some(l) = location {
                    write!(f, " redirecting to {}", l)?;
                }
            }
            Kind::Status(status) => write!(f, "Server answered {}", status)?,
            Kind::GraphQL(messages) => {
                write!(f, "GraphQL request failed")?;
                if !messages.is_empty() {
                    write!(f, ": {}", messages.join("; "))?;
                }
            }
            Kind::Regex => write!(f, "Regex not matched")?,
            Kind::NoSubmission(slug) => write!(f, "No submission found for {}", slug)?,
            Kind::Language(slug) => write!(f, "Unsupported language {}", slug)?,
            Kind::Difficulty(level) => write!(f, "Unknown difficulty level {}", level)?,
            Kind::Template(err) => write!(f, "Error parsing template: {}", err)?,
            Kind::Render(err) => write!(f, "Error rendering template: {}", err)?,
        }
        self.write_description(f)
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0.kind {
            Kind::Io(x) => Some(x),
            Kind::Json(x) => Some(x),
            Kind::Builder(x) | Kind::Network(x) => Some(x),
            Kind::Header(x) => Some(x),
            Kind::Template(x) => Some(x),
            Kind::Render(x) => Some(x),
            Kind::Url(_)
            | Kind::Redirect(..)
            | Kind::Status(_)
            | Kind::GraphQL(_)
            | Kind::Regex
            | Kind::NoSubmission(_)
            | Kind::Language(_)
            | Kind::Difficulty(_) => None,
        }
    }
}
impl Error {
    fn new(inner: Inner) -> Self {
        Self(Box::new(inner))
    }
    pub fn with_kind(kind: Kind) -> Self {
        Self::new(Inner {
            kind,
            description: None,
        })
    }
    pub fn with_description<T: Into<String>>(kind: Kind, description: T) -> Self {
        Self::new(Inner {
            kind,
            description: Some(description.into()),
        })
    }
    pub fn kind(&self) -> &Kind {
        &self.0.kind
    }
    fn write_description(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(d) = &self.0.description {
            write!(f, " ({})", d)
        } else {
            Ok(())
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::with_kind(Kind::Io(err))
    }
}
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::with_kind(Kind::Json(err))
    }
}
impl From<InvalidHeaderValue> for Error {
    fn from(err: InvalidHeaderValue) -> Self {
        Self::with_kind(Kind::Header(err))
    }
}

pub(crate) fn network_error(err: reqwest::Error) -> Error {
    Error::with_kind(Kind::Network(err))
}
pub(crate) fn regex_mismatch<T: Into<String>>(description: T) -> Error {
    Error::with_description(Kind::Regex, description)
}
