//! Request parameter resolution.
//!
//! # Responsibilities
//! - Validate the declared method override
//! - Derive the effective verb from the declared method and body
//! - Carry the body through unchanged
//!
//! # Design Decisions
//! - Default verb is GET; a declared body implies POST
//! - An explicit override always wins, even over a body (GET with a body
//!   is sent as-is)
//! - Resolution is pure and runs before any TLS or network work

use std::fmt;
use std::str::FromStr;

use reqwest::Method;

use crate::config::validation::{validate_method, ValidationError};

/// The accepted set of HTTP verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Head,
    Patch,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Head => "HEAD",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the accepted verbs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVerb;

impl FromStr for Verb {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Verb::Get),
            "POST" => Ok(Verb::Post),
            "HEAD" => Ok(Verb::Head),
            "PATCH" => Ok(Verb::Patch),
            "DELETE" => Ok(Verb::Delete),
            _ => Err(UnknownVerb),
        }
    }
}

impl From<Verb> for Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Head => Method::HEAD,
            Verb::Patch => Method::PATCH,
            Verb::Delete => Method::DELETE,
        }
    }
}

/// Effective verb and body for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub verb: Verb,
    pub body: Option<String>,
}

/// Resolve the effective verb and body from the declared inputs.
pub fn resolve(method: Option<&str>, body: Option<&str>) -> Result<ResolvedRequest, ValidationError> {
    let mut verb = Verb::Get;

    if body.is_some() {
        verb = Verb::Post;
    }

    if let Some(method) = method {
        verb = validate_method(method)?;
    }

    Ok(ResolvedRequest {
        verb,
        body: body.map(str::to_owned),
    })
}
