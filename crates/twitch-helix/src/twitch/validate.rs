//! Parameter checks applied before a request is sent.
//!
//! Every failure is an [`Error::InvalidParameter`] naming the parameter.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Largest `first` and list length Helix accepts
pub const MAX_ITEMS: usize = 100;

/// Default page size used by the API
pub const DEFAULT_FIRST: u32 = 20;

/// Stream type filter of the streams endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamType {
    #[default]
    All,
    Live,
    Vodcast,
}

impl StreamType {
    pub const ALL: [StreamType; 3] = [StreamType::All, StreamType::Live, StreamType::Vodcast];

    pub fn as_str(self) -> &'static str {
        match self {
            StreamType::All => "all",
            StreamType::Live => "live",
            StreamType::Vodcast => "vodcast",
        }
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StreamType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        StreamType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                Error::invalid(
                    "type",
                    format!("invalid stream type {s:?}, valid types are all, live, vodcast"),
                )
            })
    }
}

/// `first` must not exceed 100
pub fn first(value: u32) -> Result<()> {
    if value as usize > MAX_ITEMS {
        return Err(Error::invalid(
            "first",
            "the value must be less than or equal to 100",
        ));
    }
    Ok(())
}

/// A multi-value parameter may hold at most 100 items.
/// An empty list stands for an absent parameter and always passes.
pub fn max_items<S>(param: &'static str, values: &[S]) -> Result<()> {
    if values.len() > MAX_ITEMS {
        return Err(Error::invalid(
            param,
            format!("too many values ({}), limit is 100", values.len()),
        ));
    }
    Ok(())
}

/// Lookups need at least one identifier, and no more than 100
pub fn lookup<S>(param: &'static str, values: &[S]) -> Result<()> {
    if values.is_empty() {
        return Err(Error::invalid(param, "must provide at least one name or ID"));
    }
    max_items(param, values)
}

/// Treats an empty string the same as an absent value
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Only one pagination direction may be given
pub fn one_direction(after: Option<&str>, before: Option<&str>) -> Result<()> {
    if present(after).is_some() && present(before).is_some() {
        return Err(Error::invalid(
            "after",
            "provide only one pagination direction, not both after and before",
        ));
    }
    Ok(())
}

/// A required single-value parameter must be present and non-empty
pub fn required<'a>(param: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::invalid(param, "a value must be supplied")),
    }
}
