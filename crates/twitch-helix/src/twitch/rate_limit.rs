//! Rate-limit telemetry read from Helix response headers
//!
//! `Ratelimit-Limit` is the request budget for the window,
//! `Ratelimit-Remaining` what is left of it and `Ratelimit-Reset`
//! the Unix epoch second at which the window resets.

use chrono::{DateTime, Duration, Utc};
use std::str::FromStr;

use super::http::HttpResponse;
use crate::error::{Error, Result};

pub const LIMIT_HEADER: &str = "Ratelimit-Limit";
pub const REMAINING_HEADER: &str = "Ratelimit-Remaining";
pub const RESET_HEADER: &str = "Ratelimit-Reset";
pub const DATE_HEADER: &str = "Date";

/// Snapshot of the rate-limit headers of the most recent response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u32,
    pub remaining: u32,
    /// Unix epoch seconds
    pub reset: i64,
    /// Raw `Date` header of the response
    pub date: String,
}

impl RateLimit {
    /// Reads the snapshot from a response. Every header is required.
    pub fn from_response(response: &HttpResponse) -> Result<Self> {
        Ok(Self {
            limit: parse_header(response, LIMIT_HEADER)?,
            remaining: parse_header(response, REMAINING_HEADER)?,
            reset: parse_header(response, RESET_HEADER)?,
            date: require_header(response, DATE_HEADER)?.to_string(),
        })
    }

    /// Returns when the window resets
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.reset, 0)
    }

    /// Returns the time left until the window resets, zero if it already has
    pub fn resets_in(&self, now: DateTime<Utc>) -> Duration {
        self.reset_at()
            .map_or(Duration::zero(), |at| (at - now).max(Duration::zero()))
    }

    /// Returns the server time the response was produced at
    pub fn server_time(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc2822(&self.date)
            .ok()
            .map(|d| d.with_timezone(&Utc))
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

fn require_header<'a>(response: &'a HttpResponse, name: &'static str) -> Result<&'a str> {
    response.header(name).ok_or(Error::MissingHeader(name))
}

fn parse_header<T: FromStr>(response: &HttpResponse, name: &'static str) -> Result<T> {
    let raw = require_header(response, name)?;
    raw.trim().parse().map_err(|_| Error::InvalidHeader {
        name,
        value: raw.to_string(),
    })
}
