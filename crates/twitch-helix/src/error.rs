//! Error types for the Helix client

/// Errors returned by every Helix operation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller-supplied parameter broke a documented API limit.
    /// Raised before any request is sent.
    #[error("Malformed parameter \"{param}\": {reason}")]
    InvalidParameter { param: &'static str, reason: String },

    /// The response body carried an `error` field
    #[error("{error} ({}): {message}", display_status(.status))]
    Api {
        error: String,
        status: Option<i64>,
        message: String,
    },

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Response is missing the {0} header")]
    MissingHeader(&'static str),

    #[error("Invalid {name} header value: {value:?}")]
    InvalidHeader { name: &'static str, value: String },

    /// The body was not valid JSON on any attempt
    #[error("Malformed JSON response after {attempts} attempts: {source}")]
    MalformedJson {
        attempts: u32,
        #[source]
        source: serde_json::Error,
    },

    /// The body was valid JSON but did not have the expected shape
    #[error("Unexpected response shape: {0}")]
    Decode(#[source] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

fn display_status(status: &Option<i64>) -> String {
    status.map_or_else(|| "?".to_string(), |s| s.to_string())
}

/// Coarse classification of [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Api,
    Auth,
    Response,
    Transport,
}

impl Error {
    pub(crate) fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            param,
            reason: reason.into(),
        }
    }

    /// Returns the kind of failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidParameter { .. } => ErrorKind::Validation,
            Error::Api { .. } => ErrorKind::Api,
            Error::Auth(_) => ErrorKind::Auth,
            Error::MissingHeader(_)
            | Error::InvalidHeader { .. }
            | Error::MalformedJson { .. }
            | Error::Decode(_) => ErrorKind::Response,
            Error::Transport(_) => ErrorKind::Transport,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
