mod client;
mod games;
pub mod http;
pub mod query;
mod rate_limit;
mod streams;
mod types;
pub mod validate;
mod users;

pub use client::HelixClient;
pub use games::Games;
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use query::Query;
pub use rate_limit::RateLimit;
pub use streams::{Streams, StreamsQuery};
pub use types::*;
pub use users::Users;
pub use validate::StreamType;
