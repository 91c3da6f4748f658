//! HTTP API 层

mod dto;
mod routes;

pub use dto::*;
pub use routes::router;
