//! Audit service endpoint implementations.

pub mod audit;
mod request;
pub mod url_encoding;

pub use audit::{feed_path, fetch_events, follow_events};
pub use request::send_request;
pub use url_encoding::encode_path_segment;
