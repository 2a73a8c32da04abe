//! Flickr search API surface.
//!
//! This module owns everything that knows what the photo service looks like
//! on the wire: building the `flickr.photos.search` request URL and decoding
//! the JSON page it returns into domain [`Photo`](crate::domain::Photo)
//! records. The HTTP transfer itself happens through the Zellij host
//! (`web_request`), so nothing in here performs I/O.
//!
//! # Organization
//!
//! - [`request`]: Search URL construction
//! - [`response`]: Response decoding and failure detection

pub mod request;
pub mod response;

pub use request::search_url;
pub use response::parse_search_page;
