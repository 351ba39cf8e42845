//! Core domain entities.

pub mod url_map;

pub use url_map::{NewUrlMap, UrlMap};
