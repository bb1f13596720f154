//! Fetch a remote JSON feed, validate the response and decode it into
//! [`domain::FeedItem`]s.
//!
//! The pipeline is split in three: an [`http::HttpClient`] performs the GET,
//! [`api::FeedItemMapper`] validates status and body, and
//! [`api::RemoteFeedLoader`] ties them together behind [`domain::FeedLoader`].

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
