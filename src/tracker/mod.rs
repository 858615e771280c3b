//! Core tracker logic.
//!
//! [`structs::tracker_service::TrackerService`] composes the peer store, the
//! cache and the expiry policy into the announce and scrape handlers. The
//! service is transport neutral: callers pass the raw query string, the
//! request headers and the direct connection address, and receive the
//! bencoded response body. Protocol failures stay in-band as
//! `{'failure reason': ...}` dictionaries.

pub mod impls;
pub mod structs;
pub mod traits;
#[cfg(test)]
mod tests;
