//! # Swarmtrack
//!
//! A persistent BitTorrent tracker core: announce/scrape request handling on
//! top of a durable peer table, with an optional read-through cache and
//! canonical bencoded responses.
//!
//! ## Overview
//!
//! Swarmtrack implements the tracker wire protocol behind a transport-neutral
//! surface. An external HTTP router hands
//! [`tracker::structs::tracker_service::TrackerService`] the raw query
//! string, the request headers and the direct connection address, and gets
//! the response body bytes back. Peer records live in SQLite or MySQL behind
//! one backend trait; sampling results can be fronted by a Redis or SQLite
//! TTL cache, or no cache at all.
//!
//! ## Modules
//!
//! - [`bencode`] - Canonical bencode encoding for tracker responses
//! - [`cache`] - Optional TTL cache (Redis, SQLite) with a null fallback
//! - [`common`] - Query parsing, logging setup, clock capability, errors
//! - [`config`] - TOML configuration with defaults
//! - [`database`] - Peer store on SQLite/MySQL with versioned migrations
//! - [`net`] - IPv4 codec and address-range matching
//! - [`tracker`] - Announce/scrape handlers, GC policy, IP resolution
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use swarmtrack::config::structs::configuration::Configuration;
//! use swarmtrack::tracker::structs::tracker_service::TrackerService;
//!
//! let config = Arc::new(Configuration::load_file("config.toml")?);
//! let service = Arc::new(TrackerService::new(config).await?);
//! let body = service.announce(Some(query), &headers, remote_addr).await;
//! ```

/// Canonical bencode encoding for tracker responses.
pub mod bencode;

/// Optional TTL cache layer fronting peer sampling.
///
/// Supports Redis and SQLite engines; an unconfigured connector degrades to
/// a null cache that always misses.
pub mod cache;

/// Shared utilities: query-string parsing, logging setup, the injected
/// clock capability and the validation error type.
pub mod common;

/// Configuration loading and defaults.
pub mod config;

/// Durable peer storage.
///
/// One backend trait with SQLite and MySQL connectors, engine dispatch,
/// versioned schema migrations and the peer table operations.
pub mod database;

/// IPv4 wire codec and address-range matching.
pub mod net;

/// Core tracker logic: announce/scrape handling, expiry policy and
/// client IP resolution.
pub mod tracker;
