//! Optional TTL cache fronting peer sampling.
//!
//! [`structs::cache_connector::CacheConnector`] dispatches to a Redis or
//! SQLite backend behind [`traits::cache_backend::CacheBackend`], or to no
//! backend at all when caching is disabled. The connector surface is
//! best-effort on purpose: a failing cache logs and degrades to misses, it
//! never fails an announce.

pub mod enums;
pub mod errors;
pub mod impls;
pub mod structs;
pub mod traits;
