//! Durable peer storage.
//!
//! The peer table lives behind [`traits::database_backend::DatabaseBackend`],
//! a minimal execute/fetch interface with SQLite and MySQL implementations
//! on `sqlx` pools. [`structs::peer_store::PeerStore`] builds the tracker
//! operations (upsert, sample, aggregate, expire, admin reads) on top and
//! runs the versioned schema migrations once at initialization.
//!
//! Connections are pooled and task-affine: a handler borrows a connection
//! from the pool for the duration of one statement and never shares it. On a
//! transient connection failure the connector rebuilds its lazy pool and
//! retries the statement exactly once; a second failure propagates as
//! [`errors::StorageError`].

pub mod enums;
pub mod errors;
pub mod helpers;
pub mod impls;
pub mod structs;
pub mod traits;
