//! IPv4 wire codec and address-range matching.
//!
//! The tracker's peer wire format carries addresses as 4 raw bytes; the
//! ignore list and trusted-proxy set match against single addresses or CIDR
//! ranges. Checks here are purely structural, never reachability tests.

pub mod impls;
#[allow(clippy::module_inception)]
pub mod net;
pub mod structs;
