//! Canonical bencode encoding.
//!
//! Tracker responses are always built from typed [`enums::bencode_value::BencodeValue`]
//! trees and serialized with byte-sorted dictionary keys, so the wire form is
//! deterministic. There is no decode path; the tracker never parses bencode.

pub mod enums;
pub mod errors;
pub mod impls;
