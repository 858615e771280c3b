use std::collections::BTreeMap;

/// A bencodable value.
///
/// Dictionaries are kept in a `BTreeMap` keyed by raw bytes, which gives the
/// byte-ascending key order the protocol requires for free. Byte strings are
/// raw bytes since keys like an info hash are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BencodeValue {
    Bytes(Vec<u8>),
    Int(i64),
    List(Vec<BencodeValue>),
    Dict(BTreeMap<Vec<u8>, BencodeValue>),
}
