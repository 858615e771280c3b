use thiserror::Error;

/// Raised when a dynamically typed value cannot be represented in bencode.
///
/// Guards the JSON boundary
/// (`TryFrom<&serde_json::Value> for BencodeValue`), which the announce
/// handler uses to turn cache-format peer lists into response values.
/// Never expected in normal operation, since the cache value format only
/// holds strings, integers, arrays and objects.
#[derive(Error, Debug)]
pub enum BencodeError {
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),
}
