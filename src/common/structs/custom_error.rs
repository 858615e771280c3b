/// Human-readable validation error, surfaced to clients as the
/// `failure reason` text of a bencoded error dictionary.
#[derive(Debug, Clone)]
pub struct CustomError {
    pub message: String,
}
