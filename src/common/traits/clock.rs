/// Injected time source.
///
/// All store and expiry calculations take epoch seconds from this trait so
/// tests can pin the clock to a fixed instant.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch.
    fn now(&self) -> i64;
}
