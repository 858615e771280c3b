/// An IPv4 address range: a single address or a CIDR block.
///
/// Stored as the network address and prefix length; a bare address parses
/// as a /32 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpRange {
    pub(crate) network: u32,
    pub(crate) prefix: u8,
}
