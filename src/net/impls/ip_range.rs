use std::str::FromStr;
use crate::common::structs::custom_error::CustomError;
use crate::net::net::encode_ip;
use crate::net::structs::ip_range::IpRange;

impl IpRange {
    pub fn new(network: [u8; 4], prefix: u8) -> Result<IpRange, CustomError> {
        if prefix > 32 {
            return Err(CustomError::new("invalid prefix length"));
        }
        let address = u32::from_be_bytes(network);
        Ok(IpRange {
            network: address & Self::mask(prefix),
            prefix,
        })
    }

    pub fn contains(&self, ip: [u8; 4]) -> bool {
        u32::from_be_bytes(ip) & Self::mask(self.prefix) == self.network
    }

    fn mask(prefix: u8) -> u32 {
        if prefix == 0 {
            0
        } else {
            u32::MAX << (32 - prefix as u32)
        }
    }
}

impl FromStr for IpRange {
    type Err = CustomError;

    /// Parses `a.b.c.d` (treated as /32) or `a.b.c.d/nn`.
    fn from_str(input: &str) -> Result<IpRange, CustomError> {
        match input.split_once('/') {
            None => IpRange::new(encode_ip(input)?, 32),
            Some((address, prefix)) => {
                let prefix = prefix.parse::<u8>()
                    .map_err(|_| CustomError::new("invalid prefix length"))?;
                IpRange::new(encode_ip(address)?, prefix)
            }
        }
    }
}

/// Parses a list of range strings, as found in the configuration.
pub fn parse_ranges(entries: &[String]) -> Result<Vec<IpRange>, CustomError> {
    entries.iter().map(|entry| entry.parse::<IpRange>()).collect()
}

/// RFC1918 private blocks plus loopback, for the reported-IP policy.
pub fn internal_ranges() -> Vec<IpRange> {
    ["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16", "127.0.0.0/8"]
        .iter()
        .map(|range| range.parse::<IpRange>().unwrap())
        .collect()
}
