use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use crate::common::structs::custom_error::CustomError;
use crate::net::net::encode_ip;
use crate::tracker::structs::tracker_service::TrackerService;

impl TrackerService {
    /// Effective client address per the trust configuration.
    ///
    /// Proxy headers are honored only in reverse-proxy mode and only when
    /// the direct connection comes from a trusted proxy: `X-Real-IP` wins,
    /// else the first `X-Forwarded-For` hop. A header that fails structural
    /// validation falls through to the direct address. Fails when no IPv4
    /// address results.
    pub(crate) fn resolve_client_ip(
        &self,
        headers: &HashMap<String, String>,
        remote_addr: SocketAddr,
    ) -> Result<[u8; 4], CustomError> {
        let direct = match remote_addr.ip() {
            IpAddr::V4(address) => Some(address.octets()),
            IpAddr::V6(_) => None,
        };
        if self.config.tracker.reverse_proxy {
            if let Some(direct_octets) = direct {
                if self.trusted_proxy_ranges.iter().any(|range| range.contains(direct_octets)) {
                    if let Some(real_ip) = header_value(headers, "x-real-ip") {
                        if let Ok(ip) = encode_ip(real_ip.trim()) {
                            return Ok(ip);
                        }
                    }
                    if let Some(forwarded) = header_value(headers, "x-forwarded-for") {
                        if let Some(first_hop) = forwarded.split(',').next() {
                            if let Ok(ip) = encode_ip(first_hop.trim()) {
                                return Ok(ip);
                            }
                        }
                    }
                }
            }
        }
        direct.ok_or_else(|| CustomError::new("cannot determine client address"))
    }

    /// Applies the `ip` announce parameter when the configuration permits.
    ///
    /// An internal (RFC1918/loopback) reported address is accepted only
    /// with `allow_internal_ip`; anything unacceptable keeps the resolved
    /// address.
    pub(crate) fn apply_reported_ip(&self, resolved: [u8; 4], reported: Option<String>) -> [u8; 4] {
        if self.config.tracker.ignore_reported_ip {
            return resolved;
        }
        let Some(reported) = reported else {
            return resolved;
        };
        let Ok(ip) = encode_ip(reported.trim()) else {
            return resolved;
        };
        if !self.config.tracker.allow_internal_ip
            && self.internal_ranges.iter().any(|range| range.contains(ip))
        {
            return resolved;
        }
        ip
    }

    pub(crate) fn is_ignored(&self, ip: [u8; 4]) -> bool {
        self.ignore_ranges.iter().any(|range| range.contains(ip))
    }
}

fn header_value<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}
