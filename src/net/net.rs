use crate::common::structs::custom_error::CustomError;

/// Converts a dotted-decimal IPv4 string to its 4-byte wire form.
///
/// Fails unless the input is exactly four dot-separated decimal octets in
/// `[0, 255]`.
pub fn encode_ip(ip: &str) -> Result<[u8; 4], CustomError> {
    let mut octets = [0u8; 4];
    let mut count = 0;
    for part in ip.split('.') {
        if count == 4 {
            return Err(CustomError::new("invalid ip"));
        }
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(CustomError::new("invalid ip"));
        }
        octets[count] = part.parse::<u8>().map_err(|_| CustomError::new("invalid ip"))?;
        count += 1;
    }
    if count != 4 {
        return Err(CustomError::new("invalid ip"));
    }
    Ok(octets)
}

/// Converts a 4-byte wire address back to dotted-decimal form.
pub fn decode_ip(ip: [u8; 4]) -> String {
    format!("{}.{}.{}.{}", ip[0], ip[1], ip[2], ip[3])
}

/// Structural IPv4 well-formedness check.
pub fn verify_ip(ip: &str) -> bool {
    encode_ip(ip).is_ok()
}
