use std::fmt;
use std::fmt::Formatter;
use crate::common::structs::custom_error::CustomError;
use crate::tracker::structs::info_hash::InfoHash;

impl fmt::Display for InfoHash {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", hex::encode(self.0))
    }
}

impl From<[u8; 20]> for InfoHash {
    fn from(bytes: [u8; 20]) -> InfoHash {
        InfoHash(bytes)
    }
}

impl TryFrom<&[u8]> for InfoHash {
    type Error = CustomError;

    /// Accepts exactly 20 raw bytes.
    fn try_from(bytes: &[u8]) -> Result<InfoHash, CustomError> {
        let hash: [u8; 20] = bytes
            .try_into()
            .map_err(|_| CustomError::new("invalid info_hash"))?;
        Ok(InfoHash(hash))
    }
}
