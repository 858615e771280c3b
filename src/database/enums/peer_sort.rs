use serde::{Deserialize, Serialize};

/// Whitelisted sort columns for the administrative listing; interpolated
/// into SQL, so free-form column names are never accepted.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerSortKey {
    info_hash,
    ip,
    port,
    left,
    update_time,
}

impl PeerSortKey {
    pub fn column(&self) -> &'static str {
        match self {
            PeerSortKey::info_hash => "info_hash",
            PeerSortKey::ip => "ip",
            PeerSortKey::port => "port",
            PeerSortKey::left => "left",
            PeerSortKey::update_time => "update_time",
        }
    }
}

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    asc,
    desc,
}

impl SortDirection {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::asc => "ASC",
            SortDirection::desc => "DESC",
        }
    }
}
