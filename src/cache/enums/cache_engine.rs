use std::fmt;
use std::fmt::Formatter;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum CacheEngine {
    sqlite3,
    redis,
}

impl fmt::Display for CacheEngine {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            CacheEngine::sqlite3 => write!(formatter, "sqlite3"),
            CacheEngine::redis => write!(formatter, "redis"),
        }
    }
}
