//! Configuration management.
//!
//! The process-wide [`structs::configuration::Configuration`] is resolved
//! once (TOML file or defaults) and handed to the tracker as an immutable
//! value for the process lifetime. Every field has a default so a partial
//! file parses.

pub mod enums;
pub mod impls;
pub mod structs;
#[cfg(test)]
mod tests;
