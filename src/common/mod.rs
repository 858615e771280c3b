#[allow(clippy::module_inception)]
pub mod common;
pub mod impls;
pub mod structs;
pub mod traits;
