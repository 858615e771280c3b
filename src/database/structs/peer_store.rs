use crate::database::structs::database_connector::DatabaseConnector;

/// The durable peer table.
///
/// Thin operation layer over the configured backend; cheap to clone, every
/// clone shares the same pools.
#[derive(Debug, Clone)]
pub struct PeerStore {
    pub(crate) connector: DatabaseConnector,
}
