use crate::database::enums::database_drivers::DatabaseDrivers;

/// One versioned schema change. Migrations run in version order at store
/// initialization; applied versions are recorded in `tracker_schema`.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: i64,
    pub statement: &'static str,
}

pub const SCHEMA_TABLE_DDL: &str =
    "CREATE TABLE IF NOT EXISTS `tracker_schema` (`version` INTEGER PRIMARY KEY NOT NULL)";

pub const SCHEMA_VERSION_QUERY: &str =
    "SELECT COALESCE(MAX(`version`), 0) FROM `tracker_schema`";

pub const SCHEMA_VERSION_INSERT: &str =
    "INSERT INTO `tracker_schema` (`version`) VALUES (?)";

/// The peer table's migration history.
///
/// Version 1 is the original table without the `left` column; version 2
/// adds it. `left` stays backtick-quoted everywhere since it is a reserved
/// word in MySQL.
pub fn migrations(engine: DatabaseDrivers) -> Vec<Migration> {
    let create_table = match engine {
        DatabaseDrivers::sqlite3 => {
            "CREATE TABLE IF NOT EXISTS `tracker` (\
             `info_hash` BLOB NOT NULL, \
             `ip` BLOB NOT NULL, \
             `port` INTEGER NOT NULL, \
             `update_time` INTEGER NOT NULL DEFAULT 0, \
             PRIMARY KEY (`info_hash`, `ip`, `port`))"
        }
        DatabaseDrivers::mysql => {
            "CREATE TABLE IF NOT EXISTS `tracker` (\
             `info_hash` VARBINARY(20) NOT NULL, \
             `ip` VARBINARY(4) NOT NULL, \
             `port` INTEGER NOT NULL, \
             `update_time` INTEGER NOT NULL DEFAULT 0, \
             PRIMARY KEY (`info_hash`, `ip`, `port`))"
        }
    };
    vec![
        Migration { version: 1, statement: create_table },
        Migration {
            version: 2,
            statement: "ALTER TABLE `tracker` ADD COLUMN `left` INTEGER NOT NULL DEFAULT 0",
        },
    ]
}

/// Errors worth one reconnect-and-retry; anything else is a real query
/// failure and propagates immediately.
pub fn is_transient(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::Io(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}
