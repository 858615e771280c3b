use log::{debug, info};
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::peer_sort::{PeerSortKey, SortDirection};
use crate::database::errors::StorageError;
use crate::database::helpers::{migrations, SCHEMA_TABLE_DDL, SCHEMA_VERSION_INSERT, SCHEMA_VERSION_QUERY};
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::peer_store::PeerStore;
use crate::database::structs::sql_value::{SqlParam, SqlRow};
use crate::database::structs::swarm_counts::SwarmCounts;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_record::PeerRecord;

const LOG_PREFIX: &str = "[STORE]";

impl PeerStore {
    /// Connects the configured backend and brings the schema up to date.
    pub async fn new(config: &DatabaseConfig) -> Result<PeerStore, StorageError> {
        let connector = DatabaseConnector::new(config)?;
        let store = PeerStore { connector };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<(), StorageError> {
        let engine = self.connector.engine().ok_or(StorageError::NotConfigured)?;
        self.connector.execute(SCHEMA_TABLE_DDL, &[]).await?;
        let rows = self.connector.fetch_rows(SCHEMA_VERSION_QUERY, &[]).await?;
        let current = rows
            .first()
            .map(|row| row.int(0))
            .transpose()?
            .unwrap_or(0);
        for migration in migrations(engine) {
            if migration.version <= current {
                continue;
            }
            info!("{} Applying schema migration v{}", LOG_PREFIX, migration.version);
            self.connector.execute(migration.statement, &[]).await?;
            self.connector
                .execute(SCHEMA_VERSION_INSERT, &[SqlParam::Int(migration.version)])
                .await?;
        }
        Ok(())
    }

    /// Replace-semantics write on the `(info_hash, ip, port)` primary key.
    ///
    /// `REPLACE INTO` parses on both engines, so one statement covers them;
    /// the last announce for an endpoint wins.
    pub async fn upsert(
        &self,
        info_hash: &InfoHash,
        ip: [u8; 4],
        port: u16,
        left: i64,
        now: i64,
    ) -> Result<(), StorageError> {
        debug!("{} upsert {} {:?}:{}", LOG_PREFIX, info_hash, ip, port);
        self.connector
            .execute(
                "REPLACE INTO `tracker` (`info_hash`, `ip`, `port`, `left`, `update_time`) \
                 VALUES (?, ?, ?, ?, ?)",
                &[
                    SqlParam::Bytes(info_hash.0.to_vec()),
                    SqlParam::Bytes(ip.to_vec()),
                    SqlParam::Int(port as i64),
                    SqlParam::Int(left),
                    SqlParam::Int(now),
                ],
            )
            .await?;
        Ok(())
    }

    /// Up to `limit` peers announced after `min_update_time`, in randomized
    /// order so repeated announces spread load across the swarm.
    pub async fn sample(
        &self,
        info_hash: &InfoHash,
        min_update_time: i64,
        limit: u64,
    ) -> Result<Vec<PeerRecord>, StorageError> {
        let statement = format!(
            "SELECT `ip`, `port`, `left`, `update_time` FROM `tracker` \
             WHERE `info_hash` = ? AND `update_time` > ? ORDER BY {} LIMIT ?",
            self.connector.random_function()
        );
        let rows = self
            .connector
            .fetch_rows(
                statement.as_str(),
                &[
                    SqlParam::Bytes(info_hash.0.to_vec()),
                    SqlParam::Int(min_update_time),
                    SqlParam::Int(limit as i64),
                ],
            )
            .await?;
        rows.iter()
            .map(|row| Self::decode_peer(*info_hash, row, 0))
            .collect()
    }

    /// Total and complete (`left == 0`) record counts for one swarm.
    pub async fn aggregate(&self, info_hash: &InfoHash) -> Result<SwarmCounts, StorageError> {
        let rows = self
            .connector
            .fetch_rows(
                "SELECT COUNT(*), COUNT(CASE WHEN `left` = 0 THEN 1 END) \
                 FROM `tracker` WHERE `info_hash` = ?",
                &[SqlParam::Bytes(info_hash.0.to_vec())],
            )
            .await?;
        let row = rows
            .first()
            .ok_or_else(|| StorageError::DecodeError("empty aggregate result".to_string()))?;
        Ok(SwarmCounts {
            total: row.int(0)? as u64,
            complete: row.int(1)? as u64,
        })
    }

    /// Deletes records not announced since `threshold`; returns the count.
    pub async fn expire(&self, threshold: i64) -> Result<u64, StorageError> {
        let deleted = self
            .connector
            .execute(
                "DELETE FROM `tracker` WHERE `update_time` < ?",
                &[SqlParam::Int(threshold)],
            )
            .await?;
        if deleted > 0 {
            info!("{} Expired {} peer records", LOG_PREFIX, deleted);
        }
        Ok(deleted)
    }

    pub async fn count_all(&self) -> Result<u64, StorageError> {
        let rows = self
            .connector
            .fetch_rows("SELECT COUNT(*) FROM `tracker`", &[])
            .await?;
        let row = rows
            .first()
            .ok_or_else(|| StorageError::DecodeError("empty count result".to_string()))?;
        Ok(row.int(0)? as u64)
    }

    /// Administrative paging read; sort columns come from a whitelist enum,
    /// never from client input.
    pub async fn list_page(
        &self,
        offset: u64,
        limit: u64,
        sort: PeerSortKey,
        direction: SortDirection,
    ) -> Result<Vec<PeerRecord>, StorageError> {
        let statement = format!(
            "SELECT `info_hash`, `ip`, `port`, `left`, `update_time` FROM `tracker` \
             ORDER BY `{}` {} LIMIT ?, ?",
            sort.column(),
            direction.keyword()
        );
        let rows = self
            .connector
            .fetch_rows(
                statement.as_str(),
                &[SqlParam::Int(offset as i64), SqlParam::Int(limit as i64)],
            )
            .await?;
        rows.iter()
            .map(|row| {
                let hash_bytes: [u8; 20] = row.bytes(0)?.try_into().map_err(|_| {
                    StorageError::DecodeError("info_hash is not 20 bytes".to_string())
                })?;
                Self::decode_peer(InfoHash(hash_bytes), row, 1)
            })
            .collect()
    }

    fn decode_peer(info_hash: InfoHash, row: &SqlRow, first: usize) -> Result<PeerRecord, StorageError> {
        let ip: [u8; 4] = row
            .bytes(first)?
            .try_into()
            .map_err(|_| StorageError::DecodeError("ip is not 4 bytes".to_string()))?;
        let port = u16::try_from(row.int(first + 1)?)
            .map_err(|_| StorageError::DecodeError("port out of range".to_string()))?;
        Ok(PeerRecord {
            info_hash,
            ip,
            port,
            left: row.int(first + 2)?,
            update_time: row.int(first + 3)?,
        })
    }
}
