use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use log::{debug, info};
use crate::{ben_bytes, ben_int, ben_map};
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::cache::structs::cached_swarm::{CachedPeer, CachedSwarm};
use crate::common::common::{parse_query, query_text};
use crate::common::structs::custom_error::CustomError;
use crate::net::net::{decode_ip, encode_ip};
use crate::tracker::impls::tracker_service::LOG_PREFIX;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::scrape_query_request::ScrapeQueryRequest;
use crate::tracker::structs::tracker_service::TrackerService;

/// Hard ceiling on peers returned per announce, regardless of `numwant`.
pub const MAX_NUMWANT: u64 = 200;

/// `min interval` advertised alongside every failure reason.
const FAILURE_MIN_INTERVAL: i64 = 1800;

type QueryMap = HashMap<String, Vec<Vec<u8>>>;

impl TrackerService {
    /// Serves one announce. Always returns a response body: protocol and
    /// storage failures come back as a bencoded failure-reason dictionary.
    pub async fn announce(
        &self,
        query: Option<String>,
        headers: &HashMap<String, String>,
        remote_addr: SocketAddr,
    ) -> Vec<u8> {
        let query = match parse_query(query) {
            Ok(query) => query,
            Err(error) => return Self::failure_response(error.message.as_str()),
        };
        if query.contains_key(self.config.tracker.run_gc_key.as_str()) {
            let expired = self.run_gc().await;
            info!("{} Triggered sweep expired {} peer records", LOG_PREFIX, expired);
            return b"ok".to_vec();
        }
        let request = match self.validate_announce(&query, headers, remote_addr) {
            Ok(request) => request,
            Err(error) => return Self::failure_response(error.message.as_str()),
        };
        match self.handle_announce(&request).await {
            Ok(body) => body,
            Err(error) => Self::failure_response(error.message.as_str()),
        }
    }

    /// Serves one scrape; same in-band failure envelope as announce.
    pub async fn scrape(&self, query: Option<String>) -> Vec<u8> {
        let query = match parse_query(query) {
            Ok(query) => query,
            Err(error) => return Self::failure_response(error.message.as_str()),
        };
        let request = match Self::validate_scrape(&query) {
            Ok(request) => request,
            Err(error) => return Self::failure_response(error.message.as_str()),
        };
        match self.handle_scrape(&request).await {
            Ok(body) => body,
            Err(error) => Self::failure_response(error.message.as_str()),
        }
    }

    pub fn failure_response(reason: &str) -> Vec<u8> {
        ben_map! {
            "failure reason" => ben_bytes!(reason),
            "min interval" => ben_int!(FAILURE_MIN_INTERVAL)
        }
        .encode()
    }

    fn validate_announce(
        &self,
        query: &QueryMap,
        headers: &HashMap<String, String>,
        remote_addr: SocketAddr,
    ) -> Result<AnnounceQueryRequest, CustomError> {
        let info_hash = query
            .get("info_hash")
            .and_then(|values| values.first())
            .ok_or_else(|| CustomError::new("missing info_hash"))?;
        let info_hash = InfoHash::try_from(info_hash.as_slice())?;
        let port = query_text(query, "port")
            .ok_or_else(|| CustomError::new("missing port"))?
            .parse::<u16>()
            .map_err(|_| CustomError::new("invalid port"))?;
        let resolved = self.resolve_client_ip(headers, remote_addr)?;
        let ip = self.apply_reported_ip(resolved, query_text(query, "ip"));
        if self.is_ignored(ip) {
            return Err(CustomError::new("client address is not allowed"));
        }
        if self.blocklist.is_blocked(decode_ip(ip).as_str(), info_hash.to_string().as_str()) {
            return Err(CustomError::new("client or torrent is blocked"));
        }
        let uploaded = parse_number(query, "uploaded", 0)?;
        let downloaded = parse_number(query, "downloaded", 0)?;
        let left = parse_number(query, "left", 0)?.max(0);
        let compact = parse_number(query, "compact", 0)? != 0;
        let no_peer_id = parse_number(query, "no_peer_id", 0)? != 0;
        let default_numwant = self.config.tracker.default_numwant as i64;
        let numwant = match parse_number(query, "numwant", default_numwant)? {
            value if value <= 0 => default_numwant,
            value => value,
        };
        let numwant = (numwant as u64).min(MAX_NUMWANT);
        Ok(AnnounceQueryRequest {
            info_hash,
            ip,
            port,
            uploaded,
            downloaded,
            left,
            compact,
            no_peer_id,
            numwant,
            event: query_text(query, "event"),
        })
    }

    async fn handle_announce(&self, request: &AnnounceQueryRequest) -> Result<Vec<u8>, CustomError> {
        let now = self.clock.now();
        self.store
            .upsert(&request.info_hash, request.ip, request.port, request.left, now)
            .await
            .map_err(|error| CustomError::new(error.to_string().as_str()))?;
        let key = self
            .cache
            .swarm_key(request.info_hash.to_string().as_str(), request.numwant);
        let swarm = match self.cache.get_swarm(key.as_str(), now).await {
            Some(swarm) => swarm,
            None => {
                let swarm = self.sample_swarm(request, now).await?;
                self.cache.set_swarm(key.as_str(), &swarm, now).await;
                swarm
            }
        };
        debug!(
            "{} announce {} from {}: {} peers",
            LOG_PREFIX,
            request.info_hash,
            decode_ip(request.ip),
            swarm.peers.len()
        );
        let interval = self.config.tracker.announce_interval as i64;
        let peers = Self::peers_value(&swarm, request.compact)?;
        Ok(ben_map! {
            "complete" => ben_int!(swarm.complete),
            "incomplete" => ben_int!(swarm.incomplete),
            "interval" => ben_int!(interval),
            "min interval" => ben_int!(interval / 2),
            "peers" => peers
        }
        .encode())
    }

    /// Samples the swarm from the store and derives the complete/incomplete
    /// counts from the sampled subset, keeping the announce cost bounded by
    /// `numwant` instead of the swarm size.
    async fn sample_swarm(
        &self,
        request: &AnnounceQueryRequest,
        now: i64,
    ) -> Result<CachedSwarm, CustomError> {
        let min_update_time = now - self.config.tracker.announce_interval as i64;
        let peers = self
            .store
            .sample(&request.info_hash, min_update_time, request.numwant)
            .await
            .map_err(|error| CustomError::new(error.to_string().as_str()))?;
        let complete = peers.iter().filter(|peer| peer.left == 0).count() as u64;
        Ok(CachedSwarm {
            incomplete: peers.len() as u64 - complete,
            complete,
            peers: peers
                .iter()
                .map(|peer| CachedPeer {
                    ip: decode_ip(peer.ip),
                    port: peer.port,
                })
                .collect(),
        })
    }

    /// The `peers` response value: a packed byte string in compact mode,
    /// else the `[{ip, port}]` dictionary list revived from the cache value
    /// format through the JSON-to-bencode boundary.
    fn peers_value(swarm: &CachedSwarm, compact: bool) -> Result<BencodeValue, CustomError> {
        if compact {
            let mut packed = Vec::with_capacity(swarm.peers.len() * 6);
            for peer in &swarm.peers {
                if let Ok(octets) = encode_ip(peer.ip.as_str()) {
                    packed.extend_from_slice(&octets);
                    packed.extend_from_slice(&peer.port.to_be_bytes());
                }
            }
            Ok(BencodeValue::Bytes(packed))
        } else {
            let peers = serde_json::to_value(&swarm.peers)
                .map_err(|error| CustomError::new(error.to_string().as_str()))?;
            BencodeValue::try_from(&peers)
                .map_err(|error| CustomError::new(error.to_string().as_str()))
        }
    }

    fn validate_scrape(query: &QueryMap) -> Result<ScrapeQueryRequest, CustomError> {
        let values = query
            .get("info_hash")
            .filter(|values| !values.is_empty())
            .ok_or_else(|| CustomError::new("missing info_hash"))?;
        // undecodable hashes are dropped, not fatal for the batch
        let info_hashes = values
            .iter()
            .filter_map(|bytes| InfoHash::try_from(bytes.as_slice()).ok())
            .collect();
        Ok(ScrapeQueryRequest { info_hashes })
    }

    async fn handle_scrape(&self, request: &ScrapeQueryRequest) -> Result<Vec<u8>, CustomError> {
        let mut files = BTreeMap::new();
        for info_hash in &request.info_hashes {
            let counts = self
                .store
                .aggregate(info_hash)
                .await
                .map_err(|error| CustomError::new(error.to_string().as_str()))?;
            files.insert(
                info_hash.0.to_vec(),
                ben_map! {
                    "complete" => ben_int!(counts.complete),
                    "downloaded" => ben_int!(counts.complete),
                    "incomplete" => ben_int!(counts.total - counts.complete)
                },
            );
        }
        Ok(ben_map! { "files" => BencodeValue::Dict(files) }.encode())
    }
}

fn parse_number(query: &QueryMap, field: &str, default: i64) -> Result<i64, CustomError> {
    match query_text(query, field) {
        None => Ok(default),
        Some(text) => text
            .parse::<i64>()
            .map_err(|_| CustomError::new(format!("invalid {}", field).as_str())),
    }
}
