use std::collections::HashMap;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

/// Parses a raw percent-encoded query string into a multimap.
///
/// Keys are lowercased and percent-decoded as UTF-8; values stay raw bytes
/// because `info_hash` carries arbitrary binary data. A key without `=`
/// (like the GC trigger) is kept with an empty value list entry.
pub fn parse_query(query: Option<String>) -> Result<HashMap<String, Vec<Vec<u8>>>, CustomError> {
    let mut queries: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    let Some(raw) = query else {
        return Ok(queries);
    };
    for item in raw.split('&') {
        if item.is_empty() {
            continue;
        }
        let (raw_key, raw_value) = match item.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (item, None),
        };
        let key = percent_encoding::percent_decode_str(raw_key)
            .decode_utf8_lossy()
            .to_lowercase();
        if key.is_empty() {
            continue;
        }
        let entry = queries.entry(key).or_default();
        match raw_value {
            Some(value) => {
                entry.push(percent_encoding::percent_decode_str(value).collect::<Vec<u8>>());
            }
            None => {
                entry.push(vec![]);
            }
        }
    }
    Ok(queries)
}

/// First value of a query key, as UTF-8 text.
pub fn query_text(query: &HashMap<String, Vec<Vec<u8>>>, field: &str) -> Option<String> {
    query.get(field)
        .and_then(|values| values.first())
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
        .map(|text| text.to_string())
}

pub fn setup_logging(config: &Configuration) {
    let level = match config.log_level.as_str() {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => {
            panic!("Unknown log level encountered: '{}'", config.log_level.as_str());
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}
