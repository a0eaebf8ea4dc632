//! Station Loader
//!
//! Fetches the raw station record array exactly once at startup, from a
//! local file or an HTTP endpoint. Load failures are fatal initialization
//! errors; there is no retry and no caching layer.

mod error;

pub use error::LoadError;

use station_model::StationRecord;
use std::path::PathBuf;
use tracing::info;

/// Where the raw record array comes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// A JSON file on local disk.
    File(PathBuf),
    /// An HTTP(S) endpoint returning the JSON array.
    Http(String),
}

impl DataSource {
    /// Human-readable description for startup logging.
    pub fn describe(&self) -> String {
        match self {
            DataSource::File(path) => format!("file {}", path.display()),
            DataSource::Http(url) => format!("url {url}"),
        }
    }
}

/// Load the raw record array from the configured source.
///
/// The payload must be a JSON array of station objects; anything else is a
/// [`LoadError::Malformed`]. This is the only operation in the pipeline
/// that touches I/O.
pub async fn load(source: &DataSource) -> Result<Vec<StationRecord>, LoadError> {
    let bytes = match source {
        DataSource::File(path) => tokio::fs::read(path).await?,
        DataSource::Http(url) => {
            let response = reqwest::get(url).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::HttpStatus {
                    status: status.as_u16(),
                });
            }
            response.bytes().await?.to_vec()
        }
    };

    let records = parse_records(&bytes)?;
    info!(
        count = records.len(),
        source = %source.describe(),
        "loaded station records"
    );
    Ok(records)
}

/// Parse the raw payload into records.
fn parse_records(bytes: &[u8]) -> Result<Vec<StationRecord>, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_record_array() {
        let payload = br#"[
            { "ID": 1, "AddressInfo": { "StateOrProvince": "VIC" } },
            {}
        ]"#;
        let records = parse_records(payload).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, Some(1));
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse_records(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_payload_is_load_error() {
        assert!(matches!(
            parse_records(b"not json"),
            Err(LoadError::Malformed(_))
        ));
        // A single object instead of an array is also malformed.
        assert!(matches!(
            parse_records(b"{}"),
            Err(LoadError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = DataSource::File(PathBuf::from("/nonexistent/stations.json"));
        assert!(matches!(load(&source).await, Err(LoadError::Io(_))));
    }

    #[tokio::test]
    async fn test_loads_from_file() {
        let path = std::env::temp_dir().join(format!(
            "station-loader-test-{}.json",
            std::process::id()
        ));
        tokio::fs::write(&path, br#"[{ "ID": 42 }]"#).await.unwrap();

        let records = load(&DataSource::File(path.clone())).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, Some(42));

        let _ = tokio::fs::remove_file(&path).await;
    }
}
