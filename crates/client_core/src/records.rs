//! HTTP access to the record list and other static resources.

use async_trait::async_trait;
use reqwest::Client;
use shared::domain::Record;
use tracing::debug;

use crate::error::FetchError;

#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError>;
}

pub struct HttpRecordSource {
    http: Client,
    records_url: String,
}

impl HttpRecordSource {
    pub fn new(records_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), records_url)
    }

    pub fn with_client(http: Client, records_url: impl Into<String>) -> Self {
        Self {
            http,
            records_url: records_url.into(),
        }
    }

    pub fn records_url(&self) -> &str {
        &self.records_url
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError> {
        let body = fetch_bytes(&self.http, &self.records_url).await?;
        let records: Vec<Record> =
            serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
                url: self.records_url.clone(),
                source,
            })?;
        debug!(url = %self.records_url, count = records.len(), "records decoded");
        Ok(records)
    }
}

/// Plain GET returning the response body; any non-2xx status is an error.
pub async fn fetch_bytes(http: &Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;
    Ok(body.to_vec())
}

#[cfg(test)]
#[path = "tests/records_tests.rs"]
mod tests;
