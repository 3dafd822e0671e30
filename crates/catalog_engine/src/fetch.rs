use std::marker::PhantomData;
use std::time::Duration;

use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{FailureKind, FetchError, RecordId, SourceError};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Record endpoint; the id is appended as the last path segment.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 1024 * 1024,
        }
    }
}

/// Client for the remote record API: one record per call, no batch endpoint.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    type Record: Send;

    async fn get_record(&self, id: RecordId) -> Result<Self::Record, FetchError>;
}

/// Fetches `{base_url}/{id}` over HTTP and decodes the JSON body into `T`.
#[derive(Debug)]
pub struct HttpRecordSource<T> {
    settings: FetchSettings,
    base_url: Url,
    client: reqwest::Client,
    _record: PhantomData<fn() -> T>,
}

impl<T> HttpRecordSource<T> {
    pub fn new(settings: FetchSettings) -> Result<Self, SourceError> {
        let base_url =
            Url::parse(&settings.base_url).map_err(|err| SourceError::InvalidBaseUrl {
                url: settings.base_url.clone(),
                reason: err.to_string(),
            })?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::InvalidBaseUrl {
                url: settings.base_url.clone(),
                reason: "url cannot carry a path".to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()?;

        Ok(Self {
            settings,
            base_url,
            client,
            _record: PhantomData,
        })
    }

    pub fn record_url(&self, id: RecordId) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::new(id, FailureKind::InvalidUrl, self.base_url.as_str()))?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }

    async fn read_body(
        &self,
        id: RecordId,
        response: reqwest::Response,
    ) -> Result<Vec<u8>, FetchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(FetchError::new(
                    id,
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|err| map_reqwest_error(id, err))?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(FetchError::new(
                    id,
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl<T> RecordSource for HttpRecordSource<T>
where
    T: DeserializeOwned + Send,
{
    type Record = T;

    async fn get_record(&self, id: RecordId) -> Result<T, FetchError> {
        let url = self.record_url(id)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| map_reqwest_error(id, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                id,
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = self.read_body(id, response).await?;
        serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(id, FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(id: RecordId, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(id, FailureKind::Timeout, err.to_string());
    }
    FetchError::new(id, FailureKind::Network, err.to_string())
}
