use anyhow::Context;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::watch;

use crate::config::{
    HISTORY_ERROR_MESSAGE, HISTORY_PATH, LATEST_READING_ERROR_MESSAGE, LATEST_READING_PATH,
};
use crate::reading::{Envelope, ErrorBody, HistoricalPoint, LatestReading};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// What the renderer sees. Written only by [`SensorDataLoader`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub load_state: LoadState,
    pub history: Vec<HistoricalPoint>,
    pub latest: Option<LatestReading>,
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            load_state: LoadState::Loading,
            history: Vec::new(),
            latest: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SensorData {
    pub history: Vec<HistoricalPoint>,
    pub latest: LatestReading,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{message}")]
    Http { status: StatusCode, message: String },
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    #[error("Malformed response from {path}: {source}")]
    MalformedResponse {
        path: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug)]
pub struct SensorDataLoader {
    client: Client,
    base_url: String,
    state: watch::Sender<ViewState>,
}

impl SensorDataLoader {
    pub fn new(base_url: &str) -> Result<Self, anyhow::Error> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        let (state, _) = watch::channel(ViewState::default());

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            state,
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Runs the one load cycle: history first, then the latest reading.
    ///
    /// Each view model is published as soon as its request succeeds, so a
    /// failed second request still leaves the history in place.
    pub async fn load(self) -> Result<SensorData, LoadError> {
        self.state
            .send_modify(|view| view.load_state = LoadState::Loading);

        let outcome = self.fetch_all().await;

        match &outcome {
            Ok(data) => {
                log::info!(
                    "Loaded {} historical points and latest reading from {}",
                    data.history.len(),
                    data.latest.location
                );
                self.state.send_modify(|view| view.load_state = LoadState::Ready);
            }
            Err(e) => {
                if let LoadError::Http { status, .. } = e {
                    log::error!("Sensor backend responded with {status}");
                }
                log::error!("Failed to load sensor data: {e}");
                let message = e.to_string();
                self.state
                    .send_modify(|view| view.load_state = LoadState::Failed(message));
            }
        }

        outcome
    }

    async fn fetch_all(&self) -> Result<SensorData, LoadError> {
        let history: Vec<HistoricalPoint> =
            self.fetch(HISTORY_PATH, HISTORY_ERROR_MESSAGE).await?;
        self.state.send_modify(|view| view.history = history.clone());

        let latest: LatestReading = self
            .fetch(LATEST_READING_PATH, LATEST_READING_ERROR_MESSAGE)
            .await?;
        self.state
            .send_modify(|view| view.latest = Some(latest.clone()));

        Ok(SensorData { history, latest })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &'static str,
        fallback_message: &str,
    ) -> Result<T, LoadError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let value: serde_json::Value = serde_json::from_slice(&body)
                .map_err(|source| LoadError::MalformedResponse { path, source })?;
            let message = serde_json::from_value::<ErrorBody>(value)
                .ok()
                .and_then(|b| b.message_text())
                .unwrap_or_else(|| fallback_message.to_string());
            return Err(LoadError::Http { status, message });
        }

        let envelope: Envelope<T> = serde_json::from_slice(&body)
            .map_err(|source| LoadError::MalformedResponse { path, source })?;

        Ok(envelope.dados)
    }
}
