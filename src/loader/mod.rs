use log::{debug, info};
use rand::Rng;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use crate::deck::{parser, Deck, Dialect, ParseError};


const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not fetch {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: StatusCode },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Where the raw dataset text comes from.
pub trait Source {
    fn describe(&self) -> &str;

    /// Resolves once the complete body is available.
    async fn fetch(&self) -> Result<String, LoadError>;
}

pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Duration) -> Self {
        HttpSource {
            url: url.to_owned(),
            timeout,
        }
    }

    fn network_error(&self, source: reqwest::Error) -> LoadError {
        LoadError::Network {
            url: self.url.clone(),
            source,
        }
    }
}

impl Source for HttpSource {
    fn describe(&self) -> &str {
        &self.url
    }

    // The client is built here so that a broken TLS setup fails the load
    // like any other network problem.
    async fn fetch(&self) -> Result<String, LoadError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()
            .map_err(|e| self.network_error(e))?;

        let response = client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status,
            });
        }

        response.text().await.map_err(|e| self.network_error(e))
    }
}

/// Dataset text already held in memory.
#[cfg(test)]
pub struct TextSource {
    text: String,
}

#[cfg(test)]
impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        TextSource { text: text.into() }
    }
}

#[cfg(test)]
impl Source for TextSource {
    fn describe(&self) -> &str {
        "in-memory text"
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.text.clone())
    }
}

pub struct Loader<S> {
    source: S,
    dialect: Dialect,
}

impl<S: Source> Loader<S> {
    pub fn new(source: S, dialect: Dialect) -> Self {
        Loader { source, dialect }
    }

    /// Fetches, parses and shuffles. A dataset with no data rows is a
    /// successful load of an empty deck.
    pub async fn load(&self) -> Result<Deck, LoadError> {
        info!("Fetching deck from {}", self.source.describe());
        let text = self.source.fetch().await?;
        debug!("Received {} bytes", text.len());
        let deck = build_deck(&text, &self.dialect, &mut rand::thread_rng())?;
        info!("Deck ready with {} cards", deck.len());
        Ok(deck)
    }
}

pub fn build_deck<R: Rng + ?Sized>(
    text: &str,
    dialect: &Dialect,
    rng: &mut R,
) -> Result<Deck, ParseError> {
    let rows = parser::parse_rows_with(text, dialect)?;
    debug!("Parsed {} rows including header", rows.len());
    Ok(Deck::from_rows(rows, rng))
}
