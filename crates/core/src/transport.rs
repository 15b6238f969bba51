//! HTTP access behind a small trait so the pipeline can run against any source.

use std::{io::Read, time::Duration};

use log::debug;
use reqwest::blocking::Client;

use crate::{
    config::{REQUEST_TIMEOUT, USER_AGENT},
    error::{Error, Result},
};

/// Status and unread body of a GET response.
pub struct HttpResponse {
    pub status: u16,
    pub body: Box<dyn Read>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Read + 'static) -> Self {
        Self { status, body: Box::new(body) }
    }
}

/// Issues blocking GET requests.
pub trait Transport {
    /// Send a GET request to `url`.
    ///
    /// Non-success statuses are not errors here; callers inspect
    /// [`HttpResponse::status`].
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// [`Transport`] backed by a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Client with [`REQUEST_TIMEOUT`], which never times out.
    pub fn new() -> Result<Self> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Client(e.into()))?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::Request { url: url.to_string(), source: e.into() })?;
        let status = response.status().as_u16();
        debug!("GET {url} -> {status}");
        Ok(HttpResponse::new(status, response))
    }
}
