use crate::config::{ClientConfig, CONTROL_PATH, STREAM_PATH};
use crate::error::{Error, Result};
use crate::params::Params;
use crate::response::{parse_response, CommandResponse};
use crate::stream::MjpegStream;
use bytes::Bytes;
use reqwest::{Client, Response, Url};
use std::sync::Arc;
use tracing::debug;

/// Client for one camera's CGI control interface.
///
/// Every catalog method issues exactly one independent GET and the client
/// holds no mutable state, so a single instance (or its clones) can be shared
/// across tasks freely.
#[derive(Clone)]
pub struct FoscamApiClient {
    client: Client,
    config: Arc<ClientConfig>,
    control_url: String,
    stream_url: String,
}

impl FoscamApiClient {
    /// Create a new API client
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let control_url = config.control_url();
        let stream_url = config.stream_url();
        check_url(&control_url, CONTROL_PATH)?;
        check_url(&stream_url, STREAM_PATH)?;

        let client = Client::builder()
            .danger_accept_invalid_certs(!config.verify_tls_certificates)
            .build()?;

        debug!("Foscam client for {}", config.base_url());

        Ok(Self {
            client,
            config: Arc::new(config),
            control_url,
            stream_url,
        })
    }

    /// Like [`FoscamApiClient::new`], for callers holding an optional configuration.
    pub fn from_config(config: Option<ClientConfig>) -> Result<Self> {
        match config {
            Some(config) => Self::new(config),
            None => Err(Error::InvalidConfiguration(
                "no config was supplied".to_string(),
            )),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn control_url(&self) -> &str {
        &self.control_url
    }

    pub fn stream_url(&self) -> &str {
        &self.stream_url
    }

    fn credentials(&self) -> Params {
        Params::new()
            .with("usr", &self.config.username)
            .with("pwd", &self.config.password)
    }

    async fn request(&self, command: &str, params: Params) -> Result<Response> {
        debug!(
            "CGI request: cmd={} params={:?}",
            command,
            params.keys().collect::<Vec<_>>()
        );

        let query = self.credentials().merge(params).with("cmd", command);
        let response = self
            .client
            .get(&self.control_url)
            .query(query.as_pairs())
            .send()
            .await?;

        let status = response.status();
        debug!("CGI response status: {}", status);

        Ok(response.error_for_status()?)
    }

    /// Sends a command and returns the body untouched.
    pub(crate) async fn send_raw(&self, command: &str, params: Params) -> Result<Bytes> {
        let body = self.request(command, params).await?.bytes().await?;
        debug!("CGI response: {} bytes", body.len());
        Ok(body)
    }

    /// Sends a command and normalizes the XML body.
    pub(crate) async fn send(&self, command: &str, params: Params) -> Result<CommandResponse> {
        let body = self.request(command, params).await?.text().await?;
        // Bodies can carry secrets (Wi-Fi keys, FTP and SMTP passwords).
        debug!("CGI response: {} bytes", body.len());
        Ok(CommandResponse::new(parse_response(Some(&body))))
    }

    /// Opens a long-lived GET against the stream endpoint. The caller owns the
    /// returned stream and closes it by dropping it.
    pub(crate) async fn stream(&self, command: &str) -> Result<MjpegStream> {
        debug!("Stream request: cmd={}", command);

        let query = Params::new().with("cmd", command).merge(self.credentials());
        let response = self
            .client
            .get(&self.stream_url)
            .query(query.as_pairs())
            .send()
            .await?
            .error_for_status()?;

        Ok(MjpegStream::new(response))
    }

    /// Fails without touching the network for commands that have no wire mapping.
    pub(crate) fn not_supported<T>(&self, command: &'static str) -> Result<T> {
        debug!("Command {} is not supported", command);
        Err(Error::NotSupported(command))
    }
}

fn check_url(url: &str, path: &str) -> Result<()> {
    let parsed = Url::parse(url)
        .map_err(|e| Error::InvalidConfiguration(format!("{url}: {e}")))?;
    if parsed.host_str().is_none() || parsed.path() != path {
        return Err(Error::InvalidConfiguration(format!(
            "host does not form a valid URL: {url}"
        )));
    }
    Ok(())
}
