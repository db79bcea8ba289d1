//! # foscam-rs
//!
//! An async client for the HTTP CGI interface of Foscam HD IP cameras.
//! Every camera command is one GET against `/cgi-bin/CGIProxy.fcgi`, answered
//! with a small XML document that this crate turns into JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use foscam_rs::{ClientConfig, FoscamApiClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfig::new("admin", "secret", "192.168.1.50");
//! let client = FoscamApiClient::new(config)?;
//!
//! // {"result":0,"brightness":50,"contrast":50,...}
//! let image = client.get_image_setting().await?;
//! println!("{image}");
//!
//! client.set_brightness(60).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Command catalog**: audio/video, device, network, PTZ, system, user and log commands
//! - **XML normalization**: `CGI_Result` is unwrapped and numeric text becomes numbers
//! - **Boolean coercion**: 0/1 flags become `true`/`false` where the camera means a switch
//! - **Snapshots**: raw JPEG bytes from `snapPicture2`
//! - **MJPEG streaming**: an open server-push stream from `CGIStream.cgi`
//!
//! Camera status codes are part of the returned data, not errors. Check
//! [`CommandResponse::is_success`] or [`CommandResponse::result_code`].
//!
//! ## Configuration
//!
//! The bundled binary reads a `config.toml`:
//!
//! ```toml
//! [camera]
//! username = "admin"
//! password = "secret"
//! host = "192.168.1.50"
//! port = 88
//! protocol = "http"
//! ```
//!
//! ## Streaming Example
//!
//! ```no_run
//! use foscam_rs::{Config, FoscamApiClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::new()?;
//! let client = FoscamApiClient::new(config.camera)?;
//!
//! let mut stream = client.get_mj_stream().await?;
//! println!("boundary: {:?}", stream.boundary());
//! while let Some(chunk) = stream.next_chunk().await? {
//!     println!("{} bytes", chunk.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api_client;
pub mod av;
pub mod coerce;
pub mod config;
pub mod device;
pub mod dto;
pub mod error;
pub mod misc;
pub mod network;
pub mod params;
pub mod ptz;
pub mod response;
pub mod stream;
pub mod system;
pub mod user;

// Re-export commonly used types at the crate root
pub use api_client::FoscamApiClient;
pub use coerce::{boolean_to_number, number_to_boolean};
pub use config::{ClientConfig, Config, Protocol};
pub use dto::*;
pub use error::{Error, Result};
pub use params::Params;
pub use response::{parse_response, CommandResponse, ResultCode};
pub use stream::MjpegStream;
