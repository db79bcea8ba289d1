use crate::error::Result;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};

/// An open motion-JPEG server-push stream.
///
/// Nothing is buffered or parsed: chunks are handed out as they arrive. The
/// connection stays open until the stream is dropped.
#[derive(Debug)]
pub struct MjpegStream {
    response: Response,
}

impl MjpegStream {
    pub(crate) fn new(response: Response) -> Self {
        Self { response }
    }

    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    /// Multipart boundary announced in the `Content-Type` header, if any.
    pub fn boundary(&self) -> Option<&str> {
        self.content_type()?
            .split(';')
            .filter_map(|part| part.trim().split_once('='))
            .find(|(key, _)| key.trim().eq_ignore_ascii_case("boundary"))
            .map(|(_, value)| value.trim().trim_matches('"'))
    }

    /// Next chunk of the body, `None` once the camera closes the stream.
    pub async fn next_chunk(&mut self) -> Result<Option<Bytes>> {
        Ok(self.response.chunk().await?)
    }

    pub fn into_response(self) -> Response {
        self.response
    }
}
