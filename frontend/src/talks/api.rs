use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered, but not with a 2xx status.
    #[error("HTTP {status} {status_text} ({url})")]
    Status {
        status: u16,
        status_text: String,
        url: String,
    },

    #[error("Malformed payload: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Network error: {0}")]
    Transport(gloo_net::Error),
}

impl From<gloo_net::Error> for FetchError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::SerdeError(e) => FetchError::Malformed(e),
            other => FetchError::Transport(other),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Malformed(error)
    }
}

/// JSON retrieval seam used by the pipeline, so it can run against an
/// in-memory catalog outside the browser.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = Request::get(url).send().await?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                status_text: response.status_text(),
                url: response.url(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}
