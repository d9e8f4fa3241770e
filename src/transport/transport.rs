use crate::transport::{Exchange, Response};

use async_trait::async_trait;

use doomstack::{Doom, Top};

#[derive(Doom)]
pub enum TransportError {
    #[doom(description("Failed to build HTTP client: {:?}", source))]
    #[doom(wrap(build_failed))]
    BuildFailed { source: reqwest::Error },
    #[doom(description("Request failed: {:?}", source))]
    #[doom(wrap(request_failed))]
    RequestFailed { source: reqwest::Error },
    #[doom(description("Failed to read response body: {:?}", source))]
    #[doom(wrap(read_failed))]
    ReadFailed { source: reqwest::Error },
    #[doom(description("Remote unreachable"))]
    Unreachable,
}

/// Performs one network exchange. Any status code is a `Response`:
/// only network or protocol failures are errors.
#[async_trait]
pub trait Transport: 'static + Send + Sync {
    async fn exchange(&self, exchange: Exchange) -> Result<Response, Top<TransportError>>;
}
