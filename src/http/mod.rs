mod client;
mod request_builder;
mod response;

pub use client::Client;
pub use response::Response;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot build request for {url}")]
    BuildRequest {
        url: String,
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to serialize request body")]
    SerializeBody {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Request failed")]
    Transport {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadBody {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseBody {
        #[source]
        cause: serde_json::Error,
    },
}
