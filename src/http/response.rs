use super::Error;
use serde::de::DeserializeOwned;
use std::{error::Error as _, time::Duration};

pub const TRANSPORT_ERROR_STATUS: u16 = 0;

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: String,
    pub elapsed: Duration,
    pub error: Option<String>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>, elapsed: Duration) -> Self {
        Response {
            status,
            body: body.into(),
            elapsed,
            error: None,
        }
    }

    pub fn failed(err: &Error) -> Self {
        let message = match err.source() {
            Some(cause) => format!("{}: {}", err, cause),
            None => err.to_string(),
        };

        Response {
            status: TRANSPORT_ERROR_STATUS,
            body: String::new(),
            elapsed: Duration::ZERO,
            error: Some(message),
        }
    }

    pub fn is_status(&self, status: u16) -> bool {
        self.status == status
    }

    pub fn is_transport_error(&self) -> bool {
        self.error.is_some()
    }

    /// A request counts as failed when it never completed or the service
    /// answered with a 4xx/5xx.
    pub fn is_failure(&self) -> bool {
        self.is_transport_error() || self.status >= 400
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str::<T>(&self.body).map_err(|cause| Error::ParseBody { cause })
    }
}
