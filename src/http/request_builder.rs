use super::{client::Client, response::Response, Error};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use std::{fmt, marker::PhantomData};

const JSON_CONTENT_TYPE: &str = "application/json";
const USER_AGENT_VALUE: &str = "pr-review-load";

pub trait RequestType {}
pub struct Get;
pub struct Post;

impl RequestType for Get {}
impl RequestType for Post {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

#[derive(Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    fn new(method: Method, url: impl Into<String>) -> Self {
        HttpRequest {
            method,
            url: url.into(),
            query: vec![],
            headers: vec![
                (ACCEPT.as_str().to_owned(), JSON_CONTENT_TYPE.to_owned()),
                (USER_AGENT.as_str().to_owned(), USER_AGENT_VALUE.to_owned()),
            ],
            body: None,
        }
    }
}

pub struct RequestBuilder<T: RequestType> {
    _marker: PhantomData<T>,
    client: Client,
    request: HttpRequest,
    error: Option<Error>,
}

impl RequestBuilder<Get> {
    pub fn get(client: Client, url: impl Into<String>) -> Self {
        RequestBuilder {
            _marker: PhantomData,
            client,
            request: HttpRequest::new(Method::Get, url),
            error: None,
        }
    }
}

impl RequestBuilder<Post> {
    pub fn post(client: Client, url: impl Into<String>) -> Self {
        RequestBuilder {
            _marker: PhantomData,
            client,
            request: HttpRequest::new(Method::Post, url),
            error: None,
        }
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Self {
        match serde_json::to_string(body) {
            Ok(json) => {
                self.request.body = Some(json);
                self.header(CONTENT_TYPE.as_str(), JSON_CONTENT_TYPE)
            }
            Err(cause) => {
                self.error = Some(Error::SerializeBody { cause });
                self
            }
        }
    }
}

impl<T> RequestBuilder<T>
where
    T: RequestType,
{
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.headers.push((key.into(), value.into()));
        self
    }

    /// Sends the request. Never fails: transport and build errors come back
    /// as a response with status `0`.
    pub async fn send(self) -> Response {
        let method = self.request.method;
        let url = self.request.url.clone();

        let result = match self.error {
            Some(err) => Err(err),
            None => self.client.execute(self.request).await,
        };

        match result {
            Ok(response) => {
                log::trace!("{} {} -> {}", method, url, response.status);
                response
            }
            Err(err) => {
                let response = Response::failed(&err);
                log::debug!(
                    "{} {} failed: {}",
                    method,
                    url,
                    response.error.as_deref().unwrap_or_default()
                );
                response
            }
        }
    }
}
