use super::{
    request_builder::{Get, HttpRequest, Post, RequestBuilder},
    response::Response,
    Error,
};
use std::time::Instant;

#[derive(Clone, Debug)]
pub struct Client {
    inner: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Client {
        Client {
            inner: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self, path: &str) -> RequestBuilder<Get> {
        RequestBuilder::get(self.clone(), self.url(path))
    }

    pub fn post(&self, path: &str) -> RequestBuilder<Post> {
        RequestBuilder::post(self.clone(), self.url(path))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(super) async fn execute(&self, request: HttpRequest) -> Result<Response, Error> {
        let HttpRequest {
            method,
            url,
            query,
            headers,
            body,
        } = request;

        let mut builder = self.inner.request(method.into(), &url);

        if !query.is_empty() {
            builder = builder.query(&query);
        }

        for (key, value) in headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = body {
            builder = builder.body(body);
        }

        let request = builder
            .build()
            .map_err(|cause| Error::BuildRequest { url, cause })?;

        let started = Instant::now();
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(|cause| Error::Transport { cause })?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadBody { cause })?;

        Ok(Response::new(status, text, started.elapsed()))
    }
}
