use async_trait::async_trait;
use reqwest::{Method, StatusCode};

use crate::errors::MiGlobalIapError;

use super::request_headers::RequestHeaders;

#[derive(Debug)]
pub struct HttpRequest {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) headers: RequestHeaders,
    pub(crate) body: Option<String>,
}

#[derive(Debug)]
pub struct HttpResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: Vec<u8>,
}

/// A single HTTP exchange. Failures before a status code is available (DNS,
/// connect, reading the body) are reported as transport errors; any status
/// code, successful or not, is returned as a response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, MiGlobalIapError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub(crate) fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, MiGlobalIapError> {
        let mut builder = self.client.request(request.method, &request.url);
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| MiGlobalIapError::Transport(Box::new(e)))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| MiGlobalIapError::Transport(Box::new(e)))?;
        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
