use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::client::ClientError;

#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(default)]
    field: Option<String>,
}

/// Thin JSON-over-HTTP layer shared by both clients. One attempt per call, no retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, reqwest::Client::new())
    }

    pub fn with_http(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));

        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ClientError> {
        let res = self.request(Method::GET, path, token).send().await?;
        read_data(res).await
    }

    pub async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self.request(method, path, token).json(body).send().await?;
        read_data(res).await
    }

    /// For endpoints answering `204 No Content`.
    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), ClientError> {
        let res = self.request(Method::DELETE, path, token).send().await?;
        if res.status().is_success() {
            return Ok(());
        }
        Err(read_error(res).await)
    }
}

async fn read_data<T: DeserializeOwned>(res: Response) -> Result<T, ClientError> {
    if !res.status().is_success() {
        return Err(read_error(res).await);
    }

    let status = res.status();
    let bytes = res.bytes().await?;
    let envelope: Envelope<T> = serde_json::from_slice(&bytes).map_err(|e| ClientError::Server {
        status: status.as_u16(),
        code: "INVALID_RESPONSE".to_string(),
        message: e.to_string(),
    })?;

    envelope.data.ok_or_else(|| ClientError::Server {
        status: status.as_u16(),
        code: "INVALID_RESPONSE".to_string(),
        message: "response carried no data".to_string(),
    })
}

async fn read_error(res: Response) -> ClientError {
    let status = res.status();
    let body = match res.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => return ClientError::Network(e.to_string()),
    };

    let (code, message, field) = match serde_json::from_slice::<Envelope<serde_json::Value>>(&body)
    {
        Ok(Envelope {
            error: Some(err), ..
        }) => (err.code, err.message, err.field),
        _ => (
            "UNKNOWN".to_string(),
            String::from_utf8_lossy(&body).into_owned(),
            None,
        ),
    };

    match status {
        StatusCode::BAD_REQUEST => ClientError::Validation { field, message },
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        other => ClientError::Server {
            status: other.as_u16(),
            code,
            message,
        },
    }
}
