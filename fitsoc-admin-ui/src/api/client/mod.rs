use crate::config::Config;
use async_trait::async_trait;
use dioxus::prelude::{info, warn};
use fitsoc::{AuthError, AuthGateway, AuthGrant, Credentials, Society};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared_http::api::{
    ErrorResponse, HealthResponse, LoginRequest, LoginResponse, SocietyResponse,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{message}")]
    Status { status: StatusCode, message: String },
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status {
                status: StatusCode::UNAUTHORIZED | StatusCode::BAD_REQUEST,
                ..
            } => AuthError::InvalidCredentials,
            ApiError::Status { message, .. } => AuthError::Server(message),
            ApiError::Request(e) => AuthError::Transport(e.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_config(Config::from_env())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn resource_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }
}

impl ApiClient {
    pub async fn check_health(&self) -> Result<HealthResponse, ApiError> {
        let url = format!("{}/health", self.config.http_server);
        let response = self.client.get(&url).send().await?;
        Ok(expect_success(response).await?.json().await?)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/auth/login", self.config.http_server);
        let response = self
            .client
            .post(&url)
            .json(&LoginRequest::from(credentials))
            .send()
            .await
            .inspect_err(|e| warn!("Login request failed: {}", e))?;

        let response = expect_success(response).await?;
        info!("Login accepted for {}", credentials.email);
        Ok(response.json().await?)
    }

    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let url = format!("{}/auth/logout", self.config.http_server);
        let response = self.client.post(&url).bearer_auth(token).send().await?;
        expect_success(response).await?;
        Ok(())
    }

    pub async fn list_societies(&self, token: &str) -> Result<Vec<Society>, ApiError> {
        let societies: Vec<SocietyResponse> = self.list(token, "/societies").await?;
        Ok(societies.into_iter().map(Society::from).collect())
    }

    /// GETs a JSON array from `path` under the API base URL.
    pub async fn list<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
    ) -> Result<Vec<T>, ApiError> {
        let request = self.client.get(self.resource_url(path));
        Ok(self.send(request, token).await?.json().await?)
    }

    pub async fn create(
        &self,
        token: &str,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<(), ApiError> {
        let request = self.client.post(self.resource_url(path)).json(body);
        self.send(request, token).await?;
        Ok(())
    }

    pub async fn delete(&self, token: &str, path: &str) -> Result<(), ApiError> {
        let request = self.client.delete(self.resource_url(path));
        self.send(request, token).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder, token: &str) -> Result<Response, ApiError> {
        let response = request.bearer_auth(token).send().await?;
        expect_success(response).await
    }
}

/// Turns a non-2xx response into [`ApiError::Status`], preferring the
/// server's own error message.
async fn expect_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };
    warn!("API responded {}: {}", status, message);
    Err(ApiError::Status { status, message })
}

#[async_trait(?Send)]
impl AuthGateway for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthGrant, AuthError> {
        let response = ApiClient::login(self, credentials).await?;
        Ok(response.into())
    }

    async fn logout(&self, token: &str) -> Result<(), AuthError> {
        Ok(ApiClient::logout(self, token).await?)
    }
}
