use reqwest::{header, Client, RequestBuilder, Response};

use crate::{
    api::types::{ActionResponse, ApiError},
    config,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    /// POSTs with a JSON content type and no body, the way the attendance
    /// endpoints expect.
    pub(super) async fn post_empty(&self, path: &str) -> Result<ActionResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .post(format!("{}{}", base_url, path))
            .header(header::CONTENT_TYPE, "application/json");
        self.send_action(request).await
    }

    pub(super) async fn post_form<T>(&self, path: &str, form: &T) -> Result<ActionResponse, ApiError>
    where
        T: serde::Serialize + ?Sized,
    {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .post(format!("{}{}", base_url, path))
            .form(form);
        self.send_action(request).await
    }

    async fn send_action(&self, request: RequestBuilder) -> Result<ActionResponse, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::parse_action_response(response).await
    }

    async fn parse_action_response(response: Response) -> Result<ActionResponse, ApiError> {
        let status = response.status();
        if !status.is_success() {
            log::warn!("{} answered with status {}", response.url().path(), status);
            return Err(ApiError::unexpected_status(status.as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {}", e)))
    }
}
