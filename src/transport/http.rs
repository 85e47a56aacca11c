use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use url::Url;

use super::{ ChatTransport, TransportError };
use crate::models::chat::{ ChatRequest, ChatResponse };

/// reqwest-backed transport posting `{ session_id, message }` as JSON.
#[derive(Debug, Clone)]
pub struct HttpChatTransport {
    http: HttpClient,
    endpoint: String,
}

impl HttpChatTransport {
    pub fn new(endpoint: &str) -> Result<Self, TransportError> {
        let parsed = Url::parse(endpoint).map_err(|source| TransportError::InvalidEndpoint {
            url: endpoint.to_string(),
            source,
        })?;

        Ok(Self {
            http: HttpClient::new(),
            endpoint: parsed.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(
        &self,
        session_id: &str,
        message: &str
    ) -> Result<ChatResponse, TransportError> {
        let req = ChatRequest {
            session_id: session_id.to_string(),
            message: message.to_string(),
        };

        debug!("POST {} ({} chars)", self.endpoint, req.message.len());
        let resp = self.http
            .post(&self.endpoint)
            .json(&req)
            .send().await?
            .error_for_status()?;

        let body = resp.text().await?;
        serde_json::from_str::<ChatResponse>(&body)
            .map_err(|e| TransportError::MalformedReply(e.to_string()))
    }
}
