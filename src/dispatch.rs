/// Repository-dispatch client: builds the GitHub request and classifies the outcome
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::config::{DispatchConfig, GITHUB_ACCEPT};
use crate::domain::Domain;
use crate::error::BlockError;
use crate::storage::Credentials;

/// JSON body of a repository-dispatch event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DispatchPayload {
    pub event_type: String,
    pub client_payload: ClientPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientPayload {
    pub domain: String,
}

/// A fully built outbound `POST`
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl DispatchRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body text of a completed HTTP exchange.
///
/// Transports only need to read the body for non-2xx statuses.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs exactly one HTTP `POST`; any thrown error becomes `TransportFailure`
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn post(&self, request: &DispatchRequest) -> Result<HttpResponse, BlockError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchResult {
    Success(Domain),
    Failure { status: u16, body: String },
    TransportError(String),
}

impl DispatchResult {
    pub fn into_result(self) -> Result<Domain, BlockError> {
        match self {
            DispatchResult::Success(domain) => Ok(domain),
            DispatchResult::Failure { status, body } => {
                Err(BlockError::RemoteRejection { status, body })
            }
            DispatchResult::TransportError(message) => Err(BlockError::TransportFailure(message)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DispatchClient {
    config: DispatchConfig,
}

impl DispatchClient {
    pub fn new(config: DispatchConfig) -> Self {
        DispatchClient { config }
    }

    pub fn build_request(
        &self,
        domain: &Domain,
        credentials: &Credentials,
    ) -> Result<DispatchRequest, BlockError> {
        let payload = DispatchPayload {
            event_type: self.config.event_type.clone(),
            client_payload: ClientPayload {
                domain: domain.as_str().to_string(),
            },
        };
        let body = serde_json::to_string(&payload)
            .map_err(|e| BlockError::TransportFailure(format!("Failed to encode payload: {}", e)))?;

        Ok(DispatchRequest {
            url: self
                .config
                .dispatch_url(&credentials.account, &credentials.repository),
            headers: vec![
                ("Authorization".to_string(), format!("token {}", credentials.token)),
                ("Accept".to_string(), GITHUB_ACCEPT.to_string()),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body,
        })
    }

    /// Send one dispatch event for `domain`. No retries; duplicates are not suppressed.
    pub async fn dispatch<T: HttpTransport>(
        &self,
        transport: &T,
        domain: &Domain,
        credentials: &Credentials,
    ) -> DispatchResult {
        let request = match self.build_request(domain, credentials) {
            Ok(request) => request,
            Err(e) => return DispatchResult::TransportError(e.to_string()),
        };

        info!("Fetching: {}", request.url);

        match transport.post(&request).await {
            Ok(response) if response.is_success() => {
                info!("GitHub request succeeded for {}", domain);
                DispatchResult::Success(domain.clone())
            }
            Ok(response) => {
                error!("GitHub request failed ({}): {}", response.status, response.body);
                DispatchResult::Failure {
                    status: response.status,
                    body: response.body,
                }
            }
            Err(e) => {
                error!("Fetch/network error: {}", e);
                let message = match e {
                    BlockError::TransportFailure(message) => message,
                    other => other.to_string(),
                };
                DispatchResult::TransportError(message)
            }
        }
    }
}
