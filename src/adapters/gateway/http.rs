//! HTTP transfer gateway
//!
//! Talks to the transfer service over its JSON POST endpoint. The wire
//! contract carries `waitForConfirmation`; the two named trait operations
//! map onto that flag here, at the edge.

use super::{TransferGateway, TransferRequest, TransferResponse};
use crate::config::GatewayConfig;
use crate::domain::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use std::time::Duration;

/// Wire shape of a transfer request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireTransferRequest<'a> {
    recipient_address: &'a str,
    usd_value: f64,
    reason: &'a str,
    admin_id: &'a str,
    wait_for_confirmation: bool,
}

/// Transfer gateway backed by the HTTP distribution endpoint
pub struct HttpTransferGateway {
    client: Client,
    url: String,
    config: GatewayConfig,
}

impl HttpTransferGateway {
    /// Create a new gateway from configuration
    pub fn new(config: GatewayConfig) -> Self {
        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().expect("Failed to build HTTP client");
        let url = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            config.distribute_path
        );

        Self {
            client,
            url,
            config,
        }
    }

    /// The full endpoint URL requests are posted to
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post_transfer(
        &self,
        request: &TransferRequest,
        wait_for_confirmation: bool,
    ) -> Result<TransferResponse> {
        let body = WireTransferRequest {
            recipient_address: &request.recipient_address,
            usd_value: request.usd_value,
            reason: &request.reason,
            admin_id: &request.admin_id,
            wait_for_confirmation,
        };

        tracing::debug!(
            url = %self.url,
            address = %request.recipient_address,
            usd_value = request.usd_value,
            wait_for_confirmation = wait_for_confirmation,
            "Posting transfer request"
        );

        let mut http_request = self.client.post(&self.url).json(&body);
        if let Some(ref token) = self.config.api_token {
            http_request = http_request
                .header("Authorization", format!("Bearer {}", token.expose_secret()));
        }

        let response = http_request.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout(e.to_string())
            } else {
                GatewayError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            let err = match status {
                s if s.is_server_error() => GatewayError::ServerError {
                    status: s.as_u16(),
                    message,
                },
                StatusCode::REQUEST_TIMEOUT => GatewayError::Timeout(message),
                s => GatewayError::ClientError {
                    status: s.as_u16(),
                    message,
                },
            };
            return Err(err.into());
        }

        let transfer_response = response
            .json::<TransferResponse>()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(transfer_response)
    }
}

#[async_trait]
impl TransferGateway for HttpTransferGateway {
    async fn submit(&self, request: &TransferRequest) -> Result<TransferResponse> {
        self.post_transfer(request, false).await
    }

    async fn submit_and_confirm(&self, request: &TransferRequest) -> Result<TransferResponse> {
        self.post_transfer(request, true).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use crate::domain::DisburseError;

    fn gateway_for(server: &mockito::ServerGuard) -> HttpTransferGateway {
        HttpTransferGateway::new(GatewayConfig {
            base_url: server.url(),
            distribute_path: "/distribute".to_string(),
            api_token: Some(secret_string("test-token".to_string())),
            timeout_seconds: 5,
            tls_verify: true,
        })
    }

    fn request() -> TransferRequest {
        TransferRequest {
            recipient_address: "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_string(),
            usd_value: 2.0,
            reason: "bonus payout".to_string(),
            admin_id: "admin-1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/distribute")
            .match_header("authorization", "Bearer test-token")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "recipientAddress": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                "usdValue": 2.0,
                "waitForConfirmation": false,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "transactionHash": "0xhash", "distributionId": "d1"}"#)
            .create_async()
            .await;

        let gateway = gateway_for(&server);
        let response = gateway.submit(&request()).await.unwrap();

        assert!(response.success);
        assert_eq!(response.transaction_hash.as_deref(), Some("0xhash"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_submit_and_confirm_sets_wire_flag() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/distribute")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "waitForConfirmation": true,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "transactionHash": "0xhash"}"#)
            .create_async()
            .await;

        let gateway = gateway_for(&server);
        let response = gateway.submit_and_confirm(&request()).await.unwrap();

        assert!(response.success);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejected_transfer_returns_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/distribute")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": false, "error": "insufficient balance"}"#)
            .create_async()
            .await;

        let gateway = gateway_for(&server);
        let response = gateway.submit(&request()).await.unwrap();

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("insufficient balance"));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_gateway_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/distribute")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let gateway = gateway_for(&server);
        let result = gateway.submit(&request()).await;

        match result {
            Err(DisburseError::Gateway(GatewayError::ServerError { status, .. })) => {
                assert_eq!(status, 500);
            }
            other => panic!("Expected ServerError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_client_error_maps_to_gateway_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/distribute")
            .with_status(403)
            .with_body("forbidden")
            .create_async()
            .await;

        let gateway = gateway_for(&server);
        let result = gateway.submit(&request()).await;

        assert!(matches!(
            result,
            Err(DisburseError::Gateway(GatewayError::ClientError {
                status: 403,
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/distribute")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json at all")
            .create_async()
            .await;

        let gateway = gateway_for(&server);
        let result = gateway.submit(&request()).await;

        assert!(matches!(
            result,
            Err(DisburseError::Gateway(GatewayError::InvalidResponse(_)))
        ));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let gateway = HttpTransferGateway::new(GatewayConfig {
            base_url: "https://api.example.com/".to_string(),
            distribute_path: "/distribute".to_string(),
            api_token: None,
            timeout_seconds: 5,
            tls_verify: true,
        });
        assert_eq!(gateway.url(), "https://api.example.com/distribute");
    }
}
