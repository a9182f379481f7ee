//! Email-delivery collaborator.
//!
//! The flow only knows [`EmailDelivery`]. Production uses [`EmailJsClient`];
//! when credentials are missing the server falls back to [`Unconfigured`] so
//! the rest of the site keeps serving.

use std::sync::Once;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::{ContactSettings, EmailCredentials};
use crate::error::{FolioError, Result};

/// What gets handed to the delivery service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    #[serde(rename = "user_name")]
    pub from_name: String,
    #[serde(rename = "user_email")]
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
}

#[async_trait]
pub trait EmailDelivery: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> Result<()>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a OutboundMessage,
}

static CRYPTO_PROVIDER: Once = Once::new();

fn ensure_crypto_provider() {
    CRYPTO_PROVIDER.call_once(|| {
        // Another component may have installed one already.
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// Client for the EmailJS REST API.
pub struct EmailJsClient {
    http: reqwest::Client,
    endpoint: String,
    credentials: EmailCredentials,
}

impl EmailJsClient {
    pub fn new(settings: &ContactSettings) -> Result<Self> {
        let credentials = settings.credentials()?;
        url::Url::parse(&settings.endpoint).map_err(|e| {
            FolioError::Config(format!("Invalid contact endpoint {}: {}", settings.endpoint, e))
        })?;

        ensure_crypto_provider();
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| FolioError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
            credentials,
        })
    }
}

#[async_trait]
impl EmailDelivery for EmailJsClient {
    async fn send(&self, message: &OutboundMessage) -> Result<()> {
        let request = SendRequest {
            service_id: &self.credentials.service_id,
            template_id: &self.credentials.template_id,
            user_id: &self.credentials.public_key,
            template_params: message,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| FolioError::Delivery(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(FolioError::Delivery(format!("{}: {}", status, body.trim())))
        }
    }
}

/// Stand-in used when no credentials are configured. Every send fails.
pub struct Unconfigured {
    reason: String,
}

impl Unconfigured {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl EmailDelivery for Unconfigured {
    async fn send(&self, _message: &OutboundMessage) -> Result<()> {
        Err(FolioError::Config(format!(
            "Email delivery is not configured: {}",
            self.reason
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> OutboundMessage {
        OutboundMessage {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Body".to_string(),
            to_name: "Durai Raj S".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let message = message();
        let request = SendRequest {
            service_id: "svc",
            template_id: "tpl",
            user_id: "key",
            template_params: &message,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["user_id"], "key");
        assert_eq!(json["template_params"]["user_name"], "Ada");
        assert_eq!(json["template_params"]["user_email"], "ada@example.com");
        assert_eq!(json["template_params"]["to_name"], "Durai Raj S");
    }

    #[test]
    fn test_client_requires_credentials() {
        let err = EmailJsClient::new(&ContactSettings::default())
            .err()
            .unwrap();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn test_client_rejects_bad_endpoint() {
        let settings = ContactSettings {
            endpoint: "not a url".to_string(),
            service_id: Some("s".to_string()),
            template_id: Some("t".to_string()),
            public_key: Some("k".to_string()),
            ..Default::default()
        };
        assert!(EmailJsClient::new(&settings).is_err());
    }

    #[tokio::test]
    async fn test_unconfigured_always_fails() {
        let delivery = Unconfigured::new("missing public_key");
        let err = delivery.send(&message()).await.unwrap_err();
        assert!(err.to_string().contains("missing public_key"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_delivery_error() {
        let settings = ContactSettings {
            endpoint: "http://127.0.0.1:9/send".to_string(),
            service_id: Some("s".to_string()),
            template_id: Some("t".to_string()),
            public_key: Some("k".to_string()),
            timeout_secs: Some(2),
            ..Default::default()
        };
        let client = EmailJsClient::new(&settings).unwrap();
        let err = client.send(&message()).await.unwrap_err();
        assert!(matches!(err, FolioError::Delivery(_)));
    }
}
