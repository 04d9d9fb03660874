use serde::{Deserialize, Serialize};

use crate::error::MmpayError;

/// A single line item in a payment request. Amounts are integer minor
/// units (e.g. cents) so the serialized form is stable across languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub amount: u64,
    pub quantity: u32,
}

/// A merchant-initiated payment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub order_id: String,
    pub amount: u64,
    pub items: Vec<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl PaymentRequest {
    /// Check required fields before serialization. Runs before any network
    /// I/O so a bad request never reaches the gateway.
    pub fn validate(&self) -> Result<(), MmpayError> {
        if self.order_id.is_empty() {
            return Err(MmpayError::Validation("orderId is required".to_string()));
        }
        if self.items.is_empty() {
            return Err(MmpayError::Validation(
                "items must not be empty".to_string(),
            ));
        }
        for (i, item) in self.items.iter().enumerate() {
            if item.name.is_empty() {
                return Err(MmpayError::Validation(format!(
                    "items[{i}].name is required"
                )));
            }
            if item.quantity == 0 {
                return Err(MmpayError::Validation(format!(
                    "items[{i}].quantity must be at least 1"
                )));
            }
        }
        if let Some(url) = &self.callback_url {
            if url.is_empty() {
                return Err(MmpayError::Validation(
                    "callbackUrl must not be empty when present".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Wire payload for a create call: the payment request extended with the
/// merchant `appId` and the request nonce.
///
/// Field declaration order is the canonical key order — `canonical_json`
/// relies on it. Do not reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPayload {
    pub app_id: String,
    pub nonce: String,
    pub amount: u64,
    pub order_id: String,
    pub items: Vec<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl PaymentPayload {
    /// Extend a validated request with the merchant id and a nonce.
    pub fn from_request(app_id: &str, nonce: &str, request: &PaymentRequest) -> Self {
        Self {
            app_id: app_id.to_string(),
            nonce: nonce.to_string(),
            amount: request.amount,
            order_id: request.order_id.clone(),
            items: request.items.clone(),
            callback_url: request.callback_url.clone(),
            currency: request.currency.clone(),
        }
    }
}

/// Body of a handshake call. Carries the payment's nonce so the gateway can
/// tie the issued token to the create call that follows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandshakeRequest {
    pub order_id: String,
    pub nonce: String,
}

/// Response from the gateway's handshake endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandshakeResponse {
    /// Bearer token for the subsequent create call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

/// Response from the gateway's create endpoint. The gateway owns this
/// schema; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
