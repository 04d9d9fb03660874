//! Canonical JSON serialization for signed payloads.
//!
//! The gateway verifies the signature against the exact byte sequence of
//! the request body, so serialization must be reproducible: compact
//! separators (no spaces after `,` or `:`) and a fixed key order.
//! `serde_json::to_string` emits compact output and serializes struct
//! fields in declaration order, so the payload structs in
//! [`crate::payment`] declare their fields in the wire order.

use serde::Serialize;

use crate::error::MmpayError;

/// Serialize `value` to its canonical wire form.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, MmpayError> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::{HandshakeRequest, Item, PaymentPayload};

    #[test]
    fn payment_payload_canonical_form() {
        let payload = PaymentPayload {
            app_id: "app_1".to_string(),
            nonce: "n1".to_string(),
            amount: 1000,
            order_id: "ORD-1".to_string(),
            items: vec![Item {
                name: "Test Item".to_string(),
                amount: 1000,
                quantity: 1,
            }],
            callback_url: Some("https://merchant.example/cb".to_string()),
            currency: Some("USD".to_string()),
        };

        assert_eq!(
            canonical_json(&payload).unwrap(),
            r#"{"appId":"app_1","nonce":"n1","amount":1000,"orderId":"ORD-1","items":[{"name":"Test Item","amount":1000,"quantity":1}],"callbackUrl":"https://merchant.example/cb","currency":"USD"}"#
        );
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let payload = PaymentPayload {
            app_id: "app_1".to_string(),
            nonce: "n1".to_string(),
            amount: 500,
            order_id: "ORD-2".to_string(),
            items: vec![Item {
                name: "A".to_string(),
                amount: 500,
                quantity: 2,
            }],
            callback_url: None,
            currency: None,
        };

        let json = canonical_json(&payload).unwrap();
        assert!(!json.contains("callbackUrl"));
        assert!(!json.contains("currency"));
        assert_eq!(
            json,
            r#"{"appId":"app_1","nonce":"n1","amount":500,"orderId":"ORD-2","items":[{"name":"A","amount":500,"quantity":2}]}"#
        );
    }

    #[test]
    fn handshake_canonical_form() {
        let request = HandshakeRequest {
            order_id: "ORD-1".to_string(),
            nonce: "n1".to_string(),
        };
        assert_eq!(
            canonical_json(&request).unwrap(),
            r#"{"orderId":"ORD-1","nonce":"n1"}"#
        );
    }

    #[test]
    fn output_contains_no_whitespace() {
        let request = HandshakeRequest {
            order_id: "ORD-1".to_string(),
            nonce: "n1".to_string(),
        };
        let json = canonical_json(&request).unwrap();
        assert!(!json.contains(": "));
        assert!(!json.contains(", "));
    }
}
