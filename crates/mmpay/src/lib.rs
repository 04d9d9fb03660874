//! MMPay payment gateway SDK core.
//!
//! Implements the signing and verification protocol for the MMPay HTTP API:
//! canonical JSON serialization, HMAC-SHA256 over `"{nonce}.{payload}"`,
//! and constant-time callback verification. HTTP transport lives in the
//! `mmpay-client` crate; this crate is pure and has no network dependency.
//!
//! # Signing
//!
//! ```
//! use mmpay::{canonical_json, HandshakeRequest, SignedEnvelope};
//!
//! let body = canonical_json(&HandshakeRequest {
//!     order_id: "ORD-1".to_string(),
//!     nonce: "n1".to_string(),
//! })
//! .unwrap();
//! let envelope = SignedEnvelope::seal("sk_test_secret", "n1", body);
//! assert_eq!(envelope.signature.len(), 64);
//! ```
//!
//! # Verifying a callback
//!
//! Hand over the *raw* request body exactly as received — any
//! re-serialization changes the signed bytes:
//!
//! ```
//! use mmpay::verify_callback;
//!
//! let raw_body = r#"{"orderId":"ORD-1","status":"paid"}"#;
//! let ok = verify_callback("sk_test_secret", raw_body, "nonce-from-header", "sig-from-header");
//! assert!(!ok.unwrap());
//! ```

pub mod callback;
pub mod canonical;
pub mod constants;
pub mod credentials;
pub mod envelope;
pub mod error;
pub mod nonce;
pub mod payment;
pub mod security;
pub mod signature;

pub use callback::verify_callback;
pub use canonical::canonical_json;
pub use constants::{Environment, HEADER_BTOKEN, HEADER_NONCE, HEADER_SIGNATURE};
pub use credentials::Credentials;
pub use envelope::SignedEnvelope;
pub use error::MmpayError;
pub use nonce::fresh_nonce;
pub use payment::{
    CreatePaymentResponse, HandshakeRequest, HandshakeResponse, Item, PaymentPayload,
    PaymentRequest,
};
pub use signature::sign;
