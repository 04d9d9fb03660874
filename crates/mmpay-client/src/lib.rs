//! Async client for the MMPay payment gateway.
//!
//! Drives the signed request flow against the gateway's HTTP API:
//! authentication handshake first, then payment creation with the issued
//! token. All signing and verification logic lives in the `mmpay` core
//! crate; this crate only adds the `reqwest` transport.
//!
//! # Quick example
//!
//! ```no_run
//! use mmpay::{Credentials, Environment, Item, PaymentRequest};
//! use mmpay_client::MmpayClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), mmpay::MmpayError> {
//! let credentials = Credentials::new(
//!     "your_app_id",
//!     "your_pub_key",
//!     "your_secret_key",
//!     "https://api.mmpay.com",
//! )?;
//! let client = MmpayClient::new(credentials, Environment::Sandbox);
//!
//! let response = client
//!     .create_payment(&PaymentRequest {
//!         order_id: "ORD-123456789".to_string(),
//!         amount: 1000,
//!         items: vec![Item {
//!             name: "Test Item".to_string(),
//!             amount: 1000,
//!             quantity: 1,
//!         }],
//!         callback_url: Some("https://yoursite.com/callback".to_string()),
//!         currency: None,
//!     })
//!     .await?;
//!
//! println!("payment url: {:?}", response.payment_url);
//! # Ok(())
//! # }
//! ```

mod http_client;

pub use http_client::MmpayClient;

// Re-export commonly needed types from core
pub use mmpay::{
    CreatePaymentResponse, Credentials, Environment, HandshakeRequest, HandshakeResponse, Item,
    MmpayError, PaymentRequest, HEADER_BTOKEN, HEADER_NONCE, HEADER_SIGNATURE,
};
