/// Header carrying the request nonce.
pub const HEADER_NONCE: &str = "X-Mmpay-Nonce";

/// Header carrying the hex-encoded HMAC-SHA256 signature of the body.
pub const HEADER_SIGNATURE: &str = "X-Mmpay-Signature";

/// Header carrying the bearer token issued by the handshake endpoint.
pub const HEADER_BTOKEN: &str = "X-Mmpay-Btoken";

/// Gateway environment. Both environments share the configured base URL;
/// they differ in the endpoint paths below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    /// Path of the authentication handshake endpoint.
    pub fn handshake_path(&self) -> &'static str {
        match self {
            Environment::Sandbox => "/payments/sandbox-handshake",
            Environment::Production => "/payments/handshake",
        }
    }

    /// Path of the payment creation endpoint.
    pub fn create_path(&self) -> &'static str {
        match self {
            Environment::Sandbox => "/payments/sandbox-create",
            Environment::Production => "/payments/create",
        }
    }
}
