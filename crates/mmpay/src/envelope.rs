use crate::signature;

/// A canonical payload together with the nonce and signature computed over
/// it. Transient: built once per outbound request, sent as body + headers,
/// never persisted.
///
/// The signature is valid only for the exact byte sequence in `payload`;
/// re-serializing the payload invalidates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedEnvelope {
    pub payload: String,
    pub nonce: String,
    pub signature: String,
}

impl SignedEnvelope {
    /// Sign `payload` under `secret` with `nonce`.
    pub fn seal(secret: &str, nonce: impl Into<String>, payload: impl Into<String>) -> Self {
        let nonce = nonce.into();
        let payload = payload.into();
        let signature = signature::sign(secret, &nonce, &payload);
        Self {
            payload,
            nonce,
            signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_matches_direct_signing() {
        let envelope = SignedEnvelope::seal("abc123", "n1", r#"{"orderId":"ORD-1","amount":100}"#);
        assert_eq!(
            envelope.signature,
            signature::sign("abc123", "n1", r#"{"orderId":"ORD-1","amount":100}"#)
        );
    }

    #[test]
    fn seal_is_deterministic() {
        let a = SignedEnvelope::seal("secret", "n1", "payload");
        let b = SignedEnvelope::seal("secret", "n1", "payload");
        assert_eq!(a, b);
    }

    #[test]
    fn envelope_keeps_payload_verbatim() {
        let payload = r#"{"orderId":"ORD-1","amount":100}"#;
        let envelope = SignedEnvelope::seal("secret", "n1", payload);
        assert_eq!(envelope.payload, payload);
        assert_eq!(envelope.nonce, "n1");
    }
}
