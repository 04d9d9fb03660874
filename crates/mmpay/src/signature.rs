use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the HMAC-SHA256 signature for an outbound request or callback.
///
/// The MAC is taken over `"{nonce}.{payload}"` keyed by the merchant
/// secret, and returned as lowercase hex. Deterministic: identical inputs
/// always produce the identical signature.
pub fn sign(secret: &str, nonce: &str, payload: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(nonce.as_bytes());
    mac.update(b".");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

pub(crate) mod hex {
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().fold(String::new(), |mut s, b| {
            use std::fmt::Write;
            let _ = write!(s, "{b:02x}");
            s
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // HMAC-SHA256(key="abc123", msg='n1.{"orderId":"ORD-1","amount":100}')
    const KNOWN_SIGNATURE: &str =
        "dff3d34b777006ac2848b595c8e7d9d6fe8cfcb3d6f4662a029ba3a071222b27";

    #[test]
    fn known_answer_vector() {
        let sig = sign("abc123", "n1", r#"{"orderId":"ORD-1","amount":100}"#);
        assert_eq!(sig, KNOWN_SIGNATURE);
    }

    #[test]
    fn signing_is_deterministic() {
        let payload = r#"{"orderId":"ORD-1","amount":100}"#;
        assert_eq!(sign("abc123", "n1", payload), sign("abc123", "n1", payload));
    }

    #[test]
    fn different_nonce_changes_signature() {
        let payload = r#"{"orderId":"ORD-1","amount":100}"#;
        assert_ne!(sign("abc123", "n1", payload), sign("abc123", "n2", payload));
    }

    #[test]
    fn different_secret_changes_signature() {
        let payload = r#"{"orderId":"ORD-1","amount":100}"#;
        assert_ne!(
            sign("abc123", "n1", payload),
            sign("abc124", "n1", payload)
        );
    }

    #[test]
    fn single_character_change_invalidates() {
        assert_ne!(
            sign("abc123", "n1", r#"{"orderId":"ORD-1","amount":100}"#),
            sign("abc123", "n1", r#"{"orderId":"ORD-1","amount":101}"#)
        );
    }

    #[test]
    fn signature_is_lowercase_hex() {
        let sig = sign("abc123", "n1", "payload");
        assert_eq!(sig.len(), 64);
        assert!(sig
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
