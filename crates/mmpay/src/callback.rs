//! Inbound webhook callback verification.
//!
//! The web framework receiving the callback must hand over the exact raw
//! request body as received, plus the [`crate::constants::HEADER_NONCE`]
//! and [`crate::constants::HEADER_SIGNATURE`] header values. Verification
//! recomputes the signature over the raw bytes; parsing the body and
//! re-encoding it would change the byte sequence and always fail.

use crate::error::MmpayError;
use crate::security;
use crate::signature;

/// Verify the signature of a callback delivery.
///
/// Returns `Ok(true)` only when `expected_signature` matches the signature
/// recomputed over `(nonce, raw_payload)` with `secret`; `Ok(false)` on
/// mismatch. Missing or empty inputs are an error, never a silent pass.
/// The comparison is constant-time.
pub fn verify_callback(
    secret: &str,
    raw_payload: &str,
    nonce: &str,
    expected_signature: &str,
) -> Result<bool, MmpayError> {
    if raw_payload.is_empty() || nonce.is_empty() || expected_signature.is_empty() {
        return Err(MmpayError::Verification(
            "missing payload, nonce, or signature".to_string(),
        ));
    }

    let computed = signature::sign(secret, nonce, raw_payload);
    let matches = security::constant_time_eq(computed.as_bytes(), expected_signature.as_bytes());
    if !matches {
        // Log the nonce only; echoing signatures here would put a valid
        // MAC in the logs whenever the caller mixes up header values.
        tracing::warn!(nonce = %nonce, "callback signature mismatch");
    }
    Ok(matches)
}
