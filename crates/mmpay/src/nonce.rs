use crate::signature::hex;

/// Generate a fresh nonce for an outbound request.
///
/// 16 bytes from the OS CSPRNG, hex-encoded. Nonces are single-use: a new
/// one is drawn for every handshake and every create call so a captured
/// signature cannot be replayed.
pub fn fresh_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::fill(&mut bytes[..]); // CSPRNG via ThreadRng -> OsRng
    hex::encode(bytes)
}
