use sha2::{Digest, Sha256};

/// Display token for a registered email: the first seven lowercase hex
/// characters of the SHA-256 of the raw address bytes. Deterministic and
/// irreversible; used for UI personalization only, never as a storage key.
pub fn email_digest(email: &str) -> String {
    let hash = Sha256::digest(email.as_bytes());
    let mut token = hex::encode(hash);
    token.truncate(7);
    token
}
