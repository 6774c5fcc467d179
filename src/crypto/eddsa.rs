//! EdDSA suite support

use anyhow::anyhow;
use signature::Verifier;

/// Reconstruct an Ed25519 verifying key from its 32-byte compressed
/// point form.
pub fn decode_key(bytes: &[u8]) -> Result<ed25519_dalek::VerifyingKey, anyhow::Error> {
    ed25519_dalek::VerifyingKey::try_from(bytes).map_err(|e| anyhow!("invalid Ed25519 key, {}", e))
}

/// Verify an Ed25519 signature, false on any parse or verification
/// failure.
pub fn verify(key: &ed25519_dalek::VerifyingKey, payload: &[u8], signature: &[u8]) -> bool {
    let Ok(signature) = ed25519_dalek::Signature::try_from(signature) else {
        return false;
    };

    key.verify(payload, &signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::{decode_key, verify};
    use ed25519_dalek::Signer;

    #[test]
    fn it_can_verify_signed_data() {
        let signing_key = ed25519_dalek::SigningKey::generate(&mut rand::rngs::OsRng);
        let data = &[0xdeu8, 0xad, 0xbe, 0xef];
        let signature = signing_key.sign(data);

        let key = decode_key(signing_key.verifying_key().as_bytes()).unwrap();
        assert!(verify(&key, data, &signature.to_bytes()));
        assert!(!verify(&key, &[0xde, 0xad], &signature.to_bytes()));
    }

    #[test]
    fn it_rejects_a_truncated_signature_without_erroring() {
        let signing_key = ed25519_dalek::SigningKey::generate(&mut rand::rngs::OsRng);
        let key = signing_key.verifying_key();

        assert!(!verify(&key, b"payload", &[0u8; 63]));
    }

    #[test]
    fn it_rejects_short_key_material() {
        assert!(decode_key(&[0u8; 16]).is_err());
    }
}
