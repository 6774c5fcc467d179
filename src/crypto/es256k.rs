//! ES256K (secp256k1) suite support

use anyhow::anyhow;
use signature::Verifier;

/// Reconstruct a secp256k1 verifying key from a SEC1-encoded point,
/// compressed or uncompressed.
pub fn decode_key(bytes: &[u8]) -> Result<k256::ecdsa::VerifyingKey, anyhow::Error> {
    k256::ecdsa::VerifyingKey::from_sec1_bytes(bytes).map_err(|_| anyhow!("invalid secp256k1 key"))
}

/// Verify a fixed-width `r || s` ECDSA signature over SHA-256 of the
/// payload, false on any parse or verification failure.
pub fn verify(key: &k256::ecdsa::VerifyingKey, payload: &[u8], signature: &[u8]) -> bool {
    let Ok(signature) = k256::ecdsa::Signature::try_from(signature) else {
        return false;
    };

    key.verify(payload, &signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::{decode_key, verify};
    use k256::ecdsa::signature::Signer;
    use k256::ecdsa::{Signature, SigningKey};
    use k256::elliptic_curve::sec1::ToEncodedPoint;

    fn signing_key() -> SigningKey {
        SigningKey::from_slice(&[0x17; 32]).unwrap()
    }

    #[test]
    fn it_can_verify_signed_data() {
        let signing_key = signing_key();
        let data = b"attack at dawn";
        let signature: Signature = signing_key.sign(data);
        let signature_bytes = signature.to_bytes();

        let compressed = signing_key.verifying_key().to_encoded_point(true);
        let key = decode_key(compressed.as_bytes()).unwrap();

        assert!(verify(&key, data, signature_bytes.as_slice()));
        assert!(!verify(&key, b"attack at dusk", signature_bytes.as_slice()));
    }

    #[test]
    fn it_accepts_uncompressed_points_too() {
        let signing_key = signing_key();
        let uncompressed = signing_key.verifying_key().to_encoded_point(false);

        assert!(decode_key(uncompressed.as_bytes()).is_ok());
    }

    #[test]
    fn it_rejects_a_malformed_point() {
        assert!(decode_key(&[0u8; 33]).is_err());
        assert!(decode_key(&[0x04; 12]).is_err());
    }
}
