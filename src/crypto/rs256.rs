//! RS256 (RSASSA-PKCS1-v1_5 with SHA-256) suite support

use anyhow::anyhow;
use rsa::pkcs1::DecodeRsaPublicKey;
use sha2::Sha256;
use signature::Verifier;

/// Reconstruct an RSA verifying key from a PKCS#1 DER `RSAPublicKey`.
pub fn decode_key(bytes: &[u8]) -> Result<rsa::pkcs1v15::VerifyingKey<Sha256>, anyhow::Error> {
    let key =
        rsa::RsaPublicKey::from_pkcs1_der(bytes).map_err(|e| anyhow!("invalid RSA key, {}", e))?;

    Ok(rsa::pkcs1v15::VerifyingKey::new(key))
}

/// Verify a PKCS#1 v1.5 signature over SHA-256 of the payload, false on
/// any parse or verification failure.
pub fn verify(
    key: &rsa::pkcs1v15::VerifyingKey<Sha256>,
    payload: &[u8],
    signature: &[u8],
) -> bool {
    let Ok(signature) = rsa::pkcs1v15::Signature::try_from(signature) else {
        return false;
    };

    key.verify(payload, &signature).is_ok()
}
