//! Crypto suites and signature verification
//!
//! The suite set is closed: each suite owns a key-material decoder and a
//! signature verifier, and is named by two textual tag vocabularies (one
//! used on keys, one on signatures) that resolve to the same set.

pub mod eddsa;
pub mod es256k;
pub mod rs256;

use core::fmt;

use thiserror::Error;

/// The closed set of algorithm families a key or signature may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoSuite {
    /// EdDSA over edwards25519.
    Ed25519,
    /// RSASSA-PKCS1-v1_5 with SHA-256.
    Rsa,
    /// ECDSA over secp256k1 with SHA-256.
    Secp256k1,
}

impl CryptoSuite {
    /// Resolve the suite declared by a public key's `type` tag.
    pub fn from_key_type(tag: &str) -> Result<Self, SuiteError> {
        match tag {
            "Ed25519VerificationKey2018" => Ok(CryptoSuite::Ed25519),
            "RsaVerificationKey2018" => Ok(CryptoSuite::Rsa),
            "Secp256k1VerificationKey2018" => Ok(CryptoSuite::Secp256k1),
            _ => Err(SuiteError::UnknownSuite(tag.to_string())),
        }
    }

    /// Resolve the suite declared by a signature's `type` tag.
    pub fn from_signature_type(tag: &str) -> Result<Self, SuiteError> {
        match tag {
            "Ed25519Signature2018" => Ok(CryptoSuite::Ed25519),
            "RsaSignature2018" => Ok(CryptoSuite::Rsa),
            "EcdsaKoblitzSignature2016" => Ok(CryptoSuite::Secp256k1),
            _ => Err(SuiteError::UnknownSuite(tag.to_string())),
        }
    }

    /// Reconstruct an algorithm-native verifying key from decoded raw
    /// bytes.
    pub fn decode_key(self, bytes: &[u8]) -> Result<VerifyingKey, SuiteError> {
        match self {
            CryptoSuite::Ed25519 => eddsa::decode_key(bytes).map(VerifyingKey::EdDSA),
            CryptoSuite::Rsa => rs256::decode_key(bytes).map(VerifyingKey::Rs256),
            CryptoSuite::Secp256k1 => es256k::decode_key(bytes).map(VerifyingKey::Es256k),
        }
        .map_err(|source| SuiteError::InvalidKeyMaterial { suite: self, source })
    }
}

impl fmt::Display for CryptoSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoSuite::Ed25519 => f.write_str("Ed25519"),
            CryptoSuite::Rsa => f.write_str("RSA"),
            CryptoSuite::Secp256k1 => f.write_str("secp256k1"),
        }
    }
}

/// Errors resolving or applying a crypto suite.
#[derive(Error, Debug)]
pub enum SuiteError {
    /// The declared tag names no known suite.
    #[error("unrecognized crypto suite {0:?}")]
    UnknownSuite(String),

    /// The decoded raw bytes are not a valid key for the suite.
    #[error("invalid {suite} key material")]
    InvalidKeyMaterial {
        /// The suite the key was declared under.
        suite: CryptoSuite,
        /// The underlying decoder diagnostic.
        #[source]
        source: anyhow::Error,
    },
}

/// Verifying (public) keys for the supported suites.
#[derive(Debug, Clone)]
pub enum VerifyingKey {
    /// An `EdDSA` verifying key.
    EdDSA(ed25519_dalek::VerifyingKey),
    /// An RSA verifying key for PKCS#1 v1.5 / SHA-256 signatures.
    Rs256(rsa::pkcs1v15::VerifyingKey<sha2::Sha256>),
    /// A `secp256k1` ECDSA verifying key.
    Es256k(k256::ecdsa::VerifyingKey),
}

impl VerifyingKey {
    /// Verify `signature` over `message`.
    ///
    /// Returns false for any signature that does not parse for this
    /// suite or does not verify against the key; it never errors.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        match self {
            VerifyingKey::EdDSA(key) => eddsa::verify(key, message, signature),
            VerifyingKey::Rs256(key) => rs256::verify(key, message, signature),
            VerifyingKey::Es256k(key) => es256k::verify(key, message, signature),
        }
    }
}
