//! Error types for envelope validation

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::crypto::{CryptoSuite, SuiteError};
use crate::encoding::MaterialError;

/// The reasons an envelope can fail validation.
///
/// Exactly one variant is produced per call; checks run in a fixed order
/// and the first failing check determines the variant.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The document is not valid JSON, or one of its key descriptors
    /// carries missing, ambiguous, or undecodable material or an
    /// unrecognized suite tag.
    #[error("malformed DID document: {0}")]
    MalformedDocument(#[source] ParseError),

    /// The instruction is not valid JSON, or one of its signature
    /// descriptors is malformed in the same sense as above.
    #[error("malformed instruction: {0}")]
    MalformedInstruction(#[source] ParseError),

    /// The document declares no public keys.
    #[error("document declares no public keys")]
    NoKeys,

    /// A key identifier is not a fragment of the document's own id.
    #[error("public key id {0} is not a fragment of the document id")]
    InvalidPublicKeyId(String),

    /// The number of signatures differs from the number of keys.
    #[error("expected one signature per key, got {signatures} signatures for {keys} keys")]
    SignatureCount {
        /// Number of keys the document declares.
        keys: usize,
        /// Number of signatures the instruction carries.
        signatures: usize,
    },

    /// Signatures and keys do not pair one-to-one: a duplicated target,
    /// a target naming no key, or a duplicated key id.
    #[error("signature target {0} does not map one-to-one onto the document keys")]
    SignatureTarget(String),

    /// A key and its signature declare different algorithm families.
    #[error("key {target} is declared as {key_suite} but its signature as {signature_suite}")]
    CryptoSuiteMismatch {
        /// The key id both descriptors refer to.
        target: String,
        /// Suite declared on the key.
        key_suite: CryptoSuite,
        /// Suite declared on the signature.
        signature_suite: CryptoSuite,
    },

    /// The document claims to have been updated before it was created.
    #[error("document updated at {updated}, before its creation at {created}")]
    InvalidTemporalRelation {
        /// The document's creation timestamp.
        created: DateTime<Utc>,
        /// The document's update timestamp.
        updated: DateTime<Utc>,
    },

    /// A structurally valid signature did not verify against the
    /// document bytes.
    #[error("signature for {0} does not verify against the document bytes")]
    InvalidSignature(String),
}

/// Why a document or instruction failed to parse into descriptors.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input text is not valid JSON of the expected shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A descriptor's encoded material is missing, ambiguous, or does
    /// not decode.
    #[error(transparent)]
    Material(#[from] MaterialError),

    /// A declared suite tag is unrecognized, or key bytes are invalid
    /// for their suite.
    #[error(transparent)]
    Suite(#[from] SuiteError),
}
