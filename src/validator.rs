//! Envelope validation
//!
//! The orchestrator: parse both halves of the envelope, resolve every
//! descriptor, then run the structural, temporal, and cryptographic
//! checks in a fixed order, stopping at the first failure.

use std::collections::HashMap;

use crate::crypto::CryptoSuite;
use crate::did;
use crate::document::Document;
use crate::encoding;
use crate::error::{ParseError, ValidationError};
use crate::instruction::Instruction;

/// A document key with its suite resolved and material decoded.
#[derive(Debug)]
struct KeyDescriptor {
    id: String,
    suite: CryptoSuite,
    material: Vec<u8>,
}

/// A declared signature with its suite resolved and material decoded.
#[derive(Debug)]
struct SignatureDescriptor {
    target: String,
    suite: CryptoSuite,
    material: Vec<u8>,
}

/// Decide whether `instruction_text` is authorized to create the document
/// described by `document_text`.
///
/// Signatures are verified over the exact bytes of `document_text` as
/// supplied; the document is never re-serialized. The call is a pure
/// function of its inputs and may run concurrently without coordination.
#[tracing::instrument(level = "trace", skip_all)]
pub fn validate_creation(
    instruction_text: &str,
    document_text: &str,
) -> Result<(), ValidationError> {
    let document: Document = serde_json::from_str(document_text)
        .map_err(|e| ValidationError::MalformedDocument(ParseError::Json(e)))?;

    let instruction: Instruction = serde_json::from_str(instruction_text)
        .map_err(|e| ValidationError::MalformedInstruction(ParseError::Json(e)))?;

    if document.public_key.is_empty() {
        return Err(ValidationError::NoKeys);
    }

    let keys = document
        .public_key
        .iter()
        .map(|method| {
            let (_, material) = encoding::key_material(&method.extra)?;
            let suite = CryptoSuite::from_key_type(&method.key_type)?;

            Ok(KeyDescriptor { id: method.id.clone(), suite, material })
        })
        .collect::<Result<Vec<_>, ParseError>>()
        .map_err(ValidationError::MalformedDocument)?;

    for key in &keys {
        if !did::is_fragment_of(&key.id, &document.id) {
            return Err(ValidationError::InvalidPublicKeyId(key.id.clone()));
        }
    }

    let signatures = instruction
        .signatures
        .iter()
        .map(|entry| {
            let (_, material) = encoding::signature_material(&entry.extra)?;
            let suite = CryptoSuite::from_signature_type(&entry.signature_type)?;

            Ok(SignatureDescriptor { target: entry.id.clone(), suite, material })
        })
        .collect::<Result<Vec<_>, ParseError>>()
        .map_err(ValidationError::MalformedInstruction)?;

    let pairs = pair_up(&keys, &signatures)?;

    for (key, signature) in &pairs {
        if key.suite != signature.suite {
            return Err(ValidationError::CryptoSuiteMismatch {
                target: signature.target.clone(),
                key_suite: key.suite,
                signature_suite: signature.suite,
            });
        }
    }

    if let (Some(created), Some(updated)) = (document.created, document.updated) {
        if created > updated {
            return Err(ValidationError::InvalidTemporalRelation { created, updated });
        }
    }

    for (key, signature) in &pairs {
        let verifying_key = key
            .suite
            .decode_key(&key.material)
            .map_err(|e| ValidationError::MalformedDocument(ParseError::Suite(e)))?;

        if !verifying_key.verify(document_text.as_bytes(), &signature.material) {
            return Err(ValidationError::InvalidSignature(signature.target.clone()));
        }

        tracing::trace!(id = %signature.target, suite = %key.suite, "signature verified");
    }

    Ok(())
}

/// Match each signature to the document key it targets.
///
/// The mapping must be a bijection: equal cardinality, pairwise-distinct
/// key ids, and every target naming exactly one key.
fn pair_up<'a>(
    keys: &'a [KeyDescriptor],
    signatures: &'a [SignatureDescriptor],
) -> Result<Vec<(&'a KeyDescriptor, &'a SignatureDescriptor)>, ValidationError> {
    if signatures.len() != keys.len() {
        return Err(ValidationError::SignatureCount {
            keys: keys.len(),
            signatures: signatures.len(),
        });
    }

    let mut unmatched: HashMap<&str, &KeyDescriptor> = HashMap::with_capacity(keys.len());
    for key in keys {
        if unmatched.insert(key.id.as_str(), key).is_some() {
            // A duplicated key id can never pair one-to-one.
            return Err(ValidationError::SignatureTarget(key.id.clone()));
        }
    }

    let mut pairs = Vec::with_capacity(keys.len());
    for signature in signatures {
        match unmatched.remove(signature.target.as_str()) {
            Some(key) => pairs.push((key, signature)),
            None => return Err(ValidationError::SignatureTarget(signature.target.clone())),
        }
    }

    Ok(pairs)
}
