//! The DID document half of an envelope

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// A DID document: an identifier bound to a set of public keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// The document's own identifier.
    pub id: String,

    /// When the document was first registered.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    /// When the document was last changed.
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,

    /// The public keys bound to the identifier.
    #[serde(default)]
    pub public_key: Vec<VerificationMethod>,
}

/// One declared public key.
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationMethod {
    /// Key identifier, a fragment of the document id.
    pub id: String,

    /// Key suite tag, e.g. `Ed25519VerificationKey2018`.
    #[serde(rename = "type")]
    pub key_type: String,

    /// The identifier controlling this key.
    pub controller: String,

    /// Remaining fields, including the single encoded-material field
    /// resolved by [`crate::encoding::key_material`].
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::Document;

    #[test]
    fn it_parses_a_document_with_optional_fields_absent() {
        let document: Document =
            serde_json::from_str(r#"{ "id": "did:example:abc" }"#).unwrap();

        assert_eq!(document.id, "did:example:abc");
        assert!(document.created.is_none());
        assert!(document.updated.is_none());
        assert!(document.public_key.is_empty());
    }

    #[test]
    fn it_keeps_material_fields_in_the_extra_map() {
        let document: Document = serde_json::from_str(
            r#"{
                "id": "did:example:abc",
                "publicKey": [{
                    "id": "did:example:abc#keys-1",
                    "type": "Ed25519VerificationKey2018",
                    "controller": "did:example:abc",
                    "publicKeyBase58": "3Mmk"
                }]
            }"#,
        )
        .unwrap();

        let method = &document.public_key[0];
        assert_eq!(method.key_type, "Ed25519VerificationKey2018");
        assert!(method.extra.contains_key("publicKeyBase58"));
    }

    #[test]
    fn it_rejects_an_unparseable_timestamp() {
        let result = serde_json::from_str::<Document>(
            r#"{ "id": "did:example:abc", "created": "not-a-date" }"#,
        );

        assert!(result.is_err());
    }
}
