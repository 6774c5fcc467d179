//! The instruction half of an envelope

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// The action an instruction authorizes on a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Register the document.
    Create,
    /// Replace the current document state.
    Update,
    /// Retire the document.
    Delete,
}

/// An instruction: an action plus the signatures authorizing it.
#[derive(Debug, Clone, Deserialize)]
pub struct Instruction {
    /// The requested action.
    pub action: Action,

    /// One signature per document key.
    #[serde(default)]
    pub signatures: Vec<SignatureEntry>,
}

/// One declared signature.
#[derive(Debug, Clone, Deserialize)]
pub struct SignatureEntry {
    /// The id of the document key this signature was produced with.
    pub id: String,

    /// Signature suite tag, e.g. `Ed25519Signature2018`.
    #[serde(rename = "type")]
    pub signature_type: String,

    /// Remaining fields, including the single encoded-material field
    /// resolved by [`crate::encoding::signature_material`].
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::{Action, Instruction};

    #[test]
    fn it_parses_each_action() {
        for (text, action) in [
            ("create", Action::Create),
            ("update", Action::Update),
            ("delete", Action::Delete),
        ] {
            let instruction: Instruction = serde_json::from_str(&format!(
                r#"{{ "action": "{}", "signatures": [] }}"#,
                text
            ))
            .unwrap();

            assert_eq!(instruction.action, action);
        }
    }

    #[test]
    fn it_rejects_an_unknown_action() {
        let result =
            serde_json::from_str::<Instruction>(r#"{ "action": "revoke", "signatures": [] }"#);

        assert!(result.is_err());
    }
}
