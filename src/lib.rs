#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unreachable_pub)]

//! did-envelope
//!
//! Validation of signed operation envelopes against DID documents: given a
//! document declaring a set of public keys and an instruction carrying one
//! signature per key, [`validate_creation`] decides whether the instruction
//! is structurally and cryptographically authorized to apply, returning a
//! typed failure otherwise.

pub mod crypto;
pub mod did;
pub mod document;
pub mod encoding;
pub mod error;
pub mod instruction;
pub mod validator;

pub use error::ValidationError;
pub use validator::validate_creation;
